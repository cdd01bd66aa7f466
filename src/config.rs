use serde::Deserialize;

use crate::sendgrid::api;

pub const DEFAULT_PATH: &str = "/etc/sendgrid-mailer/sendgrid.toml";
const ENV_PREFIX: &str = "SENDGRID";

/// Mailer configuration. Handed to the adapter explicitly; nothing is
/// looked up globally at send time.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// SendGrid API key. An empty key fails each send with
    /// `Error::Config` before any message is built.
    #[serde(default)]
    pub api_key: String,

    /// Override for the API base URL. Tests point this at a local
    /// mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    api::SENDGRID_BASE_URL.to_string()
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Config {
            api_key: api_key.to_string(),
            base_url: default_base_url(),
        }
    }
}

/// Loads mailer config from the filesystem and merges it with any
/// environment variables prefixed with SENDGRID_.
///
/// This function will panic on error.
pub fn load_config(path: Option<&str>) -> Config {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_PATH)))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .unwrap();

    settings.try_deserialize::<Config>().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_points_at_public_api() {
        let config = Config::new("SG.key");
        assert_eq!(config.api_key, "SG.key");
        assert_eq!(config.base_url, "https://api.sendgrid.com");
    }
}
