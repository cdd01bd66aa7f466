use reqwest::StatusCode;

use super::api;
use super::types::Mail;

use crate::error::Error;

/// Thin wrapper over one reqwest client pointed at a SendGrid-shaped
/// API. No timeout is set here; whatever the transport defaults to
/// applies.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Submit a message. A `202 Accepted` is the sole success signal;
    /// anything else comes back as `Error::Provider` carrying the
    /// most useful message the response body offers.
    pub async fn send(&self, api_key: &str, mail: &Mail) -> Result<(), Error> {
        let url = api::mail_send_url(&self.base_url);

        let resp = self
            .http
            .post(reqwest::Url::parse(&url)?)
            .bearer_auth(api_key)
            .json(mail)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::ACCEPTED {
            return Ok(());
        }

        let body = resp.text().await?;
        let message = api::extract_error(&body).unwrap_or(body);

        Err(Error::Provider {
            status: status.as_u16(),
            message,
        })
    }
}
