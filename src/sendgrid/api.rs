use serde::Deserialize;

pub const SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";
pub const MAIL_SEND_ENDPOINT: &str = "/v3/mail/send";

/// Error body returned by the v3 API alongside non-202 statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
    pub field: Option<String>,
}

/// Pull the first human-readable message out of an error body, if the
/// body parses as one.
pub fn extract_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.errors.into_iter().next())
        .and_then(|err| err.message)
}

#[inline]
pub fn mail_send_url(base_url: &str) -> String {
    format!("{}{}", base_url, MAIL_SEND_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_error_message() {
        let body = r#"{"errors":[{"message":"bad request","field":null},{"message":"second"}]}"#;
        assert_eq!(extract_error(body), Some("bad request".to_string()));
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_error("upstream exploded"), None);
    }

    #[test]
    fn message_free_body_yields_none() {
        assert_eq!(extract_error(r#"{"errors":[]}"#), None);
        assert_eq!(
            extract_error(r#"{"errors":[{"field":"personalizations"}]}"#),
            None
        );
    }
}
