use std::error;
use std::fmt;

/// Error type for the mailer.
/// Every failed send maps to exactly one variant, so callers can
/// match on the failure category instead of parsing log output.
#[derive(Clone, Debug)]
pub enum Error {
    /// No usable API key in the adapter's configuration.
    Config(String),
    /// Neither an HTML nor a plain-text body was supplied.
    MissingContent,
    /// The API answered with something other than `202 Accepted`.
    Provider { status: u16, message: String },
    /// The request never completed (connect failure, bad URL, etc.).
    Request(String),
    RequestTimeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Config(ref msg) => write!(f, "Config: {}", msg),
            Error::MissingContent => f.write_str("Can't send email with no content"),
            Error::Provider {
                status,
                ref message,
            } => write!(f, "Provider ({}): {}", status, message),
            Error::Request(ref msg) => write!(f, "Request: {}", msg),
            Error::RequestTimeout => f.write_str("RequestTimeout"),
        }
    }
}

impl error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::RequestTimeout
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Request(err.to_string())
    }
}
