use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::email::{Attachment, Recipients};
use crate::error::Error;

// Future type returned by trait methods
pub type MailerFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, Error>> + Send + 'a>>;

/// Capability interface for sending transactional email. Hosts hold a
/// `dyn Mailer` and stay unaware of which provider sits behind it.
pub trait Mailer: Send + Sync {
    /// Send a plain-text email.
    fn send_plain<'a>(
        &'a self,
        to: &'a Recipients,
        from: &'a str,
        subject: &'a str,
        plain: &'a str,
        attachments: &'a [Attachment],
        headers: &'a HashMap<String, String>,
    ) -> MailerFuture<'a, ()>;

    /// Send an HTML email, with `plain` as an optional text fallback.
    fn send_html<'a>(
        &'a self,
        to: &'a Recipients,
        from: &'a str,
        subject: &'a str,
        html: &'a str,
        attachments: &'a [Attachment],
        headers: &'a HashMap<String, String>,
        plain: Option<&'a str>,
    ) -> MailerFuture<'a, ()>;
}
