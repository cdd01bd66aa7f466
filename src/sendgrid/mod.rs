use std::collections::HashMap;

pub mod api;

mod client;
mod types;

pub use client::Client;
pub use types::Mail;

use crate::config::Config;
use crate::email::{AddressList, Attachment, Recipients};
use crate::error::Error;
use crate::mailer::{Mailer, MailerFuture};

/// SendGrid-backed mailer. One instance holds the configuration and a
/// reusable HTTP client; every send is an independent round trip to
/// the API.
pub struct SendGridMailer {
    config: Config,
    client: Client,
}

impl SendGridMailer {
    pub fn new(config: Config) -> Self {
        let client = Client::new(&config.base_url);
        SendGridMailer { config, client }
    }

    /// Shared send routine behind both trait operations.
    async fn dispatch(
        &self,
        to: &Recipients,
        from: &str,
        subject: &str,
        html: Option<&str>,
        attachments: &[Attachment],
        headers: &HashMap<String, String>,
        plain: Option<&str>,
    ) -> Result<(), Error> {
        if self.config.api_key.is_empty() {
            let err = Error::Config("no SendGrid api_key configured".to_string());
            log::error!("{}", err);
            return Err(err);
        }

        let mut mail = Mail::new(from, subject);

        let to = to.resolve();
        mail.add_tos(&to);

        // Pull the recipient-steering keys out of the header map before
        // the rest is forwarded verbatim. The caller's map stays
        // untouched.
        let mut headers = headers.clone();

        if let Some(cc) = headers.remove("Cc") {
            let cc = AddressList::split(&cc).without(&to);
            if !cc.is_empty() {
                mail.add_ccs(&cc);
            }
        }

        if let Some(bcc) = headers.remove("Bcc") {
            let bcc = AddressList::split(&bcc).without(&to);
            if !bcc.is_empty() {
                mail.add_bccs(&bcc);
            }
        }

        if let Some(reply_to) = headers.remove("Reply-To") {
            mail.set_reply_to(&reply_to);
        }

        for (key, value) in &headers {
            mail.add_header(key, value);
        }

        let html = html.unwrap_or("");
        let plain = plain.unwrap_or("");

        if html.is_empty() && plain.is_empty() {
            let err = Error::MissingContent;
            log::error!("{}", err);
            return Err(err);
        }

        if !html.is_empty() {
            mail.add_content("text/html", html);
        }

        if !plain.is_empty() {
            mail.add_content("text/plain", plain);
        }

        for attachment in attachments {
            mail.add_attachment(attachment);
        }

        match self.client.send(&self.config.api_key, &mail).await {
            Ok(()) => {
                log::debug!("Email sent");
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to send email: {}", e);
                Err(e)
            }
        }
    }
}

impl Mailer for SendGridMailer {
    fn send_plain<'a>(
        &'a self,
        to: &'a Recipients,
        from: &'a str,
        subject: &'a str,
        plain: &'a str,
        attachments: &'a [Attachment],
        headers: &'a HashMap<String, String>,
    ) -> MailerFuture<'a, ()> {
        Box::pin(self.dispatch(to, from, subject, None, attachments, headers, Some(plain)))
    }

    fn send_html<'a>(
        &'a self,
        to: &'a Recipients,
        from: &'a str,
        subject: &'a str,
        html: &'a str,
        attachments: &'a [Attachment],
        headers: &'a HashMap<String, String>,
        plain: Option<&'a str>,
    ) -> MailerFuture<'a, ()> {
        Box::pin(self.dispatch(to, from, subject, Some(html), attachments, headers, plain))
    }
}
