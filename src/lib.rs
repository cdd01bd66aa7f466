pub mod config;
pub mod email;
pub mod error;
pub mod mailer;
pub mod sendgrid;

pub use config::Config;
pub use email::{AddressList, Attachment, Recipients};
pub use error::Error;
pub use mailer::{Mailer, MailerFuture};
pub use sendgrid::SendGridMailer;
