use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use serde::Serialize;

use crate::email::{AddressList, Attachment};

/// Outbound message in the v3 `mail/send` shape. Built up from the
/// generic types in `crate::email` and serialized straight into the
/// request body.
#[derive(Debug, Serialize)]
pub struct Mail {
    personalizations: Vec<Personalization>,
    from: Address,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address>,
    content: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<MailAttachment>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    headers: HashMap<String, String>,
}

#[derive(Debug, Default, Serialize)]
struct Personalization {
    to: Vec<Address>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<Address>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bcc: Vec<Address>,
}

#[derive(Debug, Default, Serialize)]
struct Address {
    email: String,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(rename = "type")]
    type_: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct MailAttachment {
    /// Raw bytes, base64-encoded for the wire.
    content: String,
    #[serde(rename = "type")]
    type_: String,
    filename: String,
}

impl Address {
    fn new(email: &str) -> Self {
        Address {
            email: email.to_string(),
        }
    }
}

impl Mail {
    /// A message with sender and subject set, and a single empty
    /// personalization ready to take recipients.
    pub fn new(from: &str, subject: &str) -> Self {
        Mail {
            personalizations: vec![Personalization::default()],
            from: Address::new(from),
            subject: subject.to_string(),
            reply_to: None,
            content: Vec::new(),
            attachments: Vec::new(),
            headers: HashMap::new(),
        }
    }

    pub fn add_tos(&mut self, addrs: &AddressList) {
        for addr in addrs.iter() {
            self.personalizations[0].to.push(Address::new(addr));
        }
    }

    pub fn add_ccs(&mut self, addrs: &AddressList) {
        for addr in addrs.iter() {
            self.personalizations[0].cc.push(Address::new(addr));
        }
    }

    pub fn add_bccs(&mut self, addrs: &AddressList) {
        for addr in addrs.iter() {
            self.personalizations[0].bcc.push(Address::new(addr));
        }
    }

    pub fn set_reply_to(&mut self, addr: &str) {
        self.reply_to = Some(Address::new(addr));
    }

    pub fn add_header(&mut self, key: &str, value: &str) {
        self.headers.insert(key.to_string(), value.to_string());
    }

    /// Attach a content part. `text/plain` parts go to the front of
    /// the serialized array; the API rejects any other order.
    pub fn add_content(&mut self, mime: &str, value: &str) {
        let part = Content {
            type_: mime.to_string(),
            value: value.to_string(),
        };

        if mime == "text/plain" {
            self.content.insert(0, part);
        } else {
            self.content.push(part);
        }
    }

    pub fn add_attachment(&mut self, attachment: &Attachment) {
        self.attachments.push(attachment.into());
    }
}

impl From<&Attachment> for MailAttachment {
    fn from(attachment: &Attachment) -> MailAttachment {
        MailAttachment {
            content: BASE64.encode(&attachment.data),
            type_: attachment.content_type.clone(),
            filename: attachment.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(mail: &Mail) -> serde_json::Value {
        serde_json::to_value(mail).unwrap()
    }

    #[test]
    fn plain_part_sorts_first() {
        let mut mail = Mail::new("from@example.com", "Subject");
        mail.add_content("text/html", "<p>hi</p>");
        mail.add_content("text/plain", "hi");

        let body = value_of(&mail);
        let content = body["content"].as_array().unwrap();
        assert_eq!(content[0]["type"], "text/plain");
        assert_eq!(content[0]["value"], "hi");
        assert_eq!(content[1]["type"], "text/html");
        assert_eq!(content[1]["value"], "<p>hi</p>");
    }

    #[test]
    fn empty_collections_stay_off_the_wire() {
        let mut mail = Mail::new("from@example.com", "Subject");
        mail.add_content("text/plain", "hi");

        let body = value_of(&mail);
        assert!(body.get("reply_to").is_none());
        assert!(body.get("attachments").is_none());
        assert!(body.get("headers").is_none());
        assert!(body["personalizations"][0].get("cc").is_none());
        assert!(body["personalizations"][0].get("bcc").is_none());
    }

    #[test]
    fn attachment_round_trips_through_base64() {
        let mut mail = Mail::new("from@example.com", "Subject");
        mail.add_content("text/plain", "hi");
        mail.add_attachment(&Attachment {
            data: vec![0xde, 0xad, 0xbe, 0xef],
            content_type: "application/octet-stream".to_string(),
            name: "blob.bin".to_string(),
        });

        let body = value_of(&mail);
        let att = &body["attachments"][0];
        assert_eq!(att["filename"], "blob.bin");
        assert_eq!(att["type"], "application/octet-stream");

        let decoded = BASE64.decode(att["content"].as_str().unwrap()).unwrap();
        assert_eq!(decoded, vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
