use std::slice;

/// Generic recipient and attachment types shared by all send calls.
/// The idea is to resolve loose caller input into these once, at the
/// boundary, and let the provider module convert them into its own
/// wire format.
#[derive(Clone, Debug)]
pub enum Recipients {
    /// One address, or several in a single `;`- or `,`-delimited string.
    Text(String),
    /// Addresses the caller already split.
    List(Vec<String>),
}

impl Recipients {
    /// Resolve into the canonical address list.
    pub fn resolve(&self) -> AddressList {
        match *self {
            Recipients::Text(ref s) => AddressList::split(s),
            Recipients::List(ref addrs) => {
                let mut list = AddressList::new();
                for addr in addrs {
                    list.insert(addr);
                }
                list
            }
        }
    }
}

impl From<&str> for Recipients {
    fn from(s: &str) -> Self {
        Recipients::Text(s.to_string())
    }
}

impl From<String> for Recipients {
    fn from(s: String) -> Self {
        Recipients::Text(s)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addrs: Vec<String>) -> Self {
        Recipients::List(addrs)
    }
}

/// Unique addresses in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressList(Vec<String>);

impl AddressList {
    pub fn new() -> Self {
        Default::default()
    }

    /// Split a recipient string into addresses.
    ///
    /// `;` wins over `,` when both are present. Whitespace and stray
    /// delimiters are trimmed from the whole string only; the split
    /// parts are kept untouched. No syntax checking happens here,
    /// the API rejects what it doesn't like.
    pub fn split(input: &str) -> Self {
        let mut list = Self::new();

        if input.contains(';') {
            for part in input.trim().trim_matches(';').split(';') {
                list.insert(part);
            }
        } else if input.contains(',') {
            for part in input.trim().trim_matches(',').split(',') {
                list.insert(part);
            }
        } else {
            list.insert(input.trim());
        }

        list
    }

    fn insert(&mut self, addr: &str) {
        if !self.contains(addr) {
            self.0.push(addr.to_string());
        }
    }

    pub fn contains(&self, addr: &str) -> bool {
        self.0.iter().any(|a| a == addr)
    }

    /// Addresses in `self` that are not in `other`.
    pub fn without(&self, other: &AddressList) -> AddressList {
        let mut list = AddressList::new();
        for addr in &self.0 {
            if !other.contains(addr) {
                list.insert(addr);
            }
        }
        list
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }
}

/// A single outbound attachment: raw bytes plus the metadata the API
/// needs to label them.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub data: Vec<u8>,
    pub content_type: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_semicolon() {
        let list = AddressList::split("a@example.com;b@example.com");
        assert_eq!(list.len(), 2);
        assert!(list.contains("a@example.com"));
        assert!(list.contains("b@example.com"));
    }

    #[test]
    fn split_on_comma() {
        let list = AddressList::split("a@example.com,b@example.com");
        assert_eq!(list.len(), 2);
        assert!(list.contains("a@example.com"));
        assert!(list.contains("b@example.com"));
    }

    #[test]
    fn semicolon_wins_over_comma() {
        let list = AddressList::split("a@example.com,b@example.com;c@example.com");
        assert_eq!(list.len(), 2);
        assert!(list.contains("a@example.com,b@example.com"));
        assert!(list.contains("c@example.com"));
    }

    #[test]
    fn stray_delimiters_are_trimmed() {
        let list = AddressList::split(" ;a@example.com;b@example.com; ");
        assert_eq!(list.len(), 2);
        assert!(list.contains("a@example.com"));
        assert!(list.contains("b@example.com"));
    }

    #[test]
    fn split_parts_keep_their_whitespace() {
        let list = AddressList::split("a@example.com; b@example.com");
        assert!(list.contains("a@example.com"));
        assert!(list.contains(" b@example.com"));
    }

    #[test]
    fn single_address_is_trimmed() {
        let list = AddressList::split("  a@example.com  ");
        assert_eq!(list.len(), 1);
        assert!(list.contains("a@example.com"));
    }

    #[test]
    fn list_input_is_passed_through() {
        let to: Recipients = vec!["a@example.com".to_string(), "b@example.com".to_string()].into();
        let list = to.resolve();
        assert_eq!(
            list.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
            vec!["a@example.com", "b@example.com"]
        );
    }

    #[test]
    fn duplicate_addresses_collapse() {
        let to = Recipients::List(vec![
            "a@example.com".to_string(),
            "a@example.com".to_string(),
            "b@example.com".to_string(),
        ]);
        assert_eq!(to.resolve().len(), 2);
    }

    #[test]
    fn without_removes_overlap() {
        let to = AddressList::split("a@example.com;b@example.com");
        let cc = AddressList::split("b@example.com;c@example.com").without(&to);
        assert_eq!(cc.len(), 1);
        assert!(cc.contains("c@example.com"));
        assert!(!cc.contains("b@example.com"));
    }
}
