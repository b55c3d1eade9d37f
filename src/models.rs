//! Frontend Models
//!
//! Data sent to the server.

use serde::{Deserialize, Serialize};

/// Link identifiers in display order, top to bottom.
///
/// Serializes as a bare JSON array, e.g. `["id3","id1","id2"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkOrder(pub Vec<String>);

impl LinkOrder {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_a_bare_array() {
        let order = LinkOrder::new(vec!["id3".into(), "id1".into(), "id2".into()]);
        assert_eq!(order.to_json().unwrap(), r#"["id3","id1","id2"]"#);
    }

    #[test]
    fn test_empty_order() {
        let order = LinkOrder::default();
        assert_eq!(order.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_order_reads_back() {
        let order: LinkOrder = serde_json::from_str(r#"["b","a","c"]"#).unwrap();
        assert_eq!(order.0, vec!["b", "a", "c"]);
    }
}
