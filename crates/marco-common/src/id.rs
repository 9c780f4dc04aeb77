use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id attached to outgoing gateway requests for log correlation.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identifier for a conversation exchange.
///
/// Allocated from a per-session monotonic counter, so later exchanges
/// always compare greater than earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExchangeId(u64);

impl ExchangeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn correlation_id_is_unique() {
        let a = new_correlation_id();
        let b = new_correlation_id();
        assert_ne!(a, b);
    }

    #[test]
    fn exchange_id_ordering_follows_counter() {
        let a = ExchangeId::new(1);
        let b = ExchangeId::new(2);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn exchange_id_display() {
        let id = ExchangeId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_u64(), 42);
    }

    #[test]
    fn exchange_id_serialization() {
        let id = ExchangeId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExchangeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
