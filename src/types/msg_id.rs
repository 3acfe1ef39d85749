use serde::{Deserialize, Serialize};

/// Canonical CAN message identifier.
///
/// Identifiers are kept as **opaque strings** (never parsed numerically, so
/// `"0x100"` and `"100"` stay distinct) and normalized exactly once:
/// surrounding whitespace is trimmed and ASCII letters are folded to
/// **uppercase**. The same normalization is applied at parse time and at
/// query time, so `"1a0"`, `" 1A0 "` and `"1A0"` all select the same signal.
///
/// # Fields
/// - the canonical string, reachable via [`MessageId::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Builds a canonical identifier from a raw token.
    pub fn new(raw: &str) -> Self {
        MessageId(raw.trim().to_ascii_uppercase())
    }

    /// Canonical (trimmed, uppercased) form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageId {
    fn from(raw: &str) -> Self {
        MessageId::new(raw)
    }
}
