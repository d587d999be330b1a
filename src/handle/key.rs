//! Document keys

use std::fmt;

use super::errors::{HandleError, HandleResult};

/// Local key of a document within its collection.
///
/// Keys are non-empty strings of decimal digits. They are compared as
/// strings, so `034` and `34` are different keys.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Parses a key, rejecting anything that is not all digits.
    pub fn parse(raw: &str) -> HandleResult<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HandleError::MalformedKey(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Key assigned to a freshly created document.
    pub fn from_tick(tick: u64) -> Self {
        Self(tick.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_key() {
        assert_eq!(DocumentKey::parse("234567").unwrap().as_str(), "234567");
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["", "abc", "12a", "-1", "1 2"] {
            assert_eq!(
                DocumentKey::parse(raw),
                Err(HandleError::MalformedKey(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_leading_zero_is_distinct() {
        assert_ne!(DocumentKey::parse("034").unwrap(), DocumentKey::from_tick(34));
    }
}
