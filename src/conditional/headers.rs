//! Conditional request header values

/// `If-Match` and `If-None-Match` as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalHeaders {
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
}

impl ConditionalHeaders {
    /// No conditional headers.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn if_match(tag: impl Into<String>) -> Self {
        Self {
            if_match: Some(tag.into()),
            if_none_match: None,
        }
    }

    pub fn if_none_match(tag: impl Into<String>) -> Self {
        Self {
            if_match: None,
            if_none_match: Some(tag.into()),
        }
    }
}
