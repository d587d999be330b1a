//! Collection identifiers and references

use std::fmt;

/// Stable numeric identifier of a collection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CollectionId(u64);

impl CollectionId {
    #[inline]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a caller addressed a collection.
///
/// Identifier and name are interchangeable: both are resolved by the
/// collection directory to the same collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CollectionRef {
    /// Addressed by human-assigned name
    ByName(String),
    /// Addressed by numeric identifier
    ById(CollectionId),
}

impl CollectionRef {
    /// Classifies a path or query segment.
    ///
    /// A segment made only of ASCII digits is an identifier. Collection
    /// names cannot start with a digit, so there is no ambiguity. A digit
    /// string too large for an identifier is kept as a name and will simply
    /// fail to resolve.
    pub fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = segment.parse::<u64>() {
                return CollectionRef::ById(CollectionId::new(id));
            }
        }
        CollectionRef::ByName(segment.to_string())
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionRef::ByName(name) => write!(f, "{}", name),
            CollectionRef::ById(id) => write!(f, "{}", id),
        }
    }
}
