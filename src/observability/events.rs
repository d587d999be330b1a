//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete
    BootComplete,
    /// Startup failed
    BootFailed,
    /// Configuration loaded
    ConfigLoaded,
    /// Collection registered at boot
    CollectionCreated,
    /// Listener bound, ready for requests
    Serving,
    /// Server loop exited
    ShutdownComplete,

    // Read path
    /// Document served in full
    DocumentServed,
    /// Document unchanged, 304
    DocumentNotModified,
    /// Document probed (HEAD)
    DocumentProbed,
    /// If-Match mismatch, 412
    PreconditionFailed,
    /// Handle rejected before lookup
    HandleRejected,
    /// Collection did not resolve
    CollectionMissing,
    /// Document did not resolve
    DocumentMissing,
    /// Collection enumerated
    CollectionEnumerated,
    /// Unexpected failure while reading
    ReadFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "DOCREAD_STARTUP_BEGIN",
            Event::BootComplete => "DOCREAD_STARTUP_COMPLETE",
            Event::BootFailed => "DOCREAD_STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CollectionCreated => "COLLECTION_CREATED",
            Event::Serving => "DOCREAD_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::DocumentServed => "DOCUMENT_SERVED",
            Event::DocumentNotModified => "DOCUMENT_NOT_MODIFIED",
            Event::DocumentProbed => "DOCUMENT_PROBED",
            Event::PreconditionFailed => "PRECONDITION_FAILED",
            Event::HandleRejected => "HANDLE_REJECTED",
            Event::CollectionMissing => "COLLECTION_NOT_FOUND",
            Event::DocumentMissing => "DOCUMENT_NOT_FOUND",
            Event::CollectionEnumerated => "COLLECTION_ENUMERATED",
            Event::ReadFailed => "READ_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// True for per-request events, which are logged at TRACE.
    pub fn is_request_scoped(&self) -> bool {
        matches!(
            self,
            Event::DocumentServed
                | Event::DocumentNotModified
                | Event::DocumentProbed
                | Event::PreconditionFailed
                | Event::HandleRejected
                | Event::CollectionMissing
                | Event::DocumentMissing
                | Event::CollectionEnumerated
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::BootStart,
            Event::BootComplete,
            Event::BootFailed,
            Event::ConfigLoaded,
            Event::CollectionCreated,
            Event::Serving,
            Event::ShutdownComplete,
            Event::DocumentServed,
            Event::DocumentNotModified,
            Event::DocumentProbed,
            Event::PreconditionFailed,
            Event::HandleRejected,
            Event::CollectionMissing,
            Event::DocumentMissing,
            Event::CollectionEnumerated,
            Event::ReadFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::DocumentServed.is_fatal());
    }

    #[test]
    fn test_request_scoped() {
        assert!(Event::DocumentServed.is_request_scoped());
        assert!(!Event::Serving.is_request_scoped());
        assert!(!Event::ReadFailed.is_request_scoped());
    }
}
