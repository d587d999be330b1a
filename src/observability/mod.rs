//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Counters for the read path
//! - Typed lifecycle and request events
//!
//! Observability never changes the outcome of a request and never fails
//! the caller.
//!
//! # Usage
//!
//! ```ignore
//! use docread::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::DocumentServed, &[("handle", "C/34"), ("rev", "34")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_documents_served();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_of(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event == Event::ReadFailed {
        Severity::Error
    } else if event.is_request_scoped() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log an event
pub fn log_event(event: Event) {
    Logger::log(severity_of(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}
