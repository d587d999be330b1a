//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase, reset only on process start
//! - Relaxed atomics; exactness across counters is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Read path counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// 200 responses with a document body
    documents_served: AtomicU64,
    /// 304 responses
    not_modified: AtomicU64,
    /// 412 responses
    precondition_failures: AtomicU64,
    /// HEAD requests answered
    probes: AtomicU64,
    /// Enumerations answered
    enumerations: AtomicU64,
    /// Handles listed across all enumerations
    handles_listed: AtomicU64,
    /// Malformed handles
    handles_rejected: AtomicU64,
    /// Unresolvable collections
    collection_misses: AtomicU64,
    /// Unresolvable documents
    document_misses: AtomicU64,
    /// Internal failures
    read_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_documents_served(&self) {
        self.documents_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_modified(&self) {
        self.not_modified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_precondition_failures(&self) {
        self.precondition_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_probes(&self) {
        self.probes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one enumeration that listed `handles` documents.
    pub fn record_enumeration(&self, handles: u64) {
        self.enumerations.fetch_add(1, Ordering::Relaxed);
        self.handles_listed.fetch_add(handles, Ordering::Relaxed);
    }

    pub fn increment_handles_rejected(&self) {
        self.handles_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_collection_misses(&self) {
        self.collection_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_document_misses(&self) {
        self.document_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_read_failures(&self) {
        self.read_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            documents_served: self.documents_served.load(Ordering::Relaxed),
            not_modified: self.not_modified.load(Ordering::Relaxed),
            precondition_failures: self.precondition_failures.load(Ordering::Relaxed),
            probes: self.probes.load(Ordering::Relaxed),
            enumerations: self.enumerations.load(Ordering::Relaxed),
            handles_listed: self.handles_listed.load(Ordering::Relaxed),
            handles_rejected: self.handles_rejected.load(Ordering::Relaxed),
            collection_misses: self.collection_misses.load(Ordering::Relaxed),
            document_misses: self.document_misses.load(Ordering::Relaxed),
            read_failures: self.read_failures.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub documents_served: u64,
    pub not_modified: u64,
    pub precondition_failures: u64,
    pub probes: u64,
    pub enumerations: u64,
    pub handles_listed: u64,
    pub handles_rejected: u64,
    pub collection_misses: u64,
    pub document_misses: u64,
    pub read_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.documents_served, 0);
        assert_eq!(snapshot.enumerations, 0);
        assert_eq!(snapshot.read_failures, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_documents_served();
        registry.increment_documents_served();
        registry.increment_not_modified();
        registry.increment_precondition_failures();
        registry.increment_probes();
        registry.increment_handles_rejected();
        registry.increment_collection_misses();
        registry.increment_document_misses();
        registry.record_enumeration(3);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.documents_served, 2);
        assert_eq!(snapshot.not_modified, 1);
        assert_eq!(snapshot.precondition_failures, 1);
        assert_eq!(snapshot.probes, 1);
        assert_eq!(snapshot.handles_rejected, 1);
        assert_eq!(snapshot.collection_misses, 1);
        assert_eq!(snapshot.document_misses, 1);
        assert_eq!(snapshot.enumerations, 1);
        assert_eq!(snapshot.handles_listed, 3);
    }

    #[test]
    fn test_to_json() {
        let registry = MetricsRegistry::new();
        registry.increment_documents_served();

        let parsed: serde_json::Value = serde_json::from_str(&registry.to_json()).unwrap();
        assert_eq!(parsed["documents_served"], 1);
        assert_eq!(parsed["not_modified"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_documents_served();
                    reg.increment_probes();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.documents_served, 1000);
        assert_eq!(snapshot.probes, 1000);
    }
}
