//! ReadService - the three read modes

use std::sync::Arc;

use super::errors::{ReadError, ReadResult};
use crate::collection::CollectionRef;
use crate::conditional::{evaluate, ConditionalHeaders, Decision};
use crate::handle::HandleResolver;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::revision::{CurrentDocument, RevisionStore};

/// Successful outcome of a fetch or probe.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// 200 with the full representation
    Full(CurrentDocument),
    /// 304, body withheld
    NotModified(CurrentDocument),
}

impl FetchOutcome {
    pub fn document(&self) -> &CurrentDocument {
        match self {
            FetchOutcome::Full(doc) | FetchOutcome::NotModified(doc) => doc,
        }
    }

    pub fn etag(&self) -> String {
        self.document().etag()
    }
}

/// Read-only access to documents. Holds no locks and no per-request
/// state, so one instance serves any number of concurrent readers.
pub struct ReadService {
    resolver: HandleResolver,
    store: Arc<RevisionStore>,
    metrics: Arc<MetricsRegistry>,
    api_root: String,
}

impl ReadService {
    /// `api_root` prefixes every path rendered by enumeration, e.g. `/_api`.
    pub fn new(
        store: Arc<RevisionStore>,
        metrics: Arc<MetricsRegistry>,
        api_root: impl Into<String>,
    ) -> Self {
        Self {
            resolver: HandleResolver::new(Arc::clone(&store)),
            store,
            metrics,
            api_root: api_root.into(),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Fetch-by-handle.
    pub fn fetch(
        &self,
        raw_handle: &str,
        headers: &ConditionalHeaders,
    ) -> ReadResult<FetchOutcome> {
        let (outcome, rule) = self.read(raw_handle, headers)?;

        match &outcome {
            FetchOutcome::Full(doc) => {
                self.metrics.increment_documents_served();
                Self::log_outcome(Event::DocumentServed, doc, rule);
            }
            FetchOutcome::NotModified(doc) => {
                self.metrics.increment_not_modified();
                Self::log_outcome(Event::DocumentNotModified, doc, rule);
            }
        }
        Ok(outcome)
    }

    /// Existence probe. Same resolution and conditional logic as fetch;
    /// the caller withholds the body.
    pub fn probe(
        &self,
        raw_handle: &str,
        headers: &ConditionalHeaders,
    ) -> ReadResult<FetchOutcome> {
        self.metrics.increment_probes();
        let (outcome, rule) = self.read(raw_handle, headers)?;
        Self::log_outcome(Event::DocumentProbed, outcome.document(), rule);
        Ok(outcome)
    }

    /// Records a handle the HTTP layer could not decode (for example a
    /// path segment that is not valid UTF-8) and returns its error.
    pub fn reject_handle(&self, detail: impl Into<String>) -> ReadError {
        let detail = detail.into();
        let err = ReadError::MalformedHandle(detail.clone());
        self.record_failure(&err, &detail);
        err
    }

    /// Collection enumeration.
    ///
    /// Returns document paths rendered with the canonical collection name,
    /// whichever form the caller used.
    pub fn enumerate(&self, collection: Option<&str>) -> ReadResult<Vec<String>> {
        let segment = collection.filter(|c| !c.is_empty()).ok_or_else(|| {
            self.record_failure(&ReadError::CollectionParameterMissing, "");
            ReadError::CollectionParameterMissing
        })?;

        let reference = CollectionRef::parse(segment);
        let listing = self
            .store
            .all_handles(&reference)
            .map_err(ReadError::from)
            .inspect_err(|err| self.record_failure(err, segment))?;

        let name = listing.collection().name().to_string();
        let paths: Vec<String> = listing.map(|handle| handle.path(&self.api_root)).collect();

        self.metrics.record_enumeration(paths.len() as u64);
        log_event_with_fields(
            Event::CollectionEnumerated,
            &[("collection", &name), ("count", &paths.len().to_string())],
        );

        Ok(paths)
    }

    /// Resolves and evaluates; also returns the name of the conditional
    /// rule that decided the outcome.
    fn read(
        &self,
        raw_handle: &str,
        headers: &ConditionalHeaders,
    ) -> ReadResult<(FetchOutcome, &'static str)> {
        let document = self
            .resolver
            .resolve(raw_handle)
            .inspect_err(|err| self.record_failure(err, raw_handle))?;

        let evaluation = evaluate(document.revision(), headers);
        match evaluation.decision {
            Decision::ServeFull => Ok((FetchOutcome::Full(document), evaluation.rule)),
            Decision::NotModified => Ok((FetchOutcome::NotModified(document), evaluation.rule)),
            Decision::PreconditionFailed => {
                let err = ReadError::PreconditionFailed(Box::new(document));
                self.record_failure(&err, raw_handle);
                Err(err)
            }
        }
    }

    fn log_outcome(event: Event, doc: &CurrentDocument, rule: &str) {
        log_event_with_fields(
            event,
            &[
                ("handle", &doc.handle().to_string()),
                ("rev", &doc.revision().to_string()),
                ("rule", rule),
            ],
        );
    }

    fn record_failure(&self, err: &ReadError, subject: &str) {
        let event = match err {
            ReadError::MalformedHandle(_)
            | ReadError::UnnamedCollection(_)
            | ReadError::CollectionParameterMissing => {
                self.metrics.increment_handles_rejected();
                Event::HandleRejected
            }
            ReadError::CollectionNotFound(_) => {
                self.metrics.increment_collection_misses();
                Event::CollectionMissing
            }
            ReadError::DocumentNotFound(_) => {
                self.metrics.increment_document_misses();
                Event::DocumentMissing
            }
            ReadError::PreconditionFailed(_) => {
                self.metrics.increment_precondition_failures();
                Event::PreconditionFailed
            }
            ReadError::Internal(_) => {
                self.metrics.increment_read_failures();
                Event::ReadFailed
            }
        };

        log_event_with_fields(
            event,
            &[
                ("subject", subject),
                ("error", &err.to_string()),
                ("error_num", &err.error_num().to_string()),
            ],
        );
    }
}
