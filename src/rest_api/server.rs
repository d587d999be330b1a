//! # Document Routes
//!
//! Axum handlers for the document read endpoints. Paths are relative to
//! the API root; `HttpServer` nests them.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        OriginalUri, Path, Query, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;

use super::errors::{RestError, RestResult};
use super::response::{DocumentListResponse, Rendered};
use crate::conditional::ConditionalHeaders;
use crate::read_service::{FetchOutcome, ReadResult, ReadService};

/// Shared state type
type ServiceState = Arc<ReadService>;

/// Enumeration query string
#[derive(Debug, Default, Deserialize)]
pub struct EnumerateQuery {
    pub collection: Option<String>,
}

/// Build the document router
pub fn document_routes(service: Arc<ReadService>) -> Router {
    Router::new()
        .route(
            "/document",
            get(enumerate_handler).fallback(method_not_allowed),
        )
        .route(
            "/document/*handle",
            get(fetch_handler)
                .head(probe_handler)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}

/// Router fallback for paths nothing else matches.
pub async fn unknown_path(OriginalUri(uri): OriginalUri) -> RestError {
    RestError::UnknownPath(uri.path().to_string())
}

async fn method_not_allowed() -> RestError {
    RestError::MethodNotAllowed
}

/// Reads `If-Match` / `If-None-Match`. Values that are not valid UTF-8 are
/// kept lossily so they still count as present and never match.
pub fn conditional_headers(headers: &HeaderMap) -> ConditionalHeaders {
    let read = |name: header::HeaderName| {
        headers
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
    };

    ConditionalHeaders {
        if_match: read(header::IF_MATCH),
        if_none_match: read(header::IF_NONE_MATCH),
    }
}

fn render_outcome(result: ReadResult<FetchOutcome>) -> Rendered {
    match result {
        Ok(FetchOutcome::Full(doc)) => {
            Rendered::json(StatusCode::OK, &doc.to_json()).with_etag(&doc.etag())
        }
        Ok(FetchOutcome::NotModified(doc)) => {
            Rendered::empty(StatusCode::NOT_MODIFIED).with_etag(&doc.etag())
        }
        Err(err) => RestError::from(err).render(),
    }
}

/// GET /document/<collection-or-id>/<key>
///
/// A handle that cannot be percent-decoded is a malformed handle.
async fn fetch_handler(
    State(service): State<ServiceState>,
    handle: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Response {
    let outcome = match handle {
        Ok(Path(handle)) => service.fetch(&handle, &conditional_headers(&headers)),
        Err(rejection) => Err(service.reject_handle(rejection.body_text())),
    };
    render_outcome(outcome).into_response()
}

/// HEAD /document/<collection-or-id>/<key>
async fn probe_handler(
    State(service): State<ServiceState>,
    handle: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Response {
    let outcome = match handle {
        Ok(Path(handle)) => service.probe(&handle, &conditional_headers(&headers)),
        Err(rejection) => Err(service.reject_handle(rejection.body_text())),
    };
    render_outcome(outcome).into_head_response()
}

/// GET /document?collection=<name-or-id>
async fn enumerate_handler(
    State(service): State<ServiceState>,
    query: Result<Query<EnumerateQuery>, QueryRejection>,
) -> RestResult<Response> {
    let Query(query) =
        query.map_err(|rejection| RestError::BadParameter(rejection.body_text()))?;
    let documents = service.enumerate(query.collection.as_deref())?;
    let body = DocumentListResponse::new(documents);
    Ok(Rendered::serialize(StatusCode::OK, &body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::InMemoryCollectionDirectory;
    use crate::observability::MetricsRegistry;
    use crate::revision::{InMemoryStorageEngine, RevisionStore};
    use crate::tick::TickGenerator;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct Fixture {
        router: Router,
        directory: Arc<InMemoryCollectionDirectory>,
        engine: Arc<InMemoryStorageEngine>,
    }

    fn fixture() -> Fixture {
        let ticks = Arc::new(TickGenerator::new());
        let directory = Arc::new(InMemoryCollectionDirectory::new(Arc::clone(&ticks)));
        let engine = Arc::new(InMemoryStorageEngine::new(ticks));
        let store = Arc::new(RevisionStore::new(directory.clone(), engine.clone()));
        let service = Arc::new(ReadService::new(store, Arc::new(MetricsRegistry::new()), ""));
        Fixture {
            router: document_routes(service).fallback(unknown_path),
            directory,
            engine,
        }
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_by_name() {
        let f = fixture();
        let coll = f.directory.create("C").unwrap();
        let doc = f.engine.insert(coll.id(), json!({"Hallo": "World"})).unwrap();

        let uri = format!("/document/C/{}", doc.key());
        let response = send(&f.router, Method::GET, &uri, &[]).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(response.headers()[header::ETAG], doc.revision().etag().as_str());

        let body = json_body(response).await;
        assert_eq!(body["_id"], format!("C/{}", doc.key()));
        assert_eq!(body["_rev"], doc.revision().to_string());
        assert_eq!(body["Hallo"], "World");
    }

    #[tokio::test]
    async fn test_not_modified_has_no_body() {
        let f = fixture();
        let coll = f.directory.create("C").unwrap();
        let doc = f.engine.insert(coll.id(), json!({})).unwrap();
        let etag = doc.revision().etag();

        let response = send(
            &f.router,
            Method::GET,
            &format!("/document/C/{}", doc.key()),
            &[("if-none-match", etag.as_str())],
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(response.headers()[header::ETAG], etag.as_str());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_precondition_failed_reports_current() {
        let f = fixture();
        let coll = f.directory.create("C").unwrap();
        let doc = f.engine.insert(coll.id(), json!({})).unwrap();
        let stale = format!("\"999{}\"", doc.revision());

        let response = send(
            &f.router,
            Method::GET,
            &format!("/document/C/{}", doc.key()),
            &[("if-match", stale.as_str())],
        )
        .await;

        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(response.headers()[header::ETAG], doc.revision().etag().as_str());
        let body = json_body(response).await;
        assert_eq!(body["errorNum"], 1200);
        assert_eq!(body["code"], 412);
        assert_eq!(body["_rev"], doc.revision().to_string());
        assert_eq!(body["_key"], doc.key().as_str());
    }

    #[tokio::test]
    async fn test_handle_errors() {
        let f = fixture();
        f.directory.create("C").unwrap();

        let cases = [
            ("/document/123456", StatusCode::BAD_REQUEST, 1205),
            ("/document//123456", StatusCode::BAD_REQUEST, 1203),
            ("/document/123456/234567", StatusCode::NOT_FOUND, 1203),
            ("/document/C/234567", StatusCode::NOT_FOUND, 1202),
        ];

        for (uri, status, error_num) in cases {
            let response = send(&f.router, Method::GET, uri, &[]).await;
            assert_eq!(response.status(), status, "{uri}");
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json; charset=utf-8"
            );
            let body = json_body(response).await;
            assert_eq!(body["error"], true);
            assert_eq!(body["errorNum"], error_num, "{uri}");
            assert_eq!(body["code"], status.as_u16());
        }
    }

    #[tokio::test]
    async fn test_head_matches_get_length() {
        let f = fixture();
        let coll = f.directory.create("C").unwrap();
        let doc = f.engine.insert(coll.id(), json!({"Hallo": "World"})).unwrap();

        for uri in [format!("/document/C/{}", doc.key()), "/document/C/1".to_string()] {
            let get = send(&f.router, Method::GET, &uri, &[]).await;
            let head = send(&f.router, Method::HEAD, &uri, &[]).await;

            assert_eq!(get.status(), head.status());
            assert_eq!(
                get.headers()[header::CONTENT_LENGTH],
                head.headers()[header::CONTENT_LENGTH]
            );
            assert_eq!(
                head.headers()[header::CONTENT_TYPE],
                "application/json; charset=utf-8"
            );
            let bytes = to_bytes(head.into_body(), usize::MAX).await.unwrap();
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_enumerate() {
        let f = fixture();
        let coll = f.directory.create("UnitTestsCollectionAll").unwrap();
        f.engine.insert(coll.id(), json!({})).unwrap();
        f.engine.insert(coll.id(), json!({})).unwrap();

        let response = send(
            &f.router,
            Method::GET,
            &format!("/document?collection={}", coll.id()),
            &[],
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let documents = body["documents"].as_array().unwrap();
        assert_eq!(documents.len(), 2);
        for doc in documents {
            assert!(doc
                .as_str()
                .unwrap()
                .starts_with("/document/UnitTestsCollectionAll/"));
        }
    }

    #[tokio::test]
    async fn test_enumerate_errors() {
        let f = fixture();

        let response = send(&f.router, Method::GET, "/document", &[]).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["errorNum"], 1204);

        let response = send(&f.router, Method::GET, "/document?collection=missing", &[]).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["errorNum"], 1203);
    }

    #[tokio::test]
    async fn test_undecodable_handle_is_malformed() {
        let f = fixture();

        let get = send(&f.router, Method::GET, "/document/%FF/1", &[]).await;
        let head = send(&f.router, Method::HEAD, "/document/%FF/1", &[]).await;

        assert_eq!(get.status(), StatusCode::BAD_REQUEST);
        assert_eq!(head.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get.headers()[header::CONTENT_LENGTH],
            head.headers()[header::CONTENT_LENGTH]
        );
        assert_eq!(
            get.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(json_body(get).await["errorNum"], 1205);
    }

    #[tokio::test]
    async fn test_repeated_query_parameter_is_json_error() {
        let f = fixture();
        f.directory.create("C").unwrap();

        let response = send(
            &f.router,
            Method::GET,
            "/document?collection=C&collection=C",
            &[],
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        let body = json_body(response).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["errorNum"], 10);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_fallbacks() {
        let f = fixture();

        let response = send(&f.router, Method::GET, "/nothing/here", &[]).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["errorNum"], 404);

        let response = send(&f.router, Method::DELETE, "/document/C/1", &[]).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json_body(response).await["errorNum"], 405);
    }

    #[test]
    fn test_conditional_headers_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, "\"34\"".parse().unwrap());

        let conditional = conditional_headers(&headers);
        assert_eq!(conditional.if_match.as_deref(), Some("\"34\""));
        assert!(conditional.if_none_match.is_none());
    }
}
