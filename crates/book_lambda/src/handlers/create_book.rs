use std::time::Instant;

use book_core::contract::{
    encode_book, parse_book_draft, Book, CREATED_STATUS_CODE, JSON_CONTENT_TYPE,
};
use book_core::error::CreateBookError;
use book_core::item::BookItem;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::adapters::book_store::BookStore;
use crate::adapters::id_generator::IdGenerator;
use crate::config::CreateBookConfig;

const COMPONENT: &str = "create_book_handler";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Parses a book draft, stamps a server-side id and writes it to the store.
///
/// The store and id source are injected so each invocation only touches
/// what it was constructed with.
pub struct CreateBookHandler<S, G> {
    config: CreateBookConfig,
    store: S,
    ids: G,
}

impl<S: BookStore, G: IdGenerator> CreateBookHandler<S, G> {
    pub fn new(config: CreateBookConfig, store: S, ids: G) -> Self {
        Self { config, store, ids }
    }

    pub fn config(&self) -> &CreateBookConfig {
        &self.config
    }

    /// Runs one invocation against an API Gateway proxy event and builds the
    /// 201 response.
    pub fn handle_event(&self, event: Value) -> Result<ApiGatewayResponse, CreateBookError> {
        let body = match extract_request_body(&event) {
            Ok(value) => value,
            Err(error) => return Err(log_failure(error)),
        };

        let book = self.create_book(body.as_deref())?;
        encode_book(&book).map(created_response).map_err(log_failure)
    }

    pub fn create_book(&self, body: Option<&str>) -> Result<Book, CreateBookError> {
        self.try_create_book(body).map_err(log_failure)
    }

    fn try_create_book(&self, body: Option<&str>) -> Result<Book, CreateBookError> {
        let started_at = Instant::now();
        let body = body.ok_or_else(|| CreateBookError::malformed("request body is missing"))?;
        let draft = parse_book_draft(body)?;

        info!(
            component = COMPONENT,
            event = "book_create_started",
            table_name = %self.config.table_name
        );

        let book = draft.into_book(self.ids.next_id());
        let item = BookItem::from_book(self.config.table_name.as_str(), &book);
        self.store.put_book(&item).map_err(CreateBookError::Storage)?;

        info!(
            component = COMPONENT,
            event = "book_persisted",
            book_id = %book.id,
            table_name = %item.table_name(),
            duration_ms = started_at.elapsed().as_millis() as u64
        );
        Ok(book)
    }
}

fn log_failure(error: CreateBookError) -> CreateBookError {
    error!(
        component = COMPONENT,
        event = "book_create_failed",
        kind = error.kind(),
        error = %error
    );
    error
}

/// Pulls the raw JSON body out of a proxy event. Console test invocations
/// send `body` as an object rather than a string, so both are accepted.
pub fn extract_request_body(event: &Value) -> Result<Option<String>, CreateBookError> {
    let Some(object) = event.as_object() else {
        return Err(CreateBookError::malformed(
            "request payload must be a JSON object",
        ));
    };

    if object
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return Err(CreateBookError::malformed(
            "base64-encoded request bodies are not supported",
        ));
    }

    match object.get("body") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(body @ Value::Object(_)) => Ok(Some(body.to_string())),
        Some(_) => Err(CreateBookError::malformed(
            "request body must be a JSON string or object",
        )),
    }
}

fn created_response(body: String) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: CREATED_STATUS_CODE,
        headers: json!({ "Content-Type": JSON_CONTENT_TYPE }),
        body,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use book_core::item::{ATTR_AUTHOR, ATTR_ID, ATTR_NAME};

    use super::*;

    struct RecordingStore {
        writes: Mutex<Vec<BookItem>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
            }
        }

        fn writes(&self) -> Vec<BookItem> {
            self.writes.lock().expect("poisoned mutex").clone()
        }
    }

    impl BookStore for RecordingStore {
        fn put_book(&self, item: &BookItem) -> Result<(), String> {
            self.writes
                .lock()
                .expect("poisoned mutex")
                .push(item.clone());
            Ok(())
        }
    }

    struct FailingStore;

    impl BookStore for FailingStore {
        fn put_book(&self, _item: &BookItem) -> Result<(), String> {
            Err("ResourceNotFoundException: table does not exist".to_string())
        }
    }

    struct SequentialIds {
        next: AtomicUsize,
    }

    impl SequentialIds {
        fn new() -> Self {
            Self {
                next: AtomicUsize::new(1),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            format!("book-{}", self.next.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn handler(store: &RecordingStore) -> CreateBookHandler<&RecordingStore, SequentialIds> {
        CreateBookHandler::new(CreateBookConfig::default(), store, SequentialIds::new())
    }

    #[test]
    fn creates_book_and_returns_created_response() {
        let store = RecordingStore::new();
        let response = handler(&store)
            .handle_event(json!({"body": "{\"name\":\"Dune\",\"author\":\"Frank Herbert\"}"}))
            .expect("invocation should succeed");

        assert_eq!(response.status_code, 201);
        assert_eq!(response.headers["Content-Type"], "application/json");
        let book: Book = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(
            book,
            Book {
                id: "book-1".to_string(),
                name: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
            }
        );
    }

    #[test]
    fn writes_exactly_one_item_to_book_table() {
        let store = RecordingStore::new();
        handler(&store)
            .handle_event(json!({"body": "{\"name\":\"Dune\",\"author\":\"Frank Herbert\"}"}))
            .expect("invocation should succeed");

        let writes = store.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].table_name(), "book");
        let attributes: Vec<(&str, &str)> = writes[0].attributes().collect();
        assert_eq!(
            attributes,
            vec![
                (ATTR_ID, "book-1"),
                (ATTR_NAME, "Dune"),
                (ATTR_AUTHOR, "Frank Herbert"),
            ]
        );
    }

    #[test]
    fn overwrites_caller_supplied_id() {
        let store = RecordingStore::new();
        let book = handler(&store)
            .create_book(Some(r#"{"id":"chosen-by-caller","name":"Emma","author":"Jane Austen"}"#))
            .expect("invocation should succeed");

        assert_eq!(book.id, "book-1");
        assert_eq!(store.writes()[0].attribute(ATTR_ID), Some("book-1"));
    }

    #[test]
    fn repeated_identical_requests_get_distinct_ids() {
        let store = RecordingStore::new();
        let handler = handler(&store);
        let body = Some(r#"{"name":"Dune","author":"Frank Herbert"}"#);

        let first = handler.create_book(body).expect("first call should succeed");
        let second = handler.create_book(body).expect("second call should succeed");

        assert_ne!(first.id, second.id);
        assert_eq!(store.writes().len(), 2);
    }

    #[test]
    fn uses_configured_table_name() {
        let store = RecordingStore::new();
        let handler = CreateBookHandler::new(
            CreateBookConfig {
                table_name: "book-staging".to_string(),
            },
            &store,
            SequentialIds::new(),
        );

        handler
            .create_book(Some(r#"{"name":"Dune","author":"Frank Herbert"}"#))
            .expect("invocation should succeed");
        assert_eq!(store.writes()[0].table_name(), "book-staging");
    }

    #[test]
    fn rejects_non_json_body_without_writing() {
        let store = RecordingStore::new();
        let error = handler(&store)
            .handle_event(json!({"body": "not json"}))
            .expect_err("invocation should fail");

        assert!(matches!(error, CreateBookError::MalformedInput(_)));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn rejects_missing_body_without_writing() {
        let store = RecordingStore::new();
        let error = handler(&store)
            .handle_event(json!({"httpMethod": "POST"}))
            .expect_err("invocation should fail");

        assert_eq!(error, CreateBookError::malformed("request body is missing"));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn surfaces_storage_failure() {
        let handler =
            CreateBookHandler::new(CreateBookConfig::default(), FailingStore, SequentialIds::new());
        let error = handler
            .handle_event(json!({"body": "{\"name\":\"Dune\",\"author\":\"Frank Herbert\"}"}))
            .expect_err("invocation should fail");

        assert_eq!(error.kind(), "storage_failure");
        assert!(error.to_string().contains("ResourceNotFoundException"));
    }

    #[test]
    fn accepts_object_body_from_console_invocations() {
        let body = extract_request_body(&json!({
            "body": {"name": "Dune", "author": "Frank Herbert"}
        }))
        .expect("body should extract")
        .expect("body should be present");

        let draft = parse_book_draft(&body).expect("draft should parse");
        assert_eq!(draft.author, "Frank Herbert");
    }

    #[test]
    fn rejects_unsupported_event_shapes() {
        assert!(extract_request_body(&json!("plain string")).is_err());
        assert!(extract_request_body(&json!({"body": 42})).is_err());
        assert!(extract_request_body(&json!({
            "body": "eyJuYW1lIjoiRHVuZSJ9",
            "isBase64Encoded": true
        }))
        .is_err());
    }

    #[test]
    fn null_body_is_treated_as_missing() {
        assert_eq!(
            extract_request_body(&json!({"body": null})).expect("event should extract"),
            None,
        );
    }
}
