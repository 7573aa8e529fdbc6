use serde::{Deserialize, Serialize};

use crate::error::CreateBookError;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const CREATED_STATUS_CODE: u16 = 201;

/// A persisted book record. `id` is always assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub author: String,
}

/// Caller-supplied part of a book. Unknown fields, including any `id`, are
/// dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDraft {
    pub name: String,
    pub author: String,
}

impl BookDraft {
    pub fn into_book(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            name: self.name,
            author: self.author,
        }
    }
}

pub fn parse_book_draft(body: &str) -> Result<BookDraft, CreateBookError> {
    serde_json::from_str(body)
        .map_err(|error| CreateBookError::malformed(format!("invalid book payload: {error}")))
}

pub fn encode_book(book: &Book) -> Result<String, CreateBookError> {
    serde_json::to_string(book)
        .map_err(|error| CreateBookError::ResponseEncoding(error.to_string()))
}
