use crate::contract::Book;

pub const BOOK_TABLE_NAME: &str = "book";

pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_AUTHOR: &str = "author";

/// A single put-item write against the book table.
///
/// Carries exactly the three string attributes `id`, `name` and `author`, in
/// that order. Conversion into a concrete store's attribute representation
/// happens in the store adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookItem {
    table_name: String,
    attributes: [(&'static str, String); 3],
}

impl BookItem {
    pub fn from_book(table_name: impl Into<String>, book: &Book) -> Self {
        Self {
            table_name: table_name.into(),
            attributes: [
                (ATTR_ID, book.id.clone()),
                (ATTR_NAME, book.name.clone()),
                (ATTR_AUTHOR, book.author.clone()),
            ],
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .find(|(attribute, _)| *attribute == name)
            .map(|(_, value)| value)
    }
}
