//! Shared book-create domain primitives.
//!
//! This crate owns the request/response contract, the storage item shape for
//! the `book` table and the error taxonomy. It intentionally excludes AWS SDK
//! and Lambda runtime concerns, which live in `book_lambda`.

pub mod contract;
pub mod error;
pub mod item;
