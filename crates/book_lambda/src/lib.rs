//! AWS-oriented adapters and handlers for the book-create function.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! DynamoDB store adapter, configuration and log setup). Domain contracts come
//! from `book_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
