/// Failure outcomes of a single book-create invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateBookError {
    /// Body absent, not JSON, or not shaped like `{ name, author }`.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The storage collaborator rejected or failed the write.
    #[error("storage write failed: {0}")]
    Storage(String),

    #[error("failed to encode response: {0}")]
    ResponseEncoding(String),
}

impl CreateBookError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    /// Stable label used in structured log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::Storage(_) => "storage_failure",
            Self::ResponseEncoding(_) => "response_encoding",
        }
    }
}
