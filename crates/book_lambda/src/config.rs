use book_core::item::BOOK_TABLE_NAME;

pub const TABLE_NAME_ENV: &str = "BOOK_TABLE_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookConfig {
    pub table_name: String,
}

impl Default for CreateBookConfig {
    fn default() -> Self {
        Self {
            table_name: BOOK_TABLE_NAME.to_string(),
        }
    }
}

impl CreateBookConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup(TABLE_NAME_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| BOOK_TABLE_NAME.to_string());

        Self { table_name }
    }
}
