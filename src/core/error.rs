

use thiserror::Error;


#[derive(Error, Debug)]
pub enum MedQaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Query failed: {message}")]
    StoreQueryFailed { message: String, query: Option<String> },

    #[error("Cannot execute retrieval")]
    NoQueryFormed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MedQaError {
    pub fn query_failed(message: impl Into<String>, query: Option<String>) -> Self {
        Self::StoreQueryFailed {
            message: message.into(),
            query,
        }
    }

    /// Per-request errors are reported in-band as marker rows.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::StoreUnavailable(_))
    }
}


pub type Result<T> = std::result::Result<T, MedQaError>;
