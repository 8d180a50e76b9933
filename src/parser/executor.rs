use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::error::MedQaError;
use crate::db::{GraphStore, Record, StoreError};


/// One result row. Failures travel in-band as `{"error": "..."}` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultRow {
    Error { error: String },
    Record(Record),
}

impl ResultRow {

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }


    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<&MedQaError> for ResultRow {
    fn from(err: &MedQaError) -> Self {
        match err {
            MedQaError::StoreQueryFailed { message, .. } => Self::error(message.clone()),
            other => Self::error(other.to_string()),
        }
    }
}


pub struct QueryExecutor {
    store: Arc<dyn GraphStore>,
}

impl QueryExecutor {

    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Never fails: a missing query or any store fault becomes a single
    /// error row. The session is closed on every path.
    pub async fn execute(&self, query: Option<&str>) -> Vec<ResultRow> {
        let Some(query) = query else {
            return vec![ResultRow::from(&MedQaError::NoQueryFormed)];
        };

        match self.run(query).await {
            Ok(records) => {
                debug!("Query returned {} rows", records.len());
                records.into_iter().map(ResultRow::Record).collect()
            }
            Err(err) => {
                warn!("Query execution failed: {}", err);
                vec![ResultRow::from(&err)]
            }
        }
    }


    async fn run(&self, query: &str) -> Result<Vec<Record>, MedQaError> {
        let failed = |e: StoreError| MedQaError::query_failed(e.to_string(), Some(query.to_string()));

        let mut session = self.store.open_session().await.map_err(failed)?;
        let outcome = session.run(query).await;
        let closed = session.close().await;

        let records = outcome.map_err(failed)?;
        if let Err(e) = closed {
            warn!("Failed to close session cleanly: {}", e);
        }
        Ok(records)
    }
}
