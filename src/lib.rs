

pub mod core;
pub mod db;
pub mod parser;
pub mod utils;

pub use crate::utils::truncate_for_log;


pub use crate::core::config::MedQaConfig;
pub use crate::core::error::{MedQaError, Result};
pub use crate::db::{GraphSession, GraphStore, Neo4jStore, NodeLabel, Record, StoreError};
pub use crate::parser::{
    AnswerRecord, EntityCatalog, EntityExtractor, ExtractedEntities, IntentCategory, IntentClassifier,
    QueryExecutor, QueryPipeline, QuerySynthesizer, ResultRow,
};
