

pub mod catalog;
pub mod cypher;
pub mod executor;
pub mod extractor;
pub mod intent;
pub mod pipeline;

pub use catalog::EntityCatalog;
pub use cypher::{escape_literal, fill_template, QuerySynthesizer};
pub use executor::{QueryExecutor, ResultRow};
pub use extractor::{EntityExtractor, ExtractedEntities};
pub use intent::{IntentCategory, IntentClassifier, IntentProfile, INTENT_PROFILES};
pub use pipeline::{normalize, AnswerRecord, QueryPipeline};
