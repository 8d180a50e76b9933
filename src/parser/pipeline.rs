use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use super::catalog::EntityCatalog;
use super::cypher::QuerySynthesizer;
use super::executor::{QueryExecutor, ResultRow};
use super::extractor::{EntityExtractor, ExtractedEntities};
use super::intent::{IntentCategory, IntentClassifier};
use crate::core::config::MedQaConfig;
use crate::core::error::{MedQaError, Result};
use crate::db::{GraphStore, Neo4jStore};
use crate::utils::truncate_for_log;


lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Drops everything but word characters and whitespace, lowercases, trims.
pub fn normalize(text: &str) -> String {
    PUNCTUATION.replace_all(&text.to_lowercase(), "").trim().to_string()
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    pub original_input: String,
    pub intent: IntentCategory,
    pub entities: ExtractedEntities,
    pub generated_query: Option<String>,
    pub rows: Vec<ResultRow>,
}

impl AnswerRecord {

    pub fn has_errors(&self) -> bool {
        self.rows.iter().any(ResultRow::is_error)
    }


    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Question: {}", self.original_input)?;
        writeln!(f, "Intent: {}", self.intent)?;
        writeln!(
            f,
            "Entities: diseases={:?}, symptoms={:?}",
            self.entities.diseases, self.entities.symptoms
        )?;
        match &self.generated_query {
            Some(query) => {
                writeln!(f, "Query:")?;
                for line in query.lines() {
                    writeln!(f, "  {}", line)?;
                }
            }
            None => writeln!(f, "Query: (none)")?,
        }
        write!(f, "Result:")?;

        if self.rows.is_empty() {
            return write!(f, "\n  (no results)");
        }
        for row in &self.rows {
            match row {
                ResultRow::Error { error } => write!(f, "\n  Error: {}", error)?,
                ResultRow::Record(record) => {
                    let rendered = serde_json::to_string(record).map_err(|_| fmt::Error)?;
                    write!(f, "\n  {}", rendered)?;
                }
            }
        }
        Ok(())
    }
}


pub struct QueryPipeline {
    store: Arc<dyn GraphStore>,
    catalog: EntityCatalog,
    classifier: IntentClassifier,
    extractor: EntityExtractor,
    synthesizer: QuerySynthesizer,
    executor: QueryExecutor,
}

impl QueryPipeline {

    pub async fn connect(config: &MedQaConfig) -> Result<Self> {
        config.validate()?;
        let store = Neo4jStore::connect(config)
            .await
            .map_err(|e| MedQaError::StoreUnavailable(e.to_string()))?;
        Self::new(Arc::new(store)).await
    }

    /// Loads the catalog up front; an unreachable store fails construction.
    pub async fn new(store: Arc<dyn GraphStore>) -> Result<Self> {
        let catalog = EntityCatalog::load(store.as_ref()).await?;
        Ok(Self::with_catalog(store, catalog))
    }


    pub fn with_catalog(store: Arc<dyn GraphStore>, catalog: EntityCatalog) -> Self {
        info!(
            "QueryPipeline ready ({} diseases, {} symptoms)",
            catalog.diseases().len(),
            catalog.symptoms().len()
        );
        Self {
            executor: QueryExecutor::new(Arc::clone(&store)),
            store,
            catalog,
            classifier: IntentClassifier::default(),
            extractor: EntityExtractor::default(),
            synthesizer: QuerySynthesizer::default(),
        }
    }

    /// Re-fetches the catalog. The current catalog is kept if loading fails.
    pub async fn reload_catalog(&mut self) -> Result<()> {
        let catalog = EntityCatalog::load(self.store.as_ref()).await?;
        self.catalog = catalog;
        Ok(())
    }


    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }


    pub async fn ask(&self, raw_text: &str) -> AnswerRecord {
        debug!("Asking: {}", truncate_for_log(raw_text, 80));

        let text = normalize(raw_text);
        let intent = self.classifier.detect(&text);
        let entities = self.extractor.extract(&text, &self.catalog);
        let generated_query = self.synthesizer.generate(intent, &entities);
        let rows = self.executor.execute(generated_query.as_deref()).await;

        AnswerRecord {
            original_input: raw_text.to_string(),
            intent,
            entities,
            generated_query,
            rows,
        }
    }


    pub async fn ask_formatted(&self, raw_text: &str) -> String {
        self.ask(raw_text).await.format()
    }
}
