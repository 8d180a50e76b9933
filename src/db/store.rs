use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;


pub type Record = BTreeMap<String, serde_json::Value>;


#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Query failed: {0}")]
    Query(String),
    #[error("Row decoding failed: {0}")]
    Decode(String),
    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}


/// A connection handle to the knowledge graph, shared for the process lifetime.
#[async_trait]
pub trait GraphStore: Send + Sync {

    async fn open_session(&self) -> Result<Box<dyn GraphSession>, StoreError>;


    fn database(&self) -> &str;
}


/// One request's unit of work against the store. Callers must `close` it.
#[async_trait]
pub trait GraphSession: Send {

    async fn run(&mut self, query: &str) -> Result<Vec<Record>, StoreError>;


    async fn close(self: Box<Self>) -> Result<(), StoreError>;
}

