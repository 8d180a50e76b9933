use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph, Txn};
use tracing::{debug, info};

use super::store::{GraphSession, GraphStore, Record, StoreError};
use crate::core::config::MedQaConfig;


pub struct Neo4jStore {

    graph: Graph,

    database: String,

    uri: String,
}

impl Neo4jStore {

    pub async fn connect(config: &MedQaConfig) -> Result<Self, StoreError> {
        let neo_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        // The pool connects lazily; probe so an unreachable server fails here.
        graph
            .run(query("RETURN 1"))
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("Neo4jStore connected to {} (database={})", config.uri, config.database);

        Ok(Self {
            graph,
            database: config.database.clone(),
            uri: config.uri.clone(),
        })
    }


    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn open_session(&self) -> Result<Box<dyn GraphSession>, StoreError> {
        let txn = self.graph.start_txn().await?;
        debug!("Opened session on {}", self.database);
        Ok(Box::new(Neo4jSession { txn: Some(txn) }))
    }

    fn database(&self) -> &str {
        &self.database
    }
}


/// A read transaction; dropping it without `close` rolls it back.
pub struct Neo4jSession {
    txn: Option<Txn>,
}

#[async_trait]
impl GraphSession for Neo4jSession {
    async fn run(&mut self, cypher: &str) -> Result<Vec<Record>, StoreError> {
        let txn = self
            .txn
            .as_mut()
            .ok_or_else(|| StoreError::Query("Session already closed".into()))?;

        let mut stream = txn.execute(query(cypher)).await?;
        let mut records = Vec::new();
        while let Some(row) = stream.next(txn.handle()).await? {
            let record: Record = row.to().map_err(|e| StoreError::Decode(e.to_string()))?;
            records.push(record);
        }

        debug!("Session returned {} rows", records.len());
        Ok(records)
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        if let Some(txn) = self.txn {
            txn.commit().await?;
        }
        debug!("Closed session");
        Ok(())
    }
}
