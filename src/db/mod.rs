

pub mod labels;
pub mod neo4j;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use labels::NodeLabel;
pub use neo4j::Neo4jStore;
pub use store::{GraphSession, GraphStore, Record, StoreError};
