use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::labels::NodeLabel;
use super::store::{GraphSession, GraphStore, Record, StoreError};


#[derive(Debug, Default)]
pub struct SessionLog {
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl SessionLog {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}


/// In-memory store answering name scans from fixed node lists and other
/// queries from canned responses keyed by a query fragment.
#[derive(Default)]
pub struct ScriptedStore {
    nodes: HashMap<NodeLabel, Vec<Value>>,
    responses: Vec<(String, Result<Vec<Record>, String>)>,
    unavailable: bool,
    log: Arc<SessionLog>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(mut self, label: NodeLabel, names: &[&str]) -> Self {
        let entry = self.nodes.entry(label).or_default();
        entry.extend(names.iter().map(|n| Value::String(n.to_string())));
        self
    }

    pub fn with_null_name(mut self, label: NodeLabel) -> Self {
        self.nodes.entry(label).or_default().push(Value::Null);
        self
    }

    pub fn respond(mut self, fragment: &str, rows: Vec<Record>) -> Self {
        self.responses.push((fragment.to_string(), Ok(rows)));
        self
    }

    pub fn fail(mut self, fragment: &str, message: &str) -> Self {
        self.responses.push((fragment.to_string(), Err(message.to_string())));
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn log(&self) -> Arc<SessionLog> {
        Arc::clone(&self.log)
    }
}

#[async_trait]
impl GraphStore for ScriptedStore {
    async fn open_session(&self) -> Result<Box<dyn GraphSession>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Connection("Connection refused".into()));
        }
        self.log.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession {
            nodes: self.nodes.clone(),
            responses: self.responses.clone(),
            log: Arc::clone(&self.log),
        }))
    }

    fn database(&self) -> &str {
        "scripted"
    }
}


struct ScriptedSession {
    nodes: HashMap<NodeLabel, Vec<Value>>,
    responses: Vec<(String, Result<Vec<Record>, String>)>,
    log: Arc<SessionLog>,
}

#[async_trait]
impl GraphSession for ScriptedSession {
    async fn run(&mut self, query: &str) -> Result<Vec<Record>, StoreError> {
        self.log.queries.lock().unwrap().push(query.to_string());

        for (label, names) in &self.nodes {
            if query == label.names_query() {
                return Ok(names.iter().map(|n| record(json!({ "name": n }))).collect());
            }
        }

        for (fragment, outcome) in &self.responses {
            if query.contains(fragment.as_str()) {
                return outcome.clone().map_err(StoreError::Query);
            }
        }

        Ok(Vec::new())
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        self.log.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}


pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        other => Record::from([("value".to_string(), other)]),
    }
}
