use std::collections::HashSet;

use tracing::{debug, info};

use crate::core::error::{MedQaError, Result};
use crate::db::{GraphStore, NodeLabel, StoreError};


/// Known disease and symptom names, lowercased and unique.
/// Iteration order is load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityCatalog {
    diseases: Vec<String>,
    symptoms: Vec<String>,
}

impl EntityCatalog {

    pub async fn load(store: &dyn GraphStore) -> Result<Self> {
        let diseases = Self::load_label(store, NodeLabel::Disease)
            .await
            .map_err(|e| MedQaError::StoreUnavailable(e.to_string()))?;
        let symptoms = Self::load_label(store, NodeLabel::Symptom)
            .await
            .map_err(|e| MedQaError::StoreUnavailable(e.to_string()))?;

        info!(
            "EntityCatalog loaded from {} ({} diseases, {} symptoms)",
            store.database(),
            diseases.len(),
            symptoms.len()
        );

        Ok(Self { diseases, symptoms })
    }


    pub async fn load_label(
        store: &dyn GraphStore,
        label: NodeLabel,
    ) -> std::result::Result<Vec<String>, StoreError> {
        let mut session = store.open_session().await?;
        let outcome = session.run(&label.names_query()).await;
        session.close().await?;

        let names = dedup_lowercase(
            outcome?
                .into_iter()
                .filter_map(|record| record.get("name").and_then(|v| v.as_str()).map(str::to_string)),
        );

        debug!("Loaded {} {} names", names.len(), label);
        Ok(names)
    }


    pub fn from_names<D, S>(diseases: D, symptoms: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            diseases: dedup_lowercase(diseases.into_iter().map(Into::into)),
            symptoms: dedup_lowercase(symptoms.into_iter().map(Into::into)),
        }
    }


    pub fn diseases(&self) -> &[String] {
        &self.diseases
    }


    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }


    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty() && self.symptoms.is_empty()
    }
}


fn dedup_lowercase(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let name = name.trim().to_lowercase();
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        out.push(name);
    }
    out
}
