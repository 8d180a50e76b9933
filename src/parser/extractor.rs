use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::EntityCatalog;


lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = [
        "怎么", "什么", "哪些", "为什么", "吗", "呢", "了", "的", "是",
    ]
    .into_iter()
    .collect();
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub diseases: Vec<String>,
    pub symptoms: Vec<String>,
}

impl ExtractedEntities {

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty() && self.symptoms.is_empty()
    }
}


pub struct EntityExtractor {
    stopwords: HashSet<&'static str>,
}

impl EntityExtractor {

    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.clone(),
        }
    }

    /// Catalog entries found as substrings, in catalog order. When nothing
    /// matches, surviving whitespace tokens (or the whole text) stand in as symptoms.
    pub fn extract(&self, text: &str, catalog: &EntityCatalog) -> ExtractedEntities {
        let text = text.to_lowercase();

        let diseases = matches_in(&text, catalog.diseases());
        let symptoms = matches_in(&text, catalog.symptoms());

        if !diseases.is_empty() || !symptoms.is_empty() {
            debug!("Extracted {} diseases, {} symptoms", diseases.len(), symptoms.len());
            return ExtractedEntities { diseases, symptoms };
        }

        let tokens: Vec<String> = text
            .split_whitespace()
            .filter(|w| w.chars().count() > 1 && !self.stopwords.contains(*w))
            .map(str::to_string)
            .collect();

        let symptoms = if tokens.is_empty() { vec![text] } else { tokens };
        debug!("No catalog match, fallback symptoms: {:?}", symptoms);

        ExtractedEntities {
            diseases: Vec::new(),
            symptoms,
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}


fn matches_in(text: &str, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| text.contains(name.as_str()))
        .cloned()
        .collect()
}
