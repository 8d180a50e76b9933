use tracing::debug;

use super::extractor::ExtractedEntities;
use super::intent::{profile_for, IntentCategory, IntentProfile, INTENT_PROFILES};


pub const DISEASE_PLACEHOLDER: &str = "{disease}";

pub const SYMPTOMS_PLACEHOLDER: &str = "{symptoms}";


pub const SYMPTOM_TO_DISEASE: &str = "MATCH (s:Symptom)-[:HAS_SYMPTOM]-(d:Disease)
WHERE s.name IN [{symptoms}]
RETURN d.name AS disease, collect(s.name) AS matched_symptoms LIMIT 10";

pub const DISEASE_SYMPTOMS: &str = "MATCH (d:Disease {name: '{disease}'})-[:HAS_SYMPTOM]->(s:Symptom)
RETURN d.name AS disease, collect(s.name) AS symptoms";

pub const DISEASE_DRUGS: &str = "MATCH (d:Disease {name: '{disease}'})-[:HAS_Drug]->(dr:Drug)
RETURN d.name AS disease, collect(dr.name) AS drugs";

pub const DISEASE_DEPARTMENT: &str = "MATCH (d:Disease {name: '{disease}'})-[:IS_OF_Department]->(dp:Department)
RETURN d.name AS disease, collect(dp.name) AS departments";

pub const DISEASE_TREATMENT: &str = "MATCH (d:Disease {name: '{disease}'})
RETURN d.name AS disease, d.treatment AS treatment, d.period AS period";

pub const DISEASE_COMPLICATIONS: &str = "MATCH (d:Disease {name: '{disease}'})-[:HAS_Complication]->(c:Complication)
RETURN d.name AS disease, collect(c.name) AS complications";


/// Backslash-escapes single quotes for a `'...'` literal.
///
/// This is string interpolation, not parameter binding: other characters
/// (backslashes included) pass through unchanged, so crafted input can still
/// alter the query. Parameter binding is the hardened alternative.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "\\'")
}


pub fn fill_template(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}


fn quote_symptom(symptom: &str) -> String {
    format!("\"{}\"", symptom.replace('"', "\\\""))
}


pub struct QuerySynthesizer {
    profiles: &'static [IntentProfile],
}

impl QuerySynthesizer {

    pub fn new(profiles: &'static [IntentProfile]) -> Self {
        Self { profiles }
    }


    pub fn template(&self, intent: IntentCategory) -> Option<&'static str> {
        profile_for(self.profiles, intent).and_then(|p| p.template)
    }

    /// Symptom lookups use every extracted symptom; all other intents
    /// target the first extracted disease only.
    pub fn generate(&self, intent: IntentCategory, entities: &ExtractedEntities) -> Option<String> {
        let query = if intent == IntentCategory::SymptomToDisease {
            if entities.symptoms.is_empty() {
                debug!("No symptoms to anchor {}", intent);
                return None;
            }
            let symptoms = entities
                .symptoms
                .iter()
                .map(|s| quote_symptom(s))
                .collect::<Vec<_>>()
                .join(", ");
            fill_template(self.template(intent)?, SYMPTOMS_PLACEHOLDER, &symptoms)
        } else {
            let Some(disease) = entities.diseases.first() else {
                debug!("No disease to anchor {}", intent);
                return None;
            };
            let Some(template) = self.template(intent) else {
                debug!("No template registered for {}", intent);
                return None;
            };
            fill_template(template, DISEASE_PLACEHOLDER, &escape_literal(disease))
        };

        debug!("Generated query for {}: {}", intent, query);
        Some(query)
    }
}

impl Default for QuerySynthesizer {
    fn default() -> Self {
        Self::new(INTENT_PROFILES)
    }
}
