use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use super::cypher;


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntentCategory {

    SymptomToDisease,

    DiseaseSymptoms,

    DiseaseDrugs,

    DiseaseDepartment,

    DiseaseTreatment,

    DiseaseComplications,

    #[default]
    DiseaseInfo,
}


/// Keyword set and query template registered for one intent.
#[derive(Debug, Clone, Copy)]
pub struct IntentProfile {
    pub category: IntentCategory,
    pub keywords: &'static [&'static str],
    /// `None` means the intent is recognised but has no retrieval wired yet.
    pub template: Option<&'static str>,
}

impl IntentProfile {

    pub fn score(&self, text: &str) -> usize {
        self.keywords.iter().filter(|k| text.contains(*k)).count()
    }
}


// Declaration order is the tie-break order.
pub static INTENT_PROFILES: &[IntentProfile] = &[
    IntentProfile {
        category: IntentCategory::SymptomToDisease,
        keywords: &[
            "症状", "病情", "表现", "特征", "可能是什么病", "什么病", "为什么", "原因", "怎么", "怎么造成",
        ],
        template: Some(cypher::SYMPTOM_TO_DISEASE),
    },
    IntentProfile {
        category: IntentCategory::DiseaseSymptoms,
        keywords: &["症状", "情况", "特征", "有哪些症状", "症状有哪些", "什么症状"],
        template: Some(cypher::DISEASE_SYMPTOMS),
    },
    IntentProfile {
        category: IntentCategory::DiseaseDrugs,
        keywords: &["服用", "服药", "药", "用药", "吃什么药", "用什么药", "药物", "啥药"],
        template: Some(cypher::DISEASE_DRUGS),
    },
    IntentProfile {
        category: IntentCategory::DiseaseDepartment,
        keywords: &["科室", "挂什么科", "看什么科", "什么科", "什么科室", "部门", "什么部门"],
        template: Some(cypher::DISEASE_DEPARTMENT),
    },
    IntentProfile {
        category: IntentCategory::DiseaseTreatment,
        keywords: &["治疗", "怎么治", "如何治", "治疗方法", "治疗方案", "怎么办"],
        template: Some(cypher::DISEASE_TREATMENT),
    },
    IntentProfile {
        category: IntentCategory::DiseaseComplications,
        keywords: &["并发症", "并发疾病"],
        template: Some(cypher::DISEASE_COMPLICATIONS),
    },
    IntentProfile {
        category: IntentCategory::DiseaseInfo,
        keywords: &["信息", "详情", "介绍", "是什么", "什么是", "有什么", "有哪些"],
        template: None,
    },
];


pub fn profile_for(profiles: &[IntentProfile], category: IntentCategory) -> Option<&IntentProfile> {
    profiles.iter().find(|p| p.category == category)
}


pub struct IntentClassifier {
    profiles: &'static [IntentProfile],
    default_intent: IntentCategory,
}

impl IntentClassifier {

    pub fn new(profiles: &'static [IntentProfile], default_intent: IntentCategory) -> Self {
        Self {
            profiles,
            default_intent,
        }
    }


    pub fn scores(&self, text: &str) -> Vec<(IntentCategory, usize)> {
        let text = text.to_lowercase();
        self.profiles
            .iter()
            .map(|p| (p.category, p.score(&text)))
            .collect()
    }

    /// Highest keyword score wins; only a strictly greater score displaces
    /// the current best, starting from the default intent at zero.
    pub fn detect(&self, text: &str) -> IntentCategory {
        let mut best = self.default_intent;
        let mut max_score = 0;

        for (category, score) in self.scores(text) {
            if score > max_score {
                max_score = score;
                best = category;
            }
        }

        debug!("Detected intent {} (score={})", best, max_score);
        best
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(INTENT_PROFILES, IntentCategory::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_symptom_question() {
        let classifier = IntentClassifier::default();
        // 原因 and 是什么 tie at one; the earlier profile wins.
        assert_eq!(
            classifier.detect("头痛可能是什么原因"),
            IntentCategory::SymptomToDisease
        );
    }

    #[test]
    fn test_disease_symptoms_question() {
        let classifier = IntentClassifier::default();
        assert_eq!(
            classifier.detect("癫痫的症状有哪些"),
            IntentCategory::DiseaseSymptoms
        );
    }

    #[test]
    fn test_disease_questions() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.detect("糖尿病吃什么药"), IntentCategory::DiseaseDrugs);
        assert_eq!(classifier.detect("心脏病挂什么科"), IntentCategory::DiseaseDepartment);
        assert_eq!(classifier.detect("肾虚怎么治疗"), IntentCategory::DiseaseTreatment);
        assert_eq!(classifier.detect("糖尿病有并发症吗"), IntentCategory::DiseaseComplications);
        assert_eq!(classifier.detect("肺炎的基本信息"), IntentCategory::DiseaseInfo);
    }

    #[test]
    fn test_no_keywords_falls_back_to_default() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.detect(""), IntentCategory::DiseaseInfo);
        assert_eq!(classifier.detect("hello world"), IntentCategory::DiseaseInfo);
        assert!(classifier.scores("").iter().all(|(_, s)| *s == 0));
    }

    #[test]
    fn test_detect_is_deterministic() {
        let classifier = IntentClassifier::default();
        let first = classifier.detect("高血压用什么药物治疗");
        for _ in 0..10 {
            assert_eq!(classifier.detect("高血压用什么药物治疗"), first);
        }
    }

    static TIED: &[IntentProfile] = &[
        IntentProfile {
            category: IntentCategory::DiseaseDrugs,
            keywords: &["fever"],
            template: None,
        },
        IntentProfile {
            category: IntentCategory::DiseaseTreatment,
            keywords: &["fever"],
            template: None,
        },
    ];

    #[test]
    fn test_tie_keeps_earlier_profile() {
        let classifier = IntentClassifier::new(TIED, IntentCategory::DiseaseInfo);
        assert_eq!(classifier.detect("Fever at night"), IntentCategory::DiseaseDrugs);
        assert_eq!(classifier.detect("cough"), IntentCategory::DiseaseInfo);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(IntentCategory::SymptomToDisease.to_string(), "symptom_to_disease");
        assert_eq!(
            IntentCategory::from_str("disease_department").unwrap(),
            IntentCategory::DiseaseDepartment
        );
        assert_eq!(
            serde_json::to_string(&IntentCategory::DiseaseInfo).unwrap(),
            "\"disease_info\""
        );
    }

    #[test]
    fn test_profile_lookup() {
        let info = profile_for(INTENT_PROFILES, IntentCategory::DiseaseInfo).unwrap();
        assert!(info.template.is_none());
        let drugs = profile_for(INTENT_PROFILES, IntentCategory::DiseaseDrugs).unwrap();
        assert!(drugs.template.is_some());
    }
}
