//! Knowledge base layer: the immutable disease/symptom reference data.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Disease;

/// Built-in knowledge base document (cattle + goat).
const BUILTIN_DOCUMENT: &str = include_str!("../../data/knowledge_base.json");

/// Highest severity score the scale may assign.
const MAX_SEVERITY_SCORE: u8 = 5;

/// Knowledge base errors.
#[derive(Error, Debug)]
pub enum KbError {
    #[error("Unknown animal category: {0}")]
    UnknownCategory(String),

    #[error("Invalid knowledge base: {0}")]
    Invalid(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KbResult<T> = Result<T, KbError>;

/// One animal category's reference data.
#[derive(Debug, Clone, Deserialize)]
struct CategoryEntry {
    name: String,
    symptoms: Vec<String>,
    diseases: Vec<Disease>,
}

/// On-disk document shape.
#[derive(Debug, Deserialize)]
struct Document {
    severity_scale: HashMap<String, u8>,
    categories: Vec<CategoryEntry>,
}

/// The advisory knowledge base: diseases and recognized symptoms per
/// animal category, plus the severity score scale.
///
/// Loaded and validated once, then read-only. Safe to share across
/// threads behind `&` or `Arc` — no query ever writes to it.
pub struct KnowledgeBase {
    severity_scale: HashMap<String, u8>,
    categories: Vec<CategoryEntry>,
}

impl KnowledgeBase {
    /// Load the built-in cattle/goat knowledge base.
    pub fn builtin() -> KbResult<Self> {
        Self::from_json(BUILTIN_DOCUMENT)
    }

    /// Load a knowledge base from a JSON document.
    pub fn from_json(json: &str) -> KbResult<Self> {
        let doc: Document = serde_json::from_str(json)?;
        let kb = Self {
            severity_scale: doc.severity_scale,
            categories: doc.categories,
        };
        kb.validate()?;
        Ok(kb)
    }

    /// Validate document invariants once at load time.
    fn validate(&self) -> KbResult<()> {
        for (label, score) in &self.severity_scale {
            if *score > MAX_SEVERITY_SCORE {
                return Err(KbError::Invalid(format!(
                    "severity score {} for label {:?} exceeds {}",
                    score, label, MAX_SEVERITY_SCORE
                )));
            }
        }

        let mut seen_categories = Vec::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(KbError::Invalid("empty category name".into()));
            }
            if seen_categories.contains(&&category.name) {
                return Err(KbError::Invalid(format!(
                    "duplicate category: {}",
                    category.name
                )));
            }
            seen_categories.push(&category.name);

            Self::validate_symptoms(&category.name, &category.symptoms)?;

            let mut seen_ids = Vec::new();
            for disease in &category.diseases {
                if seen_ids.contains(&disease.id) {
                    return Err(KbError::Invalid(format!(
                        "duplicate disease id {} in category {}",
                        disease.id, category.name
                    )));
                }
                seen_ids.push(disease.id);

                if disease.name.trim().is_empty() {
                    return Err(KbError::Invalid(format!(
                        "unnamed disease (id {}) in category {}",
                        disease.id, category.name
                    )));
                }
                Self::validate_symptoms(&disease.name, &disease.symptoms)?;
            }
        }
        Ok(())
    }

    fn validate_symptoms(owner: &str, symptoms: &[String]) -> KbResult<()> {
        for symptom in symptoms {
            if symptom.trim().is_empty() {
                return Err(KbError::Invalid(format!("empty symptom under {}", owner)));
            }
            if *symptom != symptom.to_lowercase() {
                return Err(KbError::Invalid(format!(
                    "symptom {:?} under {} is not lowercase",
                    symptom, owner
                )));
            }
        }
        Ok(())
    }

    fn category(&self, name: &str) -> KbResult<&CategoryEntry> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| KbError::UnknownCategory(name.to_string()))
    }

    /// Diseases for a category, in document order.
    pub fn diseases_for(&self, category: &str) -> KbResult<&[Disease]> {
        Ok(&self.category(category)?.diseases)
    }

    /// Recognized symptoms for a category, in document order.
    pub fn symptoms_for(&self, category: &str) -> KbResult<&[String]> {
        Ok(&self.category(category)?.symptoms)
    }

    /// Known category keys, in document order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// The severity label → score table from the document.
    pub fn severity_scale(&self) -> &HashMap<String, u8> {
        &self.severity_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.categories(), vec!["cattle", "goat"]);
    }

    #[test]
    fn test_builtin_contents() {
        let kb = KnowledgeBase::builtin().unwrap();

        let cattle = kb.diseases_for("cattle").unwrap();
        assert_eq!(cattle.len(), 3);
        assert_eq!(cattle[0].name, "Bovine Respiratory Disease (BRD)");
        assert_eq!(cattle[1].name, "Foot and Mouth Disease");
        assert_eq!(cattle[2].name, "Mastitis");

        let goat = kb.diseases_for("goat").unwrap();
        assert_eq!(goat.len(), 3);
        assert_eq!(goat[2].name, "Coccidiosis");

        assert_eq!(kb.symptoms_for("cattle").unwrap().len(), 18);
        assert_eq!(kb.symptoms_for("goat").unwrap().len(), 16);

        assert_eq!(kb.severity_scale().get("Critical"), Some(&5));
        assert_eq!(kb.severity_scale().get("Low"), Some(&1));
    }

    #[test]
    fn test_unknown_category() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(matches!(
            kb.diseases_for("sheep"),
            Err(KbError::UnknownCategory(c)) if c == "sheep"
        ));
        assert!(matches!(
            kb.symptoms_for("sheep"),
            Err(KbError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_new_category_is_data_only() {
        let json = r#"{
            "severity_scale": {"Low": 1},
            "categories": [
                {"name": "sheep", "symptoms": ["coughing"], "diseases": []}
            ]
        }"#;
        let kb = KnowledgeBase::from_json(json).unwrap();
        assert_eq!(kb.categories(), vec!["sheep"]);
        assert!(kb.diseases_for("sheep").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_disease_ids() {
        let json = r#"{
            "severity_scale": {},
            "categories": [{
                "name": "cattle",
                "symptoms": ["fever"],
                "diseases": [
                    {"id": 1, "name": "A", "symptoms": ["fever"], "description": "", "severity": "Low", "treatments": []},
                    {"id": 1, "name": "B", "symptoms": ["fever"], "description": "", "severity": "Low", "treatments": []}
                ]
            }]
        }"#;
        assert!(matches!(
            KnowledgeBase::from_json(json),
            Err(KbError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_uppercase_symptom() {
        let json = r#"{
            "severity_scale": {},
            "categories": [
                {"name": "cattle", "symptoms": ["Fever"], "diseases": []}
            ]
        }"#;
        assert!(matches!(
            KnowledgeBase::from_json(json),
            Err(KbError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let json = r#"{
            "severity_scale": {"Catastrophic": 9},
            "categories": []
        }"#;
        assert!(matches!(
            KnowledgeBase::from_json(json),
            Err(KbError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            KnowledgeBase::from_json("not json"),
            Err(KbError::Json(_))
        ));
    }
}
