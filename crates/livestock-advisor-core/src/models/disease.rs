//! Canonical disease records.

use serde::{Deserialize, Serialize};

/// A single treatment entry for a disease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Treatment {
    /// Treatment category (e.g., "Medication", "Management", "Prevention")
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text guidance for this treatment
    pub details: String,
}

/// A disease record from the knowledge base.
///
/// Records are immutable reference data; per-query annotations live on
/// [`DiseaseMatch`](crate::models::DiseaseMatch), never here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disease {
    /// Identifier, unique within its animal category
    pub id: u32,
    /// Display name
    pub name: String,
    /// Symptom tokens, lowercase, in presentation order
    pub symptoms: Vec<String>,
    /// Short description of the condition
    pub description: String,
    /// Human-readable severity label, possibly compound
    /// (e.g., "Critical - Reportable Disease")
    pub severity: String,
    /// Recommended treatments, in presentation order
    pub treatments: Vec<Treatment>,
}

impl Disease {
    /// Check whether this disease lists the given symptom token.
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    /// Check whether this disease lists any of the given symptom tokens.
    pub fn matches_any(&self, selected: &[String]) -> bool {
        selected.iter().any(|s| self.has_symptom(s))
    }

    /// Count how many of the given symptom tokens this disease lists.
    pub fn match_count(&self, selected: &[String]) -> usize {
        selected.iter().filter(|s| self.has_symptom(s)).count()
    }

    /// Case-insensitive substring match against name, description, or any
    /// symptom. `needle` must already be lowercase; symptom tokens are
    /// stored lowercase so they are checked directly.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.symptoms.iter().any(|s| s.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Disease {
        Disease {
            id: 1,
            name: "Mastitis".into(),
            symptoms: vec!["swollen udder".into(), "abnormal milk".into(), "fever".into()],
            description: "Inflammation of the mammary gland.".into(),
            severity: "Moderate to High".into(),
            treatments: vec![Treatment {
                kind: "Medication".into(),
                details: "Intramammary antibiotics.".into(),
            }],
        }
    }

    #[test]
    fn test_has_symptom() {
        let disease = sample();
        assert!(disease.has_symptom("fever"));
        assert!(!disease.has_symptom("coughing"));
        // Exact token match, not substring
        assert!(!disease.has_symptom("udder"));
    }

    #[test]
    fn test_matches_any() {
        let disease = sample();
        assert!(disease.matches_any(&["coughing".into(), "fever".into()]));
        assert!(!disease.matches_any(&["coughing".into(), "lameness".into()]));
        assert!(!disease.matches_any(&[]));
    }

    #[test]
    fn test_match_count() {
        let disease = sample();
        let selected = vec!["fever".into(), "swollen udder".into(), "lameness".into()];
        assert_eq!(disease.match_count(&selected), 2);
        assert_eq!(disease.match_count(&[]), 0);
    }

    #[test]
    fn test_matches_text_fields() {
        let disease = sample();
        // Name
        assert!(disease.matches_text("mastitis"));
        // Description
        assert!(disease.matches_text("mammary"));
        // Symptom substring
        assert!(disease.matches_text("udder"));
        assert!(!disease.matches_text("hoof"));
    }

    #[test]
    fn test_treatment_serde_field_name() {
        let json = r#"{"type": "Prevention", "details": "Good hygiene."}"#;
        let treatment: Treatment = serde_json::from_str(json).unwrap();
        assert_eq!(treatment.kind, "Prevention");

        let back = serde_json::to_string(&treatment).unwrap();
        assert!(back.contains("\"type\""));
    }
}
