//! Annotated query results.

use serde::{Deserialize, Serialize};

use super::Disease;

/// An annotated match produced by one advisory query.
///
/// Pairs a copy of the canonical [`Disease`] with transient, per-query
/// annotations. The knowledge base record itself is never written to;
/// every query builds fresh `DiseaseMatch` values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseMatch {
    /// The matched disease record
    #[serde(flatten)]
    pub disease: Disease,
    /// Whether the severity label denotes a critical/reportable condition
    pub urgent: bool,
    /// Selected symptoms that this disease lists, in selection order.
    /// `None` when the query selected no symptoms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_symptoms: Option<Vec<String>>,
    /// Percentage of the query's selected symptoms this disease covers
    /// (0.0 when no symptoms were selected)
    pub symptom_coverage: f64,
    /// Ordinal severity score in 0..=5
    pub severity_score: u8,
}

impl DiseaseMatch {
    /// Number of selected symptoms this disease matched.
    pub fn match_count(&self) -> usize {
        self.matching_symptoms.as_ref().map_or(0, Vec::len)
    }
}
