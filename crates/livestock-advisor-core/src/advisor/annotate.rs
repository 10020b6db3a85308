//! Annotation stages of the advisory pipeline.
//!
//! Builds a fresh [`DiseaseMatch`] per surviving disease: urgency flag,
//! symptom coverage, and severity score. The canonical record is cloned
//! into the result; the knowledge base is never written to.

use crate::models::{Disease, DiseaseMatch, Query};

use super::SeverityModel;

/// Marker substring for conditions needing immediate veterinary action.
const URGENT_MARKER: &str = "Critical";

/// Stages 4-6: annotate one disease for the given query.
pub fn annotate(disease: &Disease, query: &Query, severity: &SeverityModel) -> DiseaseMatch {
    let (matching_symptoms, symptom_coverage) = coverage(disease, &query.selected_symptoms);

    DiseaseMatch {
        urgent: is_urgent(disease),
        matching_symptoms,
        symptom_coverage,
        severity_score: severity.score_of(&disease.severity),
        disease: disease.clone(),
    }
}

/// Stage 4: a disease is urgent iff its severity label contains the
/// literal substring "Critical" (case-sensitive).
pub fn is_urgent(disease: &Disease) -> bool {
    disease.severity.contains(URGENT_MARKER)
}

/// Stage 5: matched symptoms (in selection order) and coverage relative
/// to the query's selection count. An empty selection yields no match
/// list and 0.0 coverage.
fn coverage(disease: &Disease, selected: &[String]) -> (Option<Vec<String>>, f64) {
    if selected.is_empty() {
        return (None, 0.0);
    }
    let matching: Vec<String> = selected
        .iter()
        .filter(|s| disease.has_symptom(s))
        .cloned()
        .collect();
    let percent = matching.len() as f64 / selected.len() as f64 * 100.0;
    (Some(matching), percent)
}
