//! Rule-based advisory pipeline.
//!
//! Pipeline: symptom filter → match-count sort → text filter → annotation
//! (urgency, coverage, severity score)

mod annotate;
mod filters;
mod severity;

pub use annotate::*;
pub use filters::*;
pub use severity::*;

use thiserror::Error;
use tracing::debug;

use crate::kb::KnowledgeBase;
use crate::models::{DiseaseMatch, Query};

/// Advisor errors.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Knowledge base error: {0}")]
    Kb(#[from] crate::kb::KbError),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Query facade running the full advisory pipeline over a knowledge base.
///
/// Holds its dependencies explicitly; there is no global state. Every
/// call to [`Advisor::search`] is a pure read producing fresh annotated
/// records.
pub struct Advisor<'a> {
    kb: &'a KnowledgeBase,
    severity: SeverityModel,
}

impl<'a> Advisor<'a> {
    /// Create an advisor over a knowledge base. The severity model is
    /// taken from the knowledge base document's scale.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self {
            severity: SeverityModel::from_scale(kb.severity_scale().clone()),
            kb,
        }
    }

    /// Run one advisory query.
    ///
    /// Fails only with [`AdvisorError::Kb`] when the category is unknown.
    /// Empty symptom selections and empty search text are valid and yield
    /// the full category list or an empty result, never an error.
    pub fn search(&self, query: &Query) -> AdvisorResult<Vec<DiseaseMatch>> {
        // Stage 1: symptom filter (OR semantics)
        let candidates: Vec<_> = self.kb.diseases_for(&query.category)?.iter().collect();
        let total = candidates.len();
        let candidates = filter_by_symptoms(candidates, &query.selected_symptoms);
        debug!(
            category = %query.category,
            total,
            matched = candidates.len(),
            "symptom filter"
        );

        // Stage 2: stable sort by descending match count
        let candidates = sort_by_match_count(candidates, &query.selected_symptoms);

        // Stage 3: free-text filter
        let needle = query.text_needle();
        let candidates = filter_by_search_text(candidates, needle.as_deref());
        debug!(matched = candidates.len(), "text filter");

        // Stages 4-6: annotate survivors into fresh result records
        Ok(candidates
            .into_iter()
            .map(|d| annotate(d, query, &self.severity))
            .collect())
    }

    /// The severity model in use.
    pub fn severity_model(&self) -> &SeverityModel {
        &self.severity
    }
}
