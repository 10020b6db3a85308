//! Per-request query input.

use serde::{Deserialize, Serialize};

/// A single advisory query: animal category, selected symptoms, and an
/// optional free-text search. Transient; constructed per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Query {
    /// Animal category key (e.g., "cattle", "goat")
    pub category: String,
    /// Selected symptom tokens, normalized, in selection order
    pub selected_symptoms: Vec<String>,
    /// Free-text filter; empty means no text filtering
    pub search_text: String,
}

impl Query {
    /// Build a query, normalizing symptom tokens: trim, lowercase, and
    /// drop duplicates while preserving selection order.
    pub fn new(
        category: impl Into<String>,
        selected_symptoms: impl IntoIterator<Item = impl AsRef<str>>,
        search_text: impl Into<String>,
    ) -> Self {
        let mut symptoms: Vec<String> = Vec::new();
        for symptom in selected_symptoms {
            let token = symptom.as_ref().trim().to_lowercase();
            if !token.is_empty() && !symptoms.contains(&token) {
                symptoms.push(token);
            }
        }

        Self {
            category: category.into(),
            selected_symptoms: symptoms,
            search_text: search_text.into(),
        }
    }

    /// Query with no symptom selection and no text filter.
    pub fn all(category: impl Into<String>) -> Self {
        Self::new(category, std::iter::empty::<&str>(), "")
    }

    /// Whether any symptoms were selected.
    pub fn has_symptoms(&self) -> bool {
        !self.selected_symptoms.is_empty()
    }

    /// Free-text needle, lowercased; `None` when the text is blank.
    pub fn text_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
