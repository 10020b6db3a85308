//! Filtering and ranking stages of the advisory pipeline.
//!
//! Each stage borrows the candidate list and returns a new one; the
//! knowledge base records behind the references are never modified.

use std::cmp::Reverse;

use crate::models::Disease;

/// Stage 1: keep diseases listing at least one selected symptom (OR
/// semantics). An empty selection passes every disease through.
pub fn filter_by_symptoms<'a>(
    diseases: Vec<&'a Disease>,
    selected: &[String],
) -> Vec<&'a Disease> {
    if selected.is_empty() {
        return diseases;
    }
    diseases
        .into_iter()
        .filter(|d| d.matches_any(selected))
        .collect()
}

/// Stage 2: stable sort by descending count of matched symptoms. Ties
/// keep their prior relative order. An empty selection is a no-op.
pub fn sort_by_match_count<'a>(
    mut diseases: Vec<&'a Disease>,
    selected: &[String],
) -> Vec<&'a Disease> {
    if selected.is_empty() {
        return diseases;
    }
    diseases.sort_by_key(|d| Reverse(d.match_count(selected)));
    diseases
}

/// Stage 3: case-insensitive substring filter against name, description,
/// or any symptom. `needle` of `None` (blank text) is a no-op.
pub fn filter_by_search_text<'a>(
    diseases: Vec<&'a Disease>,
    needle: Option<&str>,
) -> Vec<&'a Disease> {
    let Some(needle) = needle else {
        return diseases;
    };
    diseases
        .into_iter()
        .filter(|d| d.matches_text(needle))
        .collect()
}
