//! Severity label scoring.
//!
//! Maps human-readable severity labels to an ordinal score in 0..=5,
//! tolerating compound labels like "Critical - Reportable Disease" or
//! "High - No Cure": only the text before the " - " separator is scored.

use std::collections::HashMap;

/// Separator between a base severity and its qualifier.
const QUALIFIER_SEPARATOR: &str = " - ";

/// Severity model: label → ordinal score table.
pub struct SeverityModel {
    /// Base label → score
    scale: HashMap<String, u8>,
}

impl Default for SeverityModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityModel {
    /// Create a severity model with the default scale.
    pub fn new() -> Self {
        Self {
            scale: Self::default_scale(),
        }
    }

    /// Create a severity model from a configured scale.
    pub fn from_scale(scale: HashMap<String, u8>) -> Self {
        Self { scale }
    }

    /// Score a severity label.
    ///
    /// Compound labels are reduced to their base (text before " - ").
    /// Unmapped base labels score 0; unknown labels are not an error.
    pub fn score_of(&self, label: &str) -> u8 {
        let base = label
            .split_once(QUALIFIER_SEPARATOR)
            .map_or(label, |(base, _)| base);
        self.scale.get(base).copied().unwrap_or(0)
    }

    /// Add or override a base label mapping.
    pub fn add_label(&mut self, label: &str, score: u8) {
        self.scale.insert(label.to_string(), score);
    }

    /// Default severity scale.
    fn default_scale() -> HashMap<String, u8> {
        let mut map = HashMap::new();
        map.insert("Low".into(), 1);
        map.insert("Moderate".into(), 2);
        map.insert("Moderate to High".into(), 3);
        map.insert("High".into(), 4);
        map.insert("Critical".into(), 5);
        map
    }
}
