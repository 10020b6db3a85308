//! Livestock Advisor Core Library
//!
//! Rule-based advisory engine matching observed animal symptoms against a
//! curated knowledge base of cattle and goat diseases.
//!
//! # Architecture
//!
//! ```text
//! (category, symptoms, text)
//!            │
//!            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Advisor::search                     │
//! │                                                         │
//! │  symptom filter → match-count sort → free-text filter   │
//! │                          │                              │
//! │                          ▼                              │
//! │        annotate: urgency + coverage + severity          │
//! └─────────────────────────────────────────────────────────┘
//!            │
//!            ▼
//!   ordered Vec<DiseaseMatch>   (caller renders these)
//! ```
//!
//! # Core Principle
//!
//! **The knowledge base is immutable reference data.** Every query builds
//! fresh annotated [`DiseaseMatch`] records; concurrent queries share the
//! base without locks.
//!
//! # Modules
//!
//! - [`kb`]: knowledge base load, validation, and category lookups
//! - [`models`]: domain types (Disease, Treatment, Query, DiseaseMatch)
//! - [`advisor`]: the filter/sort/annotate pipeline and severity model

pub mod advisor;
pub mod kb;
pub mod models;

// Re-export commonly used types
pub use advisor::{Advisor, AdvisorError, SeverityModel};
pub use kb::{KbError, KnowledgeBase};
pub use models::{Disease, DiseaseMatch, Query, Treatment};
