//! Domain models for the livestock advisor.

mod disease;
mod query;
mod report;

pub use disease::*;
pub use query::*;
pub use report::*;
