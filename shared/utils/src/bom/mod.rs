//! BOM (Bill of Materials) Impact Module
//!
//! Normalizes the three materials representations into canonical text and
//! scores it for cost band and sustainability rating.
//!
//! Both stages are pure: no I/O, no shared state, identical output for
//! identical input.

pub mod normalizer;
pub mod rules;
pub mod estimator;

pub use normalizer::normalize;
pub use rules::{KeywordRule, RuleHit, COST_RULES, ECO_RULES};
pub use estimator::{estimate_batch, estimate_impact, estimate_text, explain_impact, ImpactBreakdown};
