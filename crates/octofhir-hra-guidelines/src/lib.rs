//! Guideline rule matching
//!
//! This crate provides:
//! - The [`GuidelineRegistry`] of locale-keyed rule sets, with built-in
//!   English and Polish configurations embedded at compile time
//! - The [`GuidelineEngine`] that evaluates each rule's conditions against
//!   the combined answer/derived context and assembles the categorized
//!   [`GuidelinePlan`](octofhir_hra_types::GuidelinePlan)
//!
//! Rule sets are configuration, not code: the same action id is triggered
//! by locale-specific label values, and a request for an unregistered
//! locale falls back to the baseline rule set rather than failing.

pub mod engine;
pub mod error;
pub mod registry;

pub use engine::GuidelineEngine;
pub use error::GuidelineConfigError;
pub use registry::{BASELINE_LOCALE, GuidelineRegistry};
