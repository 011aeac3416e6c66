//! Derived clinical variables
//!
//! This crate provides:
//! - The [`DerivedCalculator`] from a standardized record to the flat
//!   [`DerivedVariables`](octofhir_hra_types::DerivedVariables) map
//! - Genetic syndrome flags matched on HGNC ids or umbrella panel labels
//! - Exposure, infection-status, and partner-risk banding
//! - Screening-due flags driven by the [`ThresholdsConfig`] recency policy
//!
//! Calculation is pure and total: the same record, policy, and reference
//! date always yield the same map, and no input shape can make it fail.

pub mod calculator;
pub mod config;

pub use calculator::DerivedCalculator;
pub use config::{ThresholdsConfig, ThresholdsError};
