//! Health risk assessment pipeline
//!
//! This crate assembles the full assessment pipeline:
//! - Standardization of raw questionnaire answers onto coded vocabularies
//! - Derived-variable computation under a configurable thresholds policy
//! - Condition evaluation for guideline rules and question visibility
//! - Locale-aware guideline matching into a categorized action plan
//!
//! # Example
//!
//! ```
//! use octofhir_hra::{Answers, Assessment};
//!
//! # fn main() -> Result<(), octofhir_hra::AssessmentError> {
//! let mut answers = Answers::new();
//! answers.insert("env.smoking_status", "Current smoker");
//!
//! let pipeline = Assessment::new()?;
//! let report = pipeline.run(&answers, "en");
//! assert!(
//!     report
//!         .plan
//!         .topics_for_doctor
//!         .contains(&"DISCUSS_SMOKING".to_string())
//! );
//! # Ok(())
//! # }
//! ```

// Re-export the pipeline crates under stable module names
pub use octofhir_hra_derived as derived;
pub use octofhir_hra_eval as eval;
pub use octofhir_hra_guidelines as guidelines;
pub use octofhir_hra_standardize as standardize;
pub use octofhir_hra_terminology as terminology;
pub use octofhir_hra_types as types;

// Convenience re-exports
pub use octofhir_hra_derived::{DerivedCalculator, ThresholdsConfig};
pub use octofhir_hra_eval::is_visible;
pub use octofhir_hra_guidelines::{GuidelineEngine, GuidelineRegistry};
pub use octofhir_hra_standardize::Standardizer;
pub use octofhir_hra_terminology::TerminologyRegistry;
pub use octofhir_hra_types::{Answers, DerivedVariables, GuidelinePlan, StandardizedRecord};

pub mod assessment;
pub use assessment::{Assessment, AssessmentError, AssessmentReport};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
