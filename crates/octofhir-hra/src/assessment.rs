//! The assembled assessment pipeline
//!
//! Wires the four core services into the sequence every request runs:
//! standardize the answers, compute derived variables, match guideline
//! rules. Configuration is loaded once at pipeline construction and shared
//! read-only; each run is an independent pure computation.

use chrono::NaiveDate;
use octofhir_hra_derived::{DerivedCalculator, ThresholdsConfig, ThresholdsError};
use octofhir_hra_guidelines::{GuidelineConfigError, GuidelineEngine, GuidelineRegistry};
use octofhir_hra_standardize::Standardizer;
use octofhir_hra_terminology::{TerminologyError, TerminologyRegistry};
use octofhir_hra_types::{Answers, DerivedVariables, GuidelinePlan, StandardizedRecord};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while assembling a pipeline from configuration.
///
/// Running an assembled pipeline never fails.
#[derive(Debug, Error, Clone)]
pub enum AssessmentError {
    /// Vocabulary tables failed to load
    #[error("terminology: {0}")]
    Terminology(#[from] TerminologyError),

    /// Thresholds policy failed to load
    #[error("thresholds: {0}")]
    Thresholds(#[from] ThresholdsError),

    /// Guideline rule sets failed to load
    #[error("guidelines: {0}")]
    Guidelines(#[from] GuidelineConfigError),
}

/// Everything one assessment run produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// The standardized view of the answers
    pub standardized: StandardizedRecord,
    /// Derived variables computed from the standardized record
    pub derived: DerivedVariables,
    /// The categorized action plan
    pub plan: GuidelinePlan,
}

/// The full pipeline: standardize, derive, match guidelines.
#[derive(Debug, Clone)]
pub struct Assessment {
    standardizer: Standardizer,
    calculator: DerivedCalculator,
    engine: GuidelineEngine,
}

impl Assessment {
    /// Pipeline over the built-in vocabulary, thresholds, and rule sets
    pub fn new() -> Result<Self, AssessmentError> {
        Ok(Self::with_config(
            TerminologyRegistry::builtin()?,
            ThresholdsConfig::default(),
            GuidelineRegistry::builtin()?,
        ))
    }

    /// Pipeline over explicit configuration
    pub fn with_config(
        terminology: TerminologyRegistry,
        thresholds: ThresholdsConfig,
        guidelines: GuidelineRegistry,
    ) -> Self {
        Self {
            standardizer: Standardizer::new(terminology),
            calculator: DerivedCalculator::new(thresholds),
            engine: GuidelineEngine::new(guidelines),
        }
    }

    /// Pin the reference date for age and recency computations
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.calculator = self.calculator.with_today(today);
        self.engine = self.engine.with_today(today);
        self
    }

    /// Standardize one answer set
    pub fn standardize(&self, answers: &Answers) -> StandardizedRecord {
        self.standardizer.standardize(answers)
    }

    /// Compute the derived variables for a standardized record
    pub fn calculate_all(&self, record: &StandardizedRecord) -> DerivedVariables {
        self.calculator.calculate_all(record)
    }

    /// Generate the action plan for one answer set
    pub fn generate_plan(
        &self,
        answers: &Answers,
        derived: &DerivedVariables,
        locale: &str,
    ) -> GuidelinePlan {
        self.engine.generate_plan(answers, derived, locale)
    }

    /// Run the full pipeline for one answer set
    pub fn run(&self, answers: &Answers, locale: &str) -> AssessmentReport {
        let standardized = self.standardize(answers);
        let derived = self.calculate_all(&standardized);
        let plan = self.generate_plan(answers, &derived, locale);
        AssessmentReport {
            standardized,
            derived,
            plan,
        }
    }
}
