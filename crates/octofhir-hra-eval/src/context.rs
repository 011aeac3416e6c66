//! Evaluation context
//!
//! Bundles everything a condition can be resolved against: the raw answer
//! set, an optional derived-variable overlay, and the reference date used by
//! the age fallback. The reference date is always threaded as a value so
//! evaluation is deterministic and testable.

use chrono::NaiveDate;
use octofhir_hra_types::{Answers, DerivedVariables};

/// Read-only context a condition is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    answers: &'a Answers,
    derived: Option<&'a DerivedVariables>,
    today: NaiveDate,
}

impl<'a> EvalContext<'a> {
    /// Context over raw answers only, dated today
    pub fn new(answers: &'a Answers) -> Self {
        Self {
            answers,
            derived: None,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Add a derived-variable overlay.
    ///
    /// Raw answers win over derived variables on key collision.
    pub fn with_derived(mut self, derived: &'a DerivedVariables) -> Self {
        self.derived = Some(derived);
        self
    }

    /// Pin the reference date used by the age fallback
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The raw answer set
    pub fn answers(&self) -> &'a Answers {
        self.answers
    }

    /// The derived-variable overlay, if any
    pub fn derived(&self) -> Option<&'a DerivedVariables> {
        self.derived
    }

    /// The reference date
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
