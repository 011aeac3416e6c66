//! Question and module visibility
//!
//! Questionnaire items carry an optional `dependsOn` condition. Visibility
//! is a thin wrapper over the evaluator against raw answers only; derived
//! variables play no part in what the user is shown.

use crate::context::EvalContext;
use crate::engine::evaluate;
use octofhir_hra_types::{Answers, VisibilityGate};

/// Whether an item gated by `dependsOn` should be shown.
///
/// Items without a gate are always visible.
pub fn is_visible(item: &VisibilityGate, answers: &Answers) -> bool {
    match &item.depends_on {
        Some(condition) => evaluate(condition, &EvalContext::new(answers)),
        None => true,
    }
}
