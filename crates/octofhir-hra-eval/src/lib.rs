//! HRA condition evaluator
//!
//! This crate provides the generic boolean engine that questionnaire rules,
//! visibility gates, and guideline conditions all run on. It implements:
//!
//! - **Group nodes**: `and` / `or` recursion (`and: []` is vacuously true,
//!   `or: []` is false)
//! - **Leaf resolution**: virtual variables (`has_cervix`, the `age`
//!   fallback from `dob`), then raw answers, then derived variables
//! - **Implicit matching**: the legacy operator-less leaf shape (list
//!   overlap, boolean truthiness with none-selected sentinels, strict
//!   equality), in its original precedence
//! - **Operator matching**: ordered comparison through `Decimal` coercion,
//!   loose equality, `array_contains`
//!
//! # Totality
//!
//! `evaluate` is pure and total. Malformed input of any kind (unparseable
//! multi-select payloads, failed numeric coercion, unrecognized operators,
//! unanswered questions) resolves to `false` rather than an error; there is
//! no error type in this crate.
//!
//! # Example
//!
//! ```
//! use octofhir_hra_eval::{EvalContext, evaluate};
//! use octofhir_hra_types::{Answers, Condition, ConditionOperator};
//!
//! let answers = Answers::from([("age", 52.into())]);
//! let rule = Condition::leaf("age", ConditionOperator::Gte, 50);
//! assert!(evaluate(&rule, &EvalContext::new(&answers)));
//! ```

pub mod context;
pub mod engine;
pub mod operators;
pub mod virtuals;
pub mod visibility;

pub use context::EvalContext;
pub use engine::evaluate;
pub use visibility::is_visible;

// Re-export matching helpers used by other crates' tests
pub use operators::{is_truthy, loose_equal};
