//! Condition evaluation
//!
//! `evaluate` is a pure, total function: it never panics and never returns
//! an error. Malformed paths, unanswered questions, failed numeric coercion,
//! and unrecognized operators all resolve to `false`.
//!
//! Leaf resolution order:
//! 1. enumerated virtual variables (`has_cervix`, the `age` fallback)
//! 2. raw answers
//! 3. derived variables (raw answers win on key collision)

use crate::context::EvalContext;
use crate::operators::{array_contains, is_truthy, loose_equal, ordered_match, overlap_match};
use crate::virtuals;
use octofhir_hra_types::{
    AnswerValue, Condition, ConditionOperator, ConditionValue, DerivedValue, LeafCondition,
};

/// Evaluate a condition tree against the context.
pub fn evaluate(condition: &Condition, ctx: &EvalContext<'_>) -> bool {
    match condition {
        Condition::And { and } => and.iter().all(|child| evaluate(child, ctx)),
        Condition::Or { or } => or.iter().any(|child| evaluate(child, ctx)),
        Condition::Leaf(leaf) => evaluate_leaf(leaf, ctx),
    }
}

/// Resolve the value a leaf's `question_id` refers to.
fn resolve(question_id: &str, ctx: &EvalContext<'_>) -> Option<AnswerValue> {
    if question_id == virtuals::HAS_CERVIX {
        return Some(AnswerValue::Bool(virtuals::has_cervix(ctx.answers())));
    }
    if question_id == virtuals::AGE && !ctx.answers().is_answered(virtuals::AGE) {
        if let Some(age) = virtuals::age_from_dob(ctx.answers(), ctx.today()) {
            return Some(AnswerValue::Number(age));
        }
    }
    if let Some(value) = ctx.answers().get(question_id) {
        return Some(value.clone());
    }
    ctx.derived()
        .and_then(|derived| derived.get(question_id))
        .map(answer_from_derived)
}

fn answer_from_derived(value: &DerivedValue) -> AnswerValue {
    match value {
        DerivedValue::Bool(b) => AnswerValue::Bool(*b),
        DerivedValue::Number(n) => AnswerValue::Number(*n),
        DerivedValue::Text(s) => AnswerValue::String(s.clone()),
    }
}

fn evaluate_leaf(leaf: &LeafCondition, ctx: &EvalContext<'_>) -> bool {
    let answer = resolve(&leaf.question_id, ctx);
    match &leaf.operator {
        None => implicit_match(answer.as_ref(), &leaf.value),
        Some(operator) => match answer {
            Some(answer) => operator_match(operator, &answer, &leaf.value),
            // Unanswered questions never satisfy an operator leaf
            None => false,
        },
    }
}

/// Legacy implicit matching for operator-less leaves, in exactly this
/// precedence: list overlap, then boolean truthiness, then strict equality.
fn implicit_match(answer: Option<&AnswerValue>, value: &ConditionValue) -> bool {
    if let Some(wanted) = value.as_list() {
        return match answer {
            Some(answer) => overlap_match(answer, wanted),
            None => false,
        };
    }
    if let Some(wanted) = value.as_bool() {
        // `value: false` asserts the absence of a truthy answer, so an
        // unanswered question satisfies it
        let truthy = answer.is_some_and(is_truthy);
        return wanted == truthy;
    }
    match answer {
        Some(answer) => strict_equal(answer, value),
        None => false,
    }
}

/// Strict same-type equality; mismatched types never match.
fn strict_equal(answer: &AnswerValue, value: &ConditionValue) -> bool {
    match (answer, value) {
        (AnswerValue::Number(a), ConditionValue::Number(b)) => a == b,
        (AnswerValue::String(a), ConditionValue::String(b)) => a == b,
        _ => false,
    }
}

fn operator_match(
    operator: &ConditionOperator,
    answer: &AnswerValue,
    value: &ConditionValue,
) -> bool {
    match operator {
        ConditionOperator::Eq => loose_equal(answer, value),
        ConditionOperator::NotEq => !loose_equal(answer, value),
        ConditionOperator::Gt
        | ConditionOperator::Gte
        | ConditionOperator::Lt
        | ConditionOperator::Lte => ordered_match(operator, answer, value),
        ConditionOperator::ArrayContains => array_contains(answer, value),
        ConditionOperator::Other(raw) => {
            log::debug!("unrecognized operator {raw:?} fails closed");
            false
        }
    }
}
