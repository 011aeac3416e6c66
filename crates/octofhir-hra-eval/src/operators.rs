//! Matching primitives for leaf conditions
//!
//! All helpers are total: a side that fails to coerce makes the comparison
//! false instead of raising. Numeric comparison goes through `Decimal` so
//! `"45"` and `45.0` compare equal without float surprises.

use octofhir_hra_types::{AnswerValue, ConditionOperator, ConditionValue, decode_multi_select};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::cmp::Ordering;

/// JSON-encoded "none selected" payloads submitted by multi-select questions
/// with an exclusive none option. Treated as falsy by implicit boolean
/// matching, per questionnaire locale.
const NONE_SELECTED_SENTINELS: &[&str] = &[
    r#"["None of the above"]"#,
    r#"["Żadne z powyższych"]"#,
];

/// Truthiness of an answer under implicit boolean matching.
///
/// Falsy: `false`, zero, NaN, empty or whitespace-only strings, the literal
/// string `"false"`, the literal empty-array string `"[]"`, and the
/// none-selected sentinel payloads. Everything else is truthy.
pub fn is_truthy(answer: &AnswerValue) -> bool {
    match answer {
        AnswerValue::Bool(b) => *b,
        AnswerValue::Number(n) => *n != 0.0 && !n.is_nan(),
        AnswerValue::String(s) => {
            let trimmed = s.trim();
            !(trimmed.is_empty()
                || trimmed == "false"
                || trimmed == "[]"
                || NONE_SELECTED_SENTINELS.contains(&trimmed))
        }
    }
}

/// Numeric coercion of an answer side
pub fn answer_decimal(answer: &AnswerValue) -> Option<Decimal> {
    match answer {
        AnswerValue::Number(n) => Decimal::from_f64(*n),
        AnswerValue::String(s) => s.trim().parse().ok(),
        AnswerValue::Bool(_) => None,
    }
}

/// Numeric coercion of a configured value side
pub fn value_decimal(value: &ConditionValue) -> Option<Decimal> {
    match value {
        ConditionValue::Number(n) => Decimal::from_f64(*n),
        ConditionValue::String(s) => s.trim().parse().ok(),
        ConditionValue::Bool(_) | ConditionValue::List(_) => None,
    }
}

/// Ordered comparison (`>`, `>=`, `<`, `<=`).
///
/// False whenever either side fails numeric coercion.
pub fn ordered_match(
    operator: &ConditionOperator,
    answer: &AnswerValue,
    value: &ConditionValue,
) -> bool {
    let (Some(left), Some(right)) = (answer_decimal(answer), value_decimal(value)) else {
        return false;
    };
    match operator {
        ConditionOperator::Gt => left.cmp(&right) == Ordering::Greater,
        ConditionOperator::Gte => matches!(left.cmp(&right), Ordering::Greater | Ordering::Equal),
        ConditionOperator::Lt => left.cmp(&right) == Ordering::Less,
        ConditionOperator::Lte => matches!(left.cmp(&right), Ordering::Less | Ordering::Equal),
        _ => false,
    }
}

/// Loose equality: numeric when both sides coerce, canonical text otherwise.
pub fn loose_equal(answer: &AnswerValue, value: &ConditionValue) -> bool {
    if let (Some(left), Some(right)) = (answer_decimal(answer), value_decimal(value)) {
        return left == right;
    }
    answer.to_text() == value.to_text()
}

/// Implicit list matching: any overlap between the decoded multi-select
/// answer and the configured list; when the answer does not decode as a JSON
/// array, the configured list is tested for the raw answer text instead.
pub fn overlap_match(answer: &AnswerValue, wanted: &[ConditionValue]) -> bool {
    match answer.as_str().and_then(decode_multi_select) {
        Some(selected) => selected
            .iter()
            .any(|label| wanted.iter().any(|w| w.to_text() == *label)),
        None => {
            let raw = answer.to_text();
            wanted.iter().any(|w| w.to_text() == raw)
        }
    }
}

/// `array_contains`: membership of the configured value in the decoded
/// multi-select answer. Fails closed when the answer is not a JSON array.
pub fn array_contains(answer: &AnswerValue, value: &ConditionValue) -> bool {
    let Some(selected) = answer.as_str().and_then(decode_multi_select) else {
        return false;
    };
    let wanted = value.to_text();
    selected.iter().any(|label| *label == wanted)
}
