//! Condition trees for guideline rules and question visibility
//!
//! Conditions are pure configuration data, authored per locale and shipped
//! as JSON. The tree is a closed tagged variant (`and` / `or` nodes over a
//! leaf comparison), so the evaluator can match exhaustively instead of
//! shape-sniffing. The wire format stays byte-compatible with the legacy
//! documents: `{"and": [...]}`, `{"or": [...]}`, or
//! `{"questionId": ..., "operator": ..., "value": ...}` with `operator`
//! optional.

use serde::{Deserialize, Serialize};

/// A boolean condition over one answer set.
///
/// Untagged variant order is the legacy resolution order: an object carrying
/// an `and` key is a conjunction even if it also carries leaf fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// True iff every child is true; an empty list is vacuously true
    And {
        and: Vec<Condition>,
    },
    /// True iff any child is true; an empty list is false
    Or {
        or: Vec<Condition>,
    },
    /// Leaf comparison against a single answer
    Leaf(LeafCondition),
}

impl Condition {
    /// Leaf comparison with an explicit operator
    pub fn leaf(
        question_id: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self::Leaf(LeafCondition {
            question_id: question_id.into(),
            operator: Some(operator),
            value: value.into(),
        })
    }

    /// Legacy leaf comparison without an operator (implicit matching)
    pub fn implicit(question_id: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        Self::Leaf(LeafCondition {
            question_id: question_id.into(),
            operator: None,
            value: value.into(),
        })
    }

    /// Conjunction of the given conditions
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self::And { and: conditions }
    }

    /// Disjunction of the given conditions
    pub fn any(conditions: Vec<Condition>) -> Self {
        Self::Or { or: conditions }
    }
}

/// A single comparison between a question's answer and a configured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafCondition {
    /// Question id (or virtual/derived variable key) to resolve
    pub question_id: String,
    /// Comparison operator; absent means legacy implicit matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<ConditionOperator>,
    /// Value to compare against, in the rule locale's label vocabulary
    pub value: ConditionValue,
}

/// Comparison operator of a leaf condition.
///
/// Parsing is total: the legacy spellings `=`, `==` and `equals` collapse
/// into [`ConditionOperator::Eq`], `!=` and `not_equals` into
/// [`ConditionOperator::NotEq`], and any unrecognized string is preserved in
/// [`ConditionOperator::Other`] (which always evaluates to false).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionOperator {
    /// Loose equality (`=`, `==`, `equals`)
    Eq,
    /// Loose inequality (`!=`, `not_equals`)
    NotEq,
    /// Numeric greater-than
    Gt,
    /// Numeric greater-or-equal
    Gte,
    /// Numeric less-than
    Lt,
    /// Numeric less-or-equal
    Lte,
    /// Membership in a JSON-encoded multi-select answer
    ArrayContains,
    /// Unrecognized operator, kept verbatim for diagnostics
    Other(String),
}

impl ConditionOperator {
    /// Parse a wire operator string
    pub fn parse(raw: &str) -> Self {
        match raw {
            "=" | "==" | "equals" => Self::Eq,
            "!=" | "not_equals" => Self::NotEq,
            ">" => Self::Gt,
            ">=" => Self::Gte,
            "<" => Self::Lt,
            "<=" => Self::Lte,
            "array_contains" => Self::ArrayContains,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical wire form
    pub fn as_str(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::ArrayContains => "array_contains",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this operator is one the evaluator understands
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ConditionOperator {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ConditionOperator> for String {
    fn from(op: ConditionOperator) -> Self {
        op.as_str().to_string()
    }
}

/// The configured right-hand side of a leaf comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// Boolean value: implicit matching tests answer truthiness
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Label string in the rule locale's vocabulary
    String(String),
    /// Array value: implicit matching tests answer overlap
    List(Vec<ConditionValue>),
}

impl ConditionValue {
    /// Borrow the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// List payload, if any
    pub fn as_list(&self) -> Option<&[ConditionValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Canonical text form of a scalar value; lists render as JSON
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::List(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for ConditionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ConditionValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<&str>> for ConditionValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// A questionnaire item guarded by an optional visibility condition.
///
/// Deserializes from any item document; fields other than `dependsOn` are
/// ignored. An absent condition means the item is always visible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityGate {
    /// Condition controlling whether the item is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Condition>,
}
