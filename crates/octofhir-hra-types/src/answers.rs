//! Raw questionnaire answers
//!
//! Answers arrive as a flat map from dot-namespaced question ids (e.g.
//! `cond.ibd.year_dx`) to scalar values. Multi-select questions are stored
//! the way the questionnaire frontend submits them: as a JSON-encoded array
//! inside a string. A missing key means "unanswered" and is never an error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single raw answer value.
///
/// Untagged on the wire: `true`, `42`, `"Current smoker"` and
/// `"[\"MLH1\",\"MSH2\"]"` are all valid answer payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Boolean answer (yes/no toggles)
    Bool(bool),
    /// Numeric answer
    Number(f64),
    /// Free-text, categorical label, or JSON-encoded multi-select payload
    String(String),
}

impl AnswerValue {
    /// Borrow the string payload, if this is a string answer
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload, if this is a number answer
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean answer
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Canonical text form of the value.
    ///
    /// Numbers use the shortest `f64` display form (`45`, not `45.0`);
    /// booleans render as `true`/`false`. Used for loose comparisons and
    /// for vocabulary lookups.
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The full answer set for one assessment request.
///
/// Keys are question ids; insertion order is preserved so that the answers
/// attached to a [`crate::GuidelinePlan`] round-trip byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(IndexMap<String, AnswerValue>);

impl Answers {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an answer, replacing any previous value for the question
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(question_id.into(), value.into());
    }

    /// Raw value for a question, if answered
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    /// Canonical text form of an answer, if answered
    pub fn text(&self, question_id: &str) -> Option<String> {
        self.get(question_id).map(AnswerValue::to_text)
    }

    /// Whether the question has any answer at all
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Decode a multi-select answer into its option labels.
    ///
    /// Multi-select payloads are JSON arrays encoded inside a string. A
    /// missing answer, a non-string value, malformed JSON, or JSON that is
    /// not an array all yield `None` rather than an error. Non-string array
    /// elements are kept in canonical text form; nested containers are
    /// skipped.
    pub fn multi_select(&self, question_id: &str) -> Option<Vec<String>> {
        let raw = self.get(question_id)?.as_str()?;
        decode_multi_select(raw)
    }

    /// Iterate over `(question_id, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of answered questions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the answer set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, AnswerValue>> for Answers {
    fn from(map: IndexMap<String, AnswerValue>) -> Self {
        Self(map)
    }
}

impl<const N: usize> From<[(&str, AnswerValue); N]> for Answers {
    fn from(entries: [(&str, AnswerValue); N]) -> Self {
        let mut answers = Self::new();
        for (id, value) in entries {
            answers.insert(id, value);
        }
        answers
    }
}

/// Decode one JSON-encoded multi-select payload.
///
/// Returns `None` when the payload is not a JSON array; scalar elements are
/// rendered in canonical text form, container elements are dropped.
pub fn decode_multi_select(raw: &str) -> Option<Vec<String>> {
    let parsed: serde_json::Value = match serde_json::from_str(raw.trim()) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("multi-select payload is not valid JSON ({err}): {raw:?}");
            return None;
        }
    };

    let items = parsed.as_array()?;
    let mut labels = Vec::with_capacity(items.len());
    for item in items {
        match item {
            serde_json::Value::String(s) => labels.push(s.clone()),
            serde_json::Value::Number(n) => labels.push(n.to_string()),
            serde_json::Value::Bool(b) => labels.push(b.to_string()),
            other => {
                log::debug!("skipping non-scalar multi-select element: {other}");
            }
        }
    }
    Some(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_forms() {
        assert_eq!(AnswerValue::from(45).to_text(), "45");
        assert_eq!(AnswerValue::from(45.5).to_text(), "45.5");
        assert_eq!(AnswerValue::from(true).to_text(), "true");
        assert_eq!(AnswerValue::from("Low").to_text(), "Low");
    }

    #[test]
    fn multi_select_decodes_string_arrays() {
        let mut answers = Answers::new();
        answers.insert("cond.list", r#"["Asthma","Hypertension"]"#);

        assert_eq!(
            answers.multi_select("cond.list"),
            Some(vec!["Asthma".to_string(), "Hypertension".to_string()])
        );
    }

    #[test]
    fn multi_select_keeps_scalars_and_drops_containers() {
        assert_eq!(
            decode_multi_select(r#"[1, true, "x", {"nested": 1}, [2]]"#),
            Some(vec!["1".to_string(), "true".to_string(), "x".to_string()])
        );
    }

    #[test]
    fn multi_select_fails_closed() {
        let mut answers = Answers::new();
        answers.insert("a", "not json at all");
        answers.insert("b", r#"{"an":"object"}"#);
        answers.insert("c", 5);

        assert_eq!(answers.multi_select("a"), None);
        assert_eq!(answers.multi_select("b"), None);
        assert_eq!(answers.multi_select("c"), None);
        assert_eq!(answers.multi_select("missing"), None);
    }

    #[test]
    fn wire_shape_is_a_plain_map() {
        let json = r#"{"age": 45, "env.smoking_status": "Current smoker", "gen.tested": true}"#;
        let answers: Answers = serde_json::from_str(json).unwrap();

        assert_eq!(answers.get("age"), Some(&AnswerValue::Number(45.0)));
        assert_eq!(
            answers.text("env.smoking_status").as_deref(),
            Some("Current smoker")
        );
        assert_eq!(answers.get("gen.tested"), Some(&AnswerValue::Bool(true)));

        let round_trip = serde_json::to_string(&answers).unwrap();
        let reparsed: Answers = serde_json::from_str(&round_trip).unwrap();
        assert_eq!(answers, reparsed);
    }
}
