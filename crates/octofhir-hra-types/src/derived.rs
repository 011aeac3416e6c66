//! Derived clinical variables
//!
//! Derived variables are secondary facts computed from the standardized
//! record, never asked directly. They live in a flat, namespaced map
//! (`env.radon_high`, `gen.lynch_syndrome`, `core.age`) that the guideline
//! engine overlays onto the raw answers when resolving rule conditions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DerivedValue {
    /// Boolean flag (e.g. `env.radon_high`)
    Bool(bool),
    /// Numeric value (e.g. `core.age`)
    Number(f64),
    /// Categorical value (e.g. `sex.partner_risk`)
    Text(String),
}

impl DerivedValue {
    /// Canonical text form, matching [`crate::AnswerValue::to_text`]
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for DerivedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for DerivedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for DerivedValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for DerivedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DerivedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The derived-variable map for one standardized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedVariables(IndexMap<String, DerivedValue>);

impl DerivedVariables {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a derived variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<DerivedValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&DerivedValue> {
        self.0.get(key)
    }

    /// True iff the key holds boolean `true`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(DerivedValue::Bool(true)))
    }

    /// Numeric value for a key, if present and numeric
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            DerivedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text value for a key, if present and categorical
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            DerivedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DerivedValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of derived variables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let mut vars = DerivedVariables::new();
        vars.set("env.radon_high", true);
        vars.set("core.age", 45);
        vars.set("sex.partner_risk", "high");

        assert!(vars.flag("env.radon_high"));
        assert!(!vars.flag("core.age"));
        assert!(!vars.flag("missing"));
        assert_eq!(vars.number("core.age"), Some(45.0));
        assert_eq!(vars.text("sex.partner_risk"), Some("high"));
    }

    #[test]
    fn serializes_as_a_flat_map() {
        let mut vars = DerivedVariables::new();
        vars.set("gen.lynch_syndrome", true);
        vars.set("core.age", 45);

        let json = serde_json::to_string(&vars).unwrap();
        assert_eq!(json, r#"{"gen.lynch_syndrome":true,"core.age":45.0}"#);
    }
}
