//! Coded values produced by standardization
//!
//! Free-text-like categorical answers are normalized into codes from a small
//! set of standard vocabularies. Values the vocabularies do not know are
//! never dropped: they standardize into the `other` bucket with the original
//! label preserved for audit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code used for answers the vocabulary tables cannot classify.
pub const OTHER_CODE: &str = "other";

/// The coding system a standardized code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeSystem {
    /// SNOMED CT clinical findings
    SnomedCt,
    /// HGNC gene identifiers
    Hgnc,
    /// ISCO-08 occupational classification
    Isco08,
    /// Internal codes: questionnaire keys, JEM exposure codes, and the
    /// `other` bucket
    Internal,
}

impl CodeSystem {
    /// Canonical URI of the code system
    pub fn uri(&self) -> &'static str {
        match self {
            Self::SnomedCt => "http://snomed.info/sct",
            Self::Hgnc => "http://www.genenames.org",
            Self::Isco08 => "https://www.ilo.org/public/english/bureau/stat/isco/isco08",
            Self::Internal => "urn:octofhir:hra:internal",
        }
    }
}

impl fmt::Display for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SnomedCt => "SNOMED CT",
            Self::Hgnc => "HGNC",
            Self::Isco08 => "ISCO-08",
            Self::Internal => "internal",
        };
        write!(f, "{name}")
    }
}

/// A standardized code together with the answer label it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coding {
    /// Coding system the code belongs to
    pub system: CodeSystem,
    /// Code within the system, or [`OTHER_CODE`]
    pub code: String,
    /// Original answer label, preserved verbatim
    pub source: String,
}

impl Coding {
    /// Create a coding
    pub fn new(system: CodeSystem, code: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            system,
            code: code.into(),
            source: source.into(),
        }
    }

    /// Create an `other`-bucket coding for an unmapped label
    pub fn other(source: impl Into<String>) -> Self {
        Self::new(CodeSystem::Internal, OTHER_CODE, source)
    }

    /// Whether this coding landed in the `other` bucket
    pub fn is_other(&self) -> bool {
        self.system == CodeSystem::Internal && self.code == OTHER_CODE
    }
}

impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.system, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_bucket_keeps_source_label() {
        let coding = Coding::other("Some rare condition");
        assert!(coding.is_other());
        assert_eq!(coding.code, OTHER_CODE);
        assert_eq!(coding.source, "Some rare condition");
    }

    #[test]
    fn mapped_coding_is_not_other() {
        let coding = Coding::new(CodeSystem::SnomedCt, "24526004", "Inflammatory bowel disease");
        assert!(!coding.is_other());
        assert_eq!(coding.to_string(), "SNOMED CT|24526004");
    }
}
