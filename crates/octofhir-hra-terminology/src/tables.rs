//! Vocabulary table schema
//!
//! The tables are plain serde documents so deployments can ship their own
//! vocabularies as JSON. The built-in document is bilingual (English and
//! Polish questionnaire labels) and embedded at compile time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in bilingual vocabulary document (embedded at compile time)
pub const BUILTIN_VOCABULARY_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/vocabulary.json"
));

/// A concept with a questionnaire key and a SNOMED CT code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    /// Questionnaire key (e.g. `ibd`), used in per-item answer ids
    pub key: String,
    /// SNOMED CT concept id
    pub code: String,
    /// Labels this concept is selectable under, across locales
    pub labels: Vec<String>,
}

/// A gene symbol with its HGNC id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneEntry {
    /// HGNC-approved symbol (e.g. `MLH1`)
    pub symbol: String,
    /// HGNC id (e.g. `HGNC:7127`)
    pub hgnc_id: String,
}

/// An umbrella gene-panel label and the member symbols it bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenePanelEntry {
    /// Panel labels across locales
    pub labels: Vec<String>,
    /// Member gene symbols, each of which must appear in `genes`
    pub genes: Vec<String>,
}

/// A concept with an internal key only (no external code system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedEntry {
    /// Internal code / questionnaire key
    pub key: String,
    /// Labels across locales
    pub labels: Vec<String>,
}

/// A job title mapped to its ISCO-08 classification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationEntry {
    /// ISCO-08 unit-group code (e.g. `8111`)
    pub code: String,
    /// Job-title labels across locales
    pub labels: Vec<String>,
}

/// A categorical band with a canonical label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandEntry {
    /// Canonical band label stored in the standardized record
    pub canonical: String,
    /// Labels across locales that normalize to this band
    pub labels: Vec<String>,
}

/// Sex-at-birth label lists per normalized value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexAtBirthLabels {
    #[serde(default)]
    pub female: Vec<String>,
    #[serde(default)]
    pub male: Vec<String>,
}

/// The complete vocabulary document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyTables {
    /// Vocabulary document version, reported for audit
    #[serde(default)]
    pub version: String,
    /// Chronic conditions (questionnaire key + SNOMED CT)
    #[serde(default)]
    pub conditions: Vec<ConceptEntry>,
    /// Cancer types (questionnaire key + SNOMED CT)
    #[serde(default)]
    pub cancer_types: Vec<ConceptEntry>,
    /// Tracked infections (questionnaire key + SNOMED CT)
    #[serde(default)]
    pub infections: Vec<ConceptEntry>,
    /// Gene symbols with HGNC ids
    #[serde(default)]
    pub genes: Vec<GeneEntry>,
    /// Umbrella panel labels expanded to member genes
    #[serde(default)]
    pub gene_panels: Vec<GenePanelEntry>,
    /// Screening-test labels to screening kind keys
    #[serde(default)]
    pub screenings: Vec<KeyedEntry>,
    /// Immunization labels to internal keys
    #[serde(default)]
    pub immunizations: Vec<KeyedEntry>,
    /// Environmental exposure labels to exposure codes
    #[serde(default)]
    pub exposures: Vec<KeyedEntry>,
    /// Job titles to ISCO-08 codes
    #[serde(default)]
    pub occupations: Vec<OccupationEntry>,
    /// ISCO-08 code to the exposure codes associated with that occupation
    #[serde(default)]
    pub job_exposure_matrix: IndexMap<String, Vec<String>>,
    /// Radon level band labels to canonical band labels
    #[serde(default)]
    pub radon_bands: Vec<BandEntry>,
    /// Illness / infection status labels to locale-neutral status keys
    #[serde(default)]
    pub illness_statuses: Vec<KeyedEntry>,
    /// Sex-at-birth label normalization
    #[serde(default)]
    pub sex_at_birth: SexAtBirthLabels,
}

/// Parse a vocabulary document from JSON.
pub fn parse_json(json: &str) -> Result<VocabularyTables, serde_json::Error> {
    serde_json::from_str(json)
}
