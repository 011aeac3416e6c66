//! Vocabulary registry
//!
//! Process-wide lookup tables for the standardization service. The registry
//! is loaded once at startup (built-in tables or a deployment-specific JSON
//! document) and read-only afterwards; lookups are total and resolve unknown
//! labels to the `other` bucket instead of failing.

use crate::error::TerminologyError;
use crate::normalize::lookup_key;
use crate::tables::{self, BUILTIN_VOCABULARY_JSON, VocabularyTables};
use indexmap::IndexMap;
use octofhir_hra_types::{CodeSystem, Coding, SexAtBirth};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use smallvec::{SmallVec, smallvec};
use std::sync::Arc;

/// Lazily initialized registry over the built-in bilingual tables
static BUILTIN_REGISTRY: Lazy<Result<TerminologyRegistry, TerminologyError>> =
    Lazy::new(|| TerminologyRegistry::from_json(BUILTIN_VOCABULARY_JSON));

/// Gene codings produced for one selection label.
///
/// Single genes resolve to one coding; panel labels expand to the member
/// set. Five covers the largest built-in panel without spilling.
pub type GeneCodings = SmallVec<[Coding; 5]>;

/// A label resolved against a keyed concept table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConcept {
    /// Questionnaire key the label maps to (`None` for the `other` bucket)
    pub key: Option<String>,
    /// Standardized coding, `source` preserving the original label
    pub coding: Coding,
}

impl ResolvedConcept {
    fn mapped(key: &str, system: CodeSystem, code: &str, source: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            coding: Coding::new(system, code, source),
        }
    }

    fn other(source: &str) -> Self {
        Self {
            key: None,
            coding: Coding::other(source),
        }
    }

    /// Whether the label resolved to the `other` bucket
    pub fn is_other(&self) -> bool {
        self.coding.is_other()
    }
}

/// Normalized-label indices built once per loaded document.
#[derive(Debug, Default)]
struct LookupIndex {
    /// Conditions and cancer types share one lookup surface
    illnesses: IndexMap<String, (String, String)>,
    infections: IndexMap<String, (String, String)>,
    genes: IndexMap<String, String>,
    panels: IndexMap<String, Vec<(String, String)>>,
    screenings: IndexMap<String, String>,
    immunizations: IndexMap<String, String>,
    exposures: IndexMap<String, String>,
    occupations: IndexMap<String, String>,
    radon_bands: IndexMap<String, String>,
    statuses: IndexMap<String, String>,
    sex: IndexMap<String, SexAtBirth>,
}

fn index_label<T: PartialEq>(
    map: &mut IndexMap<String, T>,
    table: &str,
    label: &str,
    value: T,
) -> Result<(), TerminologyError> {
    let key = lookup_key(label);
    if key.is_empty() {
        return Err(TerminologyError::invalid(format!("{table}: empty label")));
    }
    match map.get(&key) {
        Some(existing) if *existing != value => Err(TerminologyError::invalid(format!(
            "{table}: label {label:?} maps to conflicting entries"
        ))),
        _ => {
            map.insert(key, value);
            Ok(())
        }
    }
}

impl LookupIndex {
    fn build(tables: &VocabularyTables) -> Result<Self, TerminologyError> {
        let mut index = Self::default();

        for entry in tables.conditions.iter().chain(&tables.cancer_types) {
            for label in &entry.labels {
                index_label(
                    &mut index.illnesses,
                    "conditions",
                    label,
                    (entry.key.clone(), entry.code.clone()),
                )?;
            }
        }
        for entry in &tables.infections {
            for label in &entry.labels {
                index_label(
                    &mut index.infections,
                    "infections",
                    label,
                    (entry.key.clone(), entry.code.clone()),
                )?;
            }
        }
        for gene in &tables.genes {
            index_label(
                &mut index.genes,
                "genes",
                &gene.symbol,
                gene.hgnc_id.clone(),
            )?;
        }
        for panel in &tables.gene_panels {
            let mut members = Vec::with_capacity(panel.genes.len());
            for symbol in &panel.genes {
                let hgnc = index.genes.get(&lookup_key(symbol)).ok_or_else(|| {
                    TerminologyError::invalid(format!(
                        "gene panel references unknown symbol {symbol:?}"
                    ))
                })?;
                members.push((symbol.clone(), hgnc.clone()));
            }
            for label in &panel.labels {
                index_label(&mut index.panels, "gene panels", label, members.clone())?;
            }
        }
        for entry in &tables.screenings {
            for label in &entry.labels {
                index_label(&mut index.screenings, "screenings", label, entry.key.clone())?;
            }
        }
        for entry in &tables.immunizations {
            for label in &entry.labels {
                index_label(
                    &mut index.immunizations,
                    "immunizations",
                    label,
                    entry.key.clone(),
                )?;
            }
        }
        for entry in &tables.exposures {
            for label in &entry.labels {
                index_label(&mut index.exposures, "exposures", label, entry.key.clone())?;
            }
        }
        for entry in &tables.occupations {
            for label in &entry.labels {
                index_label(
                    &mut index.occupations,
                    "occupations",
                    label,
                    entry.code.clone(),
                )?;
            }
        }
        for band in &tables.radon_bands {
            for label in &band.labels {
                index_label(
                    &mut index.radon_bands,
                    "radon bands",
                    label,
                    band.canonical.clone(),
                )?;
            }
        }
        for entry in &tables.illness_statuses {
            for label in &entry.labels {
                index_label(&mut index.statuses, "statuses", label, entry.key.clone())?;
            }
        }
        for label in &tables.sex_at_birth.female {
            index_label(&mut index.sex, "sex at birth", label, SexAtBirth::Female)?;
        }
        for label in &tables.sex_at_birth.male {
            index_label(&mut index.sex, "sex at birth", label, SexAtBirth::Male)?;
        }

        Ok(index)
    }
}

#[derive(Debug)]
struct Inner {
    tables: VocabularyTables,
    index: LookupIndex,
}

/// Vocabulary registry shared across the pipeline.
#[derive(Debug, Clone)]
pub struct TerminologyRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl TerminologyRegistry {
    /// Create a registry from parsed vocabulary tables
    pub fn new(tables: VocabularyTables) -> Result<Self, TerminologyError> {
        let index = LookupIndex::build(&tables)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Inner { tables, index })),
        })
    }

    /// Registry over the built-in bilingual tables
    pub fn builtin() -> Result<Self, TerminologyError> {
        BUILTIN_REGISTRY.clone()
    }

    /// Load vocabulary tables from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TerminologyError> {
        let tables = tables::parse_json(json).map_err(|e| TerminologyError::parse(e.to_string()))?;
        Self::new(tables)
    }

    /// Load vocabulary tables from a JSON file at startup
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, TerminologyError> {
        let json = std::fs::read_to_string(path).map_err(|e| TerminologyError::io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Vocabulary document version
    pub fn version(&self) -> String {
        self.inner.read().tables.version.clone()
    }

    /// Resolve a chronic-condition or cancer-type label to SNOMED CT
    pub fn illness(&self, label: &str) -> ResolvedConcept {
        let inner = self.inner.read();
        match inner.index.illnesses.get(&lookup_key(label)) {
            Some((key, code)) => ResolvedConcept::mapped(key, CodeSystem::SnomedCt, code, label),
            None => {
                log::debug!("unmapped illness label: {label:?}");
                ResolvedConcept::other(label)
            }
        }
    }

    /// Resolve a tracked-infection label to SNOMED CT
    pub fn infection(&self, label: &str) -> ResolvedConcept {
        let inner = self.inner.read();
        match inner.index.infections.get(&lookup_key(label)) {
            Some((key, code)) => ResolvedConcept::mapped(key, CodeSystem::SnomedCt, code, label),
            None => {
                log::debug!("unmapped infection label: {label:?}");
                ResolvedConcept::other(label)
            }
        }
    }

    /// Resolve one gene selection label to HGNC codings.
    ///
    /// A panel label expands to its member genes, so a panel selection and
    /// the equivalent individual selections standardize identically. Each
    /// coding's `source` keeps the selected label.
    pub fn genes_for(&self, label: &str) -> GeneCodings {
        let inner = self.inner.read();
        let key = lookup_key(label);
        if let Some(members) = inner.index.panels.get(&key) {
            return members
                .iter()
                .map(|(_, hgnc)| Coding::new(CodeSystem::Hgnc, hgnc, label))
                .collect();
        }
        if let Some(hgnc) = inner.index.genes.get(&key) {
            return smallvec![Coding::new(CodeSystem::Hgnc, hgnc, label)];
        }
        log::debug!("unmapped gene selection: {label:?}");
        smallvec![Coding::other(label)]
    }

    /// Resolve a screening-test label to its screening kind key
    pub fn screening_kind(&self, label: &str) -> Option<String> {
        self.inner
            .read()
            .index
            .screenings
            .get(&lookup_key(label))
            .cloned()
    }

    /// Resolve an immunization label to a coding
    pub fn immunization(&self, label: &str) -> Coding {
        let inner = self.inner.read();
        match inner.index.immunizations.get(&lookup_key(label)) {
            Some(key) => Coding::new(CodeSystem::Internal, key, label),
            None => {
                log::debug!("unmapped immunization label: {label:?}");
                Coding::other(label)
            }
        }
    }

    /// Resolve an environmental-exposure label to a coding
    pub fn exposure(&self, label: &str) -> Coding {
        let inner = self.inner.read();
        match inner.index.exposures.get(&lookup_key(label)) {
            Some(code) => Coding::new(CodeSystem::Internal, code, label),
            None => {
                log::debug!("unmapped exposure label: {label:?}");
                Coding::other(label)
            }
        }
    }

    /// Resolve a job title to its ISCO-08 coding
    pub fn occupation(&self, label: &str) -> Coding {
        let inner = self.inner.read();
        match inner.index.occupations.get(&lookup_key(label)) {
            Some(code) => Coding::new(CodeSystem::Isco08, code, label),
            None => {
                log::debug!("unmapped job title: {label:?}");
                Coding::other(label)
            }
        }
    }

    /// Exposure codes the job-exposure matrix associates with an ISCO-08 code
    pub fn job_exposures(&self, isco_code: &str) -> Vec<String> {
        self.inner
            .read()
            .tables
            .job_exposure_matrix
            .get(isco_code)
            .cloned()
            .unwrap_or_default()
    }

    /// Canonical band label for a radon level answer, if recognized
    pub fn radon_band(&self, label: &str) -> Option<String> {
        self.inner
            .read()
            .index
            .radon_bands
            .get(&lookup_key(label))
            .cloned()
    }

    /// Locale-neutral status key for an illness status label, if recognized
    pub fn illness_status(&self, label: &str) -> Option<String> {
        self.inner
            .read()
            .index
            .statuses
            .get(&lookup_key(label))
            .cloned()
    }

    /// Normalize a sex-at-birth answer label
    pub fn sex_at_birth(&self, label: &str) -> SexAtBirth {
        let inner = self.inner.read();
        match inner.index.sex.get(&lookup_key(label)) {
            Some(sex) => *sex,
            None => {
                log::debug!("unmapped sex at birth label: {label:?}");
                SexAtBirth::Other
            }
        }
    }
}
