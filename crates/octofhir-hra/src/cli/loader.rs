//! Input and configuration loading shared by the CLI commands

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use octofhir_hra_derived::ThresholdsConfig;
use octofhir_hra_guidelines::GuidelineRegistry;
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::Answers;

use crate::assessment::Assessment;

/// Read an answers document (a flat JSON object) from a file
pub fn read_answers(path: &Path) -> Result<Answers> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("invalid answers document: {}", path.display()))
}

/// Split a `locale=path` rule-set argument
pub fn parse_rules_override(raw: &str) -> Result<(&str, &Path)> {
    match raw.split_once('=') {
        Some((locale, path)) if !locale.is_empty() && !path.is_empty() => {
            Ok((locale, Path::new(path)))
        }
        _ => bail!("rule-set override must be locale=path, got {raw:?}"),
    }
}

/// Assemble a pipeline from the built-in configuration plus any overrides
pub fn build_pipeline(
    vocabulary: Option<&Path>,
    thresholds: Option<&Path>,
    rules: &[String],
) -> Result<Assessment> {
    let terminology = match vocabulary {
        Some(path) => TerminologyRegistry::from_json_file(path)
            .with_context(|| format!("failed to load vocabulary: {}", path.display()))?,
        None => TerminologyRegistry::builtin().context("built-in vocabulary failed to load")?,
    };

    let thresholds = match thresholds {
        Some(path) => ThresholdsConfig::from_json_file(path)
            .with_context(|| format!("failed to load thresholds: {}", path.display()))?,
        None => ThresholdsConfig::default(),
    };

    // Overrides go into a fresh registry so the shared built-in handle stays untouched
    let builtin = GuidelineRegistry::builtin().context("built-in rule sets failed to load")?;
    let guidelines = GuidelineRegistry::new();
    for locale in builtin.locales() {
        if let Some(config) = builtin.config_for(&locale) {
            guidelines.insert(locale, config);
        }
    }
    for raw in rules {
        let (locale, path) = parse_rules_override(raw)?;
        guidelines
            .load_json_file(locale, path)
            .with_context(|| format!("failed to load rule set: {}", path.display()))?;
    }

    Ok(Assessment::with_config(terminology, thresholds, guidelines))
}
