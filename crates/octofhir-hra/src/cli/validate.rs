//! Validate command implementation
//!
//! Parses configuration documents without running an assessment, so broken
//! vocabulary, thresholds, or rule-set files are caught before deployment.

use anyhow::{Result, bail};
use colored::Colorize;
use std::path::PathBuf;

use octofhir_hra_derived::ThresholdsConfig;
use octofhir_hra_guidelines::GuidelineRegistry;
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Condition, PlanConfig};

use super::loader;
use super::output;

/// Configuration for the validate command
pub struct ValidateConfig {
    pub vocabulary: Option<PathBuf>,
    pub thresholds: Option<PathBuf>,
    pub rules: Vec<String>,
    pub verbose: bool,
}

/// Check that every named configuration document parses
pub fn validate(config: ValidateConfig) -> Result<()> {
    if config.vocabulary.is_none() && config.thresholds.is_none() && config.rules.is_empty() {
        bail!("no configuration documents given; pass --vocabulary, --thresholds, or --rules");
    }

    let mut checked = 0usize;
    let mut failures = 0usize;

    if let Some(path) = &config.vocabulary {
        checked += 1;
        match TerminologyRegistry::from_json_file(path) {
            Ok(registry) => println!(
                "{} {} (vocabulary {})",
                "ok".green().bold(),
                path.display(),
                registry.version()
            ),
            Err(err) => {
                failures += 1;
                println!("{} {}: {err}", "failed".red().bold(), path.display());
            }
        }
    }

    if let Some(path) = &config.thresholds {
        checked += 1;
        match ThresholdsConfig::from_json_file(path) {
            Ok(thresholds) => println!(
                "{} {} (thresholds {})",
                "ok".green().bold(),
                path.display(),
                thresholds.version
            ),
            Err(err) => {
                failures += 1;
                println!("{} {}: {err}", "failed".red().bold(), path.display());
            }
        }
    }

    for raw in &config.rules {
        checked += 1;
        let (locale, path) = loader::parse_rules_override(raw)?;
        let registry = GuidelineRegistry::new();
        match registry.load_json_file(locale, path) {
            Ok(()) => {
                let config = registry.config_for(locale).unwrap_or_default();
                println!(
                    "{} {} ({locale}: {} rule(s))",
                    "ok".green().bold(),
                    path.display(),
                    config.rules.len()
                );
                for operator in unrecognized_operators(&config) {
                    println!(
                        "{}",
                        output::format_warning(&format!(
                            "operator {operator:?} is not recognized and always evaluates false"
                        ))
                    );
                }
            }
            Err(err) => {
                failures += 1;
                println!("{} {}: {err}", "failed".red().bold(), path.display());
            }
        }
    }

    if config.verbose {
        eprintln!("checked {checked} document(s)");
    }
    if failures > 0 {
        bail!("{failures} of {checked} document(s) failed validation");
    }
    println!(
        "{}",
        output::format_success("all configuration documents parse")
    );
    Ok(())
}

/// Operator spellings in a rule set that evaluation will fail closed on
fn unrecognized_operators(config: &PlanConfig) -> Vec<String> {
    fn walk(condition: &Condition, found: &mut Vec<String>) {
        match condition {
            Condition::And { and } => and.iter().for_each(|child| walk(child, found)),
            Condition::Or { or } => or.iter().for_each(|child| walk(child, found)),
            Condition::Leaf(leaf) => {
                if let Some(operator) = &leaf.operator {
                    let spelling = operator.as_str();
                    if !operator.is_recognized() && !found.iter().any(|seen| seen == spelling) {
                        found.push(spelling.to_string());
                    }
                }
            }
        }
    }

    let mut found = Vec::new();
    for rule in &config.rules {
        for condition in &rule.conditions {
            walk(condition, &mut found);
        }
    }
    found
}
