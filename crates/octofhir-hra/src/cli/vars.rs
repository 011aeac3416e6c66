//! Vars command implementation
//!
//! Standardizes an answers file and prints the derived-variable map without
//! generating a plan. Useful when authoring rule sets against real inputs.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use super::loader;
use super::output::{self, OutputFormat};

/// Configuration for the vars command
pub struct VarsConfig {
    pub answers: PathBuf,
    pub today: Option<NaiveDate>,
    pub vocabulary: Option<PathBuf>,
    pub thresholds: Option<PathBuf>,
    pub format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Print the derived variables computed for an answers file
pub fn vars(config: VarsConfig) -> Result<()> {
    let answers = loader::read_answers(&config.answers)?;
    let mut pipeline = loader::build_pipeline(
        config.vocabulary.as_deref(),
        config.thresholds.as_deref(),
        &[],
    )?;
    if let Some(today) = config.today {
        pipeline = pipeline.with_today(today);
    }

    let record = pipeline.standardize(&answers);
    let derived = pipeline.calculate_all(&record);

    let format = config
        .format
        .as_deref()
        .map_or(OutputFormat::Table, OutputFormat::parse);
    match format {
        OutputFormat::Table => output::write_output(
            &output::vars_table(&derived),
            config.output_file.as_deref(),
        ),
        other => {
            let value = serde_json::to_value(&derived)?;
            output::print_output(&value, other, config.output_file.as_deref())
        }
    }
}
