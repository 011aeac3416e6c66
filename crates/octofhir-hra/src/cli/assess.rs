//! Assess command implementation

use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use super::loader;
use super::output::{self, OutputFormat};

/// Configuration for the assess command
pub struct AssessConfig {
    pub answers: PathBuf,
    pub locale: String,
    pub today: Option<NaiveDate>,
    pub vocabulary: Option<PathBuf>,
    pub thresholds: Option<PathBuf>,
    pub rules: Vec<String>,
    pub format: Option<String>,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
}

/// Run the full pipeline over an answers file and print the report
pub fn assess(config: AssessConfig) -> Result<()> {
    let answers = loader::read_answers(&config.answers)?;
    let mut pipeline = loader::build_pipeline(
        config.vocabulary.as_deref(),
        config.thresholds.as_deref(),
        &config.rules,
    )?;
    if let Some(today) = config.today {
        pipeline = pipeline.with_today(today);
    }

    if config.verbose {
        eprintln!(
            "assessing {} answer(s) against locale {:?}",
            answers.len(),
            config.locale
        );
    }

    let report = pipeline.run(&answers, &config.locale);

    let format = config
        .format
        .as_deref()
        .map_or(OutputFormat::JsonPretty, OutputFormat::parse);
    match format {
        OutputFormat::Table => {
            // The table view shows the plan only; derived details stay in the JSON formats
            output::write_output(
                &output::plan_table(&report.plan),
                config.output_file.as_deref(),
            )
        }
        other => {
            let value = serde_json::to_value(&report)?;
            output::print_output(&value, other, config.output_file.as_deref())
        }
    }
}
