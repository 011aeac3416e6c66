//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::Path;

#[cfg(feature = "cli")]
use tabled::{Table, Tabled, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    Table,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "json-pretty" => Self::JsonPretty,
            "table" => Self::Table,
            _ => Self::JsonPretty, // default
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    let enable = match mode.to_lowercase().as_str() {
        "always" => true,
        "never" => false,
        _ => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enable);
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {error:#}", "Error:".red().bold())
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {warning}", "Warning:".yellow().bold())
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {message}", "Success:".green().bold())
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("failed to write output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("output written to {}", path.display()))
        );
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("failed to serialize JSON")
    }
}

/// Render a plan as a category/action table
#[cfg(feature = "cli")]
pub fn plan_table(plan: &octofhir_hra_types::GuidelinePlan) -> String {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Category")]
        category: &'static str,
        #[tabled(rename = "Action")]
        action: String,
    }

    let mut rows = Vec::new();
    for action in &plan.screenings {
        rows.push(Row {
            category: "screenings",
            action: action.clone(),
        });
    }
    for action in &plan.lifestyle {
        rows.push(Row {
            category: "lifestyle",
            action: action.clone(),
        });
    }
    for action in &plan.topics_for_doctor {
        rows.push(Row {
            category: "topicsForDoctor",
            action: action.clone(),
        });
    }

    if rows.is_empty() {
        return "(no matched actions)".to_string();
    }
    Table::new(rows).with(Style::modern()).to_string()
}

/// Render derived variables as a key/value table
#[cfg(feature = "cli")]
pub fn vars_table(derived: &octofhir_hra_types::DerivedVariables) -> String {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Variable")]
        variable: String,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows: Vec<Row> = derived
        .iter()
        .map(|(key, value)| Row {
            variable: key.to_string(),
            value: value.to_text(),
        })
        .collect();

    if rows.is_empty() {
        return "(no derived variables)".to_string();
    }
    Table::new(rows).with(Style::modern()).to_string()
}

/// Print output in the specified format
pub fn print_output(value: &Value, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let content = match format {
        OutputFormat::Json => format_json(value, false)?,
        _ => format_json(value, true)?,
    };
    write_output(&content, output_file)
}
