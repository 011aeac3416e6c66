//! Health risk assessment command-line interface

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use octofhir_hra::cli::{assess, output, validate, vars};
use std::path::PathBuf;

/// Health risk assessment command-line tool
#[derive(Parser)]
#[command(name = "hra")]
#[command(author, version, about = "Health risk assessment pipeline tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full assessment pipeline over an answers file
    Assess {
        /// Answers document (flat JSON object of question id to answer)
        answers: PathBuf,

        /// Rule-set locale
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Reference date, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Vocabulary document replacing the built-in tables
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Thresholds document replacing the baseline policy
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Rule-set overrides (locale=path)
        #[arg(short = 'R', long = "rules")]
        rules: Vec<String>,
    },

    /// Standardize an answers file and print its derived variables
    Vars {
        /// Answers document (flat JSON object of question id to answer)
        answers: PathBuf,

        /// Reference date, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Vocabulary document replacing the built-in tables
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Thresholds document replacing the baseline policy
        #[arg(long)]
        thresholds: Option<PathBuf>,
    },

    /// Validate configuration documents without running an assessment
    Validate {
        /// Vocabulary document to check
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Thresholds document to check
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Rule-set documents to check (locale=path)
        #[arg(short = 'R', long = "rules")]
        rules: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Set up color output
    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::Assess {
            answers,
            locale,
            today,
            vocabulary,
            thresholds,
            rules,
        } => {
            let config = assess::AssessConfig {
                answers,
                locale,
                today,
                vocabulary,
                thresholds,
                rules,
                format: cli.format.clone(),
                output_file: cli.output.clone(),
                verbose: cli.verbose,
            };
            assess::assess(config)
        }

        Commands::Vars {
            answers,
            today,
            vocabulary,
            thresholds,
        } => {
            let config = vars::VarsConfig {
                answers,
                today,
                vocabulary,
                thresholds,
                format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            vars::vars(config)
        }

        Commands::Validate {
            vocabulary,
            thresholds,
            rules,
        } => {
            let config = validate::ValidateConfig {
                vocabulary,
                thresholds,
                rules,
                verbose: cli.verbose,
            };
            validate::validate(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
