//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a resolved question
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Only the question route path
    Route,
    /// User, score and route details
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for eduquiz
#[derive(Parser, Debug)]
#[command(name = "eduquiz")]
#[command(author, version, about = "Pick a random MCQ question for a level/track/subject")]
#[command(long_about = r#"
eduquiz resolves an education level, optional track, and subject to a
question set in the document store and picks one question at random.

Only A-Level takes a track (H1/H2/H3); the subject must belong to the
chosen level. The result is the route of the picked question, e.g.
/question/a-levelh2physics/q7.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./eduquiz.toml      Project-level config
3. ~/.config/eduquiz/config.toml   Global config

Example:
  eduquiz --level PSLE --subject Math
  eduquiz -l A-Level -t H2 -s Physics --data seed.toml
  eduquiz --choices
"#)]
pub struct Cli {
    /// Education level (PSLE, O-Level, A-Level)
    #[arg(short, long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// A-Level track (H1, H2, H3); only valid together with A-Level
    #[arg(short, long, value_name = "TRACK")]
    pub track: Option<String>,

    /// Subject within the chosen level
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: Option<String>,

    /// List the available levels, tracks and subjects, then exit
    #[arg(long)]
    pub choices: bool,

    /// Keep running and print live score updates
    #[arg(short, long)]
    pub watch: bool,

    /// Seed data file for the document store
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Sign in as this email (overrides the config file)
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// RNG seed for a reproducible pick
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "route")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
