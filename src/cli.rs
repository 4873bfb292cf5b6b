use std::path::PathBuf;

use clap::Parser;

use crate::application::dto::OutputFormat;

/// Diff Gradle dependency reports and detect forced version updates
#[derive(Parser, Debug)]
#[command(name = "gradle-depdiff")]
#[command(version = "0.2.0")]
#[command(about = "Diff Gradle dependency reports and detect forced version updates", long_about = None)]
pub struct Args {
    /// Path to the new (current) dependency report
    #[arg(value_name = "NEW_REPORT")]
    pub new_report: PathBuf,

    /// Path to the old (baseline) report; enables change detection
    #[arg(short, long, value_name = "PATH")]
    pub old: Option<PathBuf>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exclude coordinates matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "org.example:*" -e "*:annotations"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Only render subtrees matching the query
    #[arg(long, value_name = "QUERY")]
    pub filter: Option<String>,

    /// Only render subtrees containing a change (needs a baseline report)
    #[arg(long)]
    pub changes_only: bool,

    /// Exit with code 1 when forced version updates are detected
    #[arg(long)]
    pub fail_on_forced: bool,

    /// Config file path (defaults to discovering gradle-depdiff.config.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
