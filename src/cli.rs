//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::header::DEFAULT_COLUMN;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::report::{run_report, ReportConfig};
use crate::flows::top::DEFAULT_TOP;

/// maxtweeter - report the authors with the most posts in a CSV file.
#[derive(Parser, Debug)]
#[command(name = "maxtweeter")]
#[command(
    author,
    version,
    about,
    long_about = r#"maxtweeter reads a CSV export of posts and prints the authors with the
most rows, highest count first, one `<author>: <count>` line each.

The first line of FILE is the header. Fields are split on every comma; quoted
fields are not supported. Rows with an empty author are ignored.

Examples:
    maxtweeter tweets.csv
    maxtweeter tweets.csv --top 3
    maxtweeter tweets.csv --column user --format json --pretty
"#
)]
pub struct Cli {
    /// CSV file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Header column that holds the author.
    #[arg(
        long,
        default_value = DEFAULT_COLUMN,
        value_name = "NAME",
        long_help = "Header column that holds the author.\n\n\
The header must contain a field exactly equal to NAME; a prefix is not enough."
    )]
    pub column: String,

    /// Number of authors to report.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP, value_name = "K")]
    pub top: usize,

    /// Output format (text/json/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): `<author>: <count>` per line\n\
- json: a single JSON array of {author, count}\n\
- jsonl: one JSON object per line"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Print a one-line run summary to stderr.
    #[arg(long)]
    pub summary: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    pub fn report_config(&self) -> Result<ReportConfig> {
        let format: OutputFormat = self.format.parse().map_err(anyhow::Error::msg)?;

        Ok(ReportConfig {
            column: self.column.clone(),
            top: self.top,
            summary: self.summary,
            render: RenderConfig::with_pretty(format, self.pretty),
            ..ReportConfig::new(&self.file)
        })
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.report_config()?;
    tracing::debug!(?config, "starting report");
    run_report(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["maxtweeter", "tweets.csv"]).unwrap();
        let config = cli.report_config().unwrap();

        assert_eq!(config.path, PathBuf::from("tweets.csv"));
        assert_eq!(config.column, "name");
        assert_eq!(config.top, 10);
        assert_eq!(config.render.format, OutputFormat::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_requires_file() {
        assert!(Cli::try_parse_from(["maxtweeter"]).is_err());
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["maxtweeter", "a.csv", "b.csv"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "maxtweeter",
            "tweets.csv",
            "--column",
            "user",
            "-n",
            "3",
            "--format",
            "jsonl",
            "--pretty",
            "-v",
        ])
        .unwrap();
        let config = cli.report_config().unwrap();

        assert_eq!(config.column, "user");
        assert_eq!(config.top, 3);
        assert_eq!(config.render.format, OutputFormat::Jsonl);
        assert!(config.render.pretty);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_quiet_logs_errors_only() {
        let cli = Cli::try_parse_from(["maxtweeter", "tweets.csv", "-q"]).unwrap();
        assert_eq!(cli.log_level(), "error");

        let cli = Cli::try_parse_from(["maxtweeter", "tweets.csv", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_unknown_format() {
        let cli = Cli::try_parse_from(["maxtweeter", "t.csv", "--format", "xml"]).unwrap();
        assert!(cli.report_config().is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["maxtweeter", "t.csv", "-q", "-v"]).is_err());
    }
}
