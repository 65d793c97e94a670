//! Hintpane CLI: presents linter results and checks for new releases.
//!
//! Provides `hintpane report` for ordering and rendering an analyzer's
//! findings, and `hintpane check-update` for comparing the running version
//! against the latest release.

#![warn(missing_docs)]

mod logging;
mod report;
mod settings;
mod update;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use hintpane_diagnostics::OutputFormat;

/// Hintpane, a linter result presenter.
#[derive(Parser, Debug)]
#[command(name = "hintpane", version, about = "Linter result reporter")]
pub struct Cli {
    /// Suppress status output, and skip reports that have no errors or warnings.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `hintpane.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Order and render analyzer results.
    Report(ReportArgs),
    /// Check whether a newer release is available.
    CheckUpdate(CheckUpdateArgs),
}

/// Arguments for the `hintpane report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// File holding a JSON array of analyzer results. Reads stdin if omitted or `-`.
    pub input: Option<PathBuf>,

    /// Emit findings in analyzer order instead of sorting by position.
    #[arg(long)]
    pub no_sort: bool,

    /// Output format for the report.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Arguments for the `hintpane check-update` subcommand.
#[derive(Parser, Debug)]
pub struct CheckUpdateArgs {
    /// The running version. Defaults to this binary's version.
    #[arg(long)]
    pub current: Option<String>,

    /// The latest release version, if already known.
    #[arg(long, conflicts_with = "manifest")]
    pub latest: Option<String>,

    /// Path to a release manifest naming the latest version.
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Single-line JSON array.
    Json,
    /// Human-readable listing.
    Text,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Text => OutputFormat::Text,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress status output and clean reports.
    pub quiet: bool,
    /// Whether to log at debug level.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    if let Err(e) = logging::init(&global) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let result = match cli.command {
        Command::Report(ref args) => report::run(args, &global),
        Command::CheckUpdate(ref args) => update::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_report_default() {
        let cli = Cli::parse_from(["hintpane", "report"]);
        match cli.command {
            Command::Report(ref args) => {
                assert!(args.input.is_none());
                assert!(!args.no_sort);
                assert!(args.format.is_none());
            }
            _ => panic!("expected Report command"),
        }
    }

    #[test]
    fn parse_report_with_args() {
        let cli = Cli::parse_from([
            "hintpane",
            "report",
            "results.json",
            "--no-sort",
            "--format",
            "text",
        ]);
        match cli.command {
            Command::Report(ref args) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("results.json")));
                assert!(args.no_sort);
                assert_eq!(args.format, Some(ReportFormat::Text));
            }
            _ => panic!("expected Report command"),
        }
    }

    #[test]
    fn parse_check_update_latest() {
        let cli = Cli::parse_from([
            "hintpane",
            "check-update",
            "--current",
            "1.1.0",
            "--latest",
            "1.2.0",
        ]);
        match cli.command {
            Command::CheckUpdate(ref args) => {
                assert_eq!(args.current.as_deref(), Some("1.1.0"));
                assert_eq!(args.latest.as_deref(), Some("1.2.0"));
                assert!(args.manifest.is_none());
            }
            _ => panic!("expected CheckUpdate command"),
        }
    }

    #[test]
    fn parse_check_update_manifest() {
        let cli = Cli::parse_from(["hintpane", "check-update", "--manifest", "release.json"]);
        match cli.command {
            Command::CheckUpdate(ref args) => {
                assert!(args.current.is_none());
                assert!(args.manifest.is_some());
            }
            _ => panic!("expected CheckUpdate command"),
        }
    }

    #[test]
    fn latest_conflicts_with_manifest() {
        let result = Cli::try_parse_from([
            "hintpane",
            "check-update",
            "--latest",
            "1.0.0",
            "--manifest",
            "m.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["hintpane", "--quiet", "report"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);

        let cli = Cli::parse_from(["hintpane", "report", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["hintpane", "--config", "/path/to/hintpane.toml", "report"]);
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("/path/to/hintpane.toml"))
        );
    }

    #[test]
    fn report_format_converts() {
        assert_eq!(OutputFormat::from(ReportFormat::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(ReportFormat::Text), OutputFormat::Text);
    }
}
