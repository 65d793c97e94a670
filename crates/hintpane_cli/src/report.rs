//! `hintpane report`: orders and renders an analyzer's findings.
//!
//! 1. Resolve configuration (`--config`, discovered `hintpane.toml`, or defaults)
//! 2. Apply CLI overrides on top of the `[report]` section
//! 3. Read the analyzer's JSON results from a file or stdin
//! 4. Validate, extract, order, and render them to stdout in one write

use std::io::{self, Read, Write};
use std::path::Path;

use hintpane_config::ReportConfig;
use hintpane_diagnostics::{parse_results, ReportOptions, Reporter, Summary};

use crate::{settings, GlobalArgs, ReportArgs};

/// Runs the `hintpane report` command.
///
/// Returns exit code 1 if the report contains error-severity findings, 0
/// otherwise.
pub fn run(args: &ReportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = settings::load(global)?;
    let options = merge_report_options(&settings.config.report, args, global);

    let input = read_input(args.input.as_deref())?;
    let stdout = io::stdout();
    let summary = report_input(&input, options, stdout.lock())?;

    tracing::info!(
        total = summary.total,
        errors = summary.errors,
        warnings = summary.warnings,
        "report complete"
    );
    Ok(exit_code(&summary))
}

/// Maps a finished report to the process exit code.
fn exit_code(summary: &Summary) -> i32 {
    if summary.has_errors() {
        1
    } else {
        0
    }
}

/// Parses raw analyzer output and writes the report to `out`.
pub fn report_input<W: Write>(
    input: &str,
    options: ReportOptions,
    out: W,
) -> Result<Summary, Box<dyn std::error::Error>> {
    let results = parse_results(input)?;
    let summary = Reporter::new(options).report(results, out)?;
    Ok(summary)
}

/// Layers CLI flags over the configuration file's report settings.
///
/// Flags only ever switch behavior on: `--no-sort` disables sorting,
/// `--format` replaces the format, and `--quiet` enables quiet mode.
fn merge_report_options(
    config: &ReportConfig,
    args: &ReportArgs,
    global: &GlobalArgs,
) -> ReportOptions {
    let mut options = config.to_options();
    if args.no_sort {
        options.sort = false;
    }
    if let Some(format) = args.format {
        options.format = format.into();
    }
    if global.quiet {
        options.quiet = true;
    }
    options
}

/// Reads the analyzer output from `path`, or from stdin for `None` or `-`.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
