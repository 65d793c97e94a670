//! `hintpane check-update`: reports whether a newer release exists.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hintpane_version::{ReleaseManifest, UpdateStatus};

use crate::settings::{self, Settings};
use crate::{CheckUpdateArgs, GlobalArgs};

/// The version of this binary, baked in at build time.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the `hintpane check-update` command.
///
/// Prints the checking state to stderr while the latest version is resolved,
/// then prints the final state to stdout. Returns exit code 0 either way.
pub fn run(args: &CheckUpdateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if !global.quiet {
        eprintln!("   {}", UpdateStatus::Checking);
    }

    let status = status_for(args, || settings::load(global))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{status}")?;
    stdout.flush()?;
    Ok(0)
}

/// Resolves the update status for `args`.
///
/// `load_settings` is only called when neither `--latest` nor `--manifest`
/// was given and the manifest has to come from the configuration.
fn status_for<F>(
    args: &CheckUpdateArgs,
    load_settings: F,
) -> Result<UpdateStatus, Box<dyn std::error::Error>>
where
    F: FnOnce() -> Result<Settings, Box<dyn std::error::Error>>,
{
    let current = args.current.as_deref().unwrap_or(CURRENT_VERSION);

    if let Some(ref latest) = args.latest {
        return Ok(UpdateStatus::resolve(current, latest));
    }

    let path = match args.manifest {
        Some(ref path) => path.clone(),
        None => configured_manifest(&load_settings()?)?,
    };
    tracing::debug!(path = %path.display(), "reading release manifest");
    Ok(ReleaseManifest::from_path(&path)?.status_for(current))
}

/// Returns the manifest path from the `[update]` section of the configuration,
/// resolved against the directory holding the configuration file.
fn configured_manifest(settings: &Settings) -> Result<PathBuf, String> {
    settings
        .config
        .update
        .manifest
        .as_deref()
        .map(|manifest| settings.resolve_path(Path::new(manifest)))
        .ok_or_else(|| {
            "no release manifest given; pass --latest or --manifest, or set [update] manifest"
                .to_string()
        })
}
