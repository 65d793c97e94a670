//! Locating the configuration file that applies to a directory.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// The project-level configuration file name.
pub const CONFIG_FILE_NAME: &str = "hintpane.toml";

/// The per-user configuration file name, looked up in the home directory.
pub const HOME_CONFIG_FILE_NAME: &str = ".hintpane.toml";

/// The `package.json` key that may point at a configuration file.
const PACKAGE_JSON_KEY: &str = "hintpaneConfig";

/// How many directories the upward search visits before giving up.
const MAX_SEARCH_DEPTH: usize = 30;

/// Walks up from `start` looking for a file named `filename`.
///
/// Checks `start` itself first, then each parent, visiting at most
/// `max_depth` directories. Returns the full path of the first match.
pub fn find_up_the_tree(start: &Path, filename: &str, max_depth: usize) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    for _ in 0..max_depth {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
    None
}

/// Finds the configuration file for a directory.
///
/// The first of these that exists wins:
///
/// 1. the file named by the `hintpaneConfig` key of the nearest `package.json`
///    in `start_dir` or a parent, resolved relative to that `package.json`;
/// 2. the nearest `hintpane.toml` in `start_dir` or a parent;
/// 3. `~/.hintpane.toml`.
///
/// When `start_dir` is `None` (e.g. an unsaved buffer) only the home
/// directory is considered.
pub fn find_config(start_dir: Option<&Path>) -> Option<PathBuf> {
    find_config_with_home(start_dir, dirs::home_dir().as_deref())
}

pub(crate) fn find_config_with_home(
    start_dir: Option<&Path>,
    home: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(start) = start_dir {
        if let Some(path) = from_package_json(start) {
            tracing::debug!(path = %path.display(), "using configuration named by package.json");
            return Some(path);
        }
        if let Some(path) = find_up_the_tree(start, CONFIG_FILE_NAME, MAX_SEARCH_DEPTH) {
            tracing::debug!(path = %path.display(), "using project configuration");
            return Some(path);
        }
    }

    let path = home?.join(HOME_CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!(path = %path.display(), "using home configuration");
        Some(path)
    } else {
        None
    }
}

/// Follows the `hintpaneConfig` key of the nearest `package.json`, if any.
///
/// A `package.json` that is unreadable or not valid JSON is skipped.
fn from_package_json(start: &Path) -> Option<PathBuf> {
    let package_json = find_up_the_tree(start, "package.json", MAX_SEARCH_DEPTH)?;
    let text = std::fs::read_to_string(&package_json).ok()?;
    let pkg: Value = match serde_json::from_str(&text) {
        Ok(pkg) => pkg,
        Err(e) => {
            tracing::warn!(path = %package_json.display(), error = %e, "skipping invalid package.json");
            return None;
        }
    };
    let relative = pkg.get(PACKAGE_JSON_KEY)?.as_str()?;
    let path = package_json.parent()?.join(relative);
    path.is_file().then_some(path)
}
