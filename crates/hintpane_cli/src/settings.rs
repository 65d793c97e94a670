//! Resolves the configuration that applies to a CLI invocation.

use std::path::{Path, PathBuf};

use hintpane_config::Config;

use crate::GlobalArgs;

/// A loaded configuration together with the file it came from.
#[derive(Debug, Default)]
pub struct Settings {
    /// The parsed configuration, or defaults when no file was found.
    pub config: Config,
    /// The configuration file, if one was loaded.
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Resolves a path written in the configuration file.
    ///
    /// Relative paths are taken relative to the directory holding the file.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Loads the configuration for this run.
///
/// If `--config` is specified, that file must exist and parse. Otherwise the
/// configuration is discovered from the current directory, and defaults are
/// used when no file is found.
pub fn load(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    if let Some(ref path) = global.config {
        return Ok(Settings {
            config: hintpane_config::load_config_file(path)?,
            source: Some(path.clone()),
        });
    }
    let cwd = std::env::current_dir()?;
    discover_from(&cwd)
}

/// Discovers and loads the configuration that applies to `dir`.
pub fn discover_from(dir: &Path) -> Result<Settings, Box<dyn std::error::Error>> {
    match hintpane_config::find_config(Some(dir)) {
        Some(path) => Ok(Settings {
            config: hintpane_config::load_config_file(&path)?,
            source: Some(path),
        }),
        None => {
            tracing::debug!(dir = %dir.display(), "no configuration found, using defaults");
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn global_with(config: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config,
        }
    }

    #[test]
    fn explicit_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[report]\nsort = false\n").unwrap();
        let settings = load(&global_with(Some(path.clone()))).unwrap();
        assert!(!settings.config.report.sort);
        assert_eq!(settings.source, Some(path));
    }

    #[test]
    fn explicit_config_missing() {
        let result = load(&global_with(Some("/nonexistent/hintpane.toml".into())));
        assert!(result.is_err());
    }

    #[test]
    fn discovers_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("hintpane.toml"), "[report]\nquiet = true\n").unwrap();
        let sub = tmp.path().join("src");
        fs::create_dir_all(&sub).unwrap();
        let settings = discover_from(&sub).unwrap();
        assert!(settings.config.report.quiet);
        assert_eq!(settings.source, Some(tmp.path().join("hintpane.toml")));
    }

    #[test]
    fn invalid_discovered_config_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("hintpane.toml"), "not toml {{").unwrap();
        assert!(discover_from(tmp.path()).is_err());
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let settings = Settings {
            config: Config::default(),
            source: Some(PathBuf::from("/project/hintpane.toml")),
        };
        assert_eq!(
            settings.resolve_path(Path::new("release.json")),
            PathBuf::from("/project/release.json")
        );
        assert_eq!(
            settings.resolve_path(Path::new("/abs/release.json")),
            PathBuf::from("/abs/release.json")
        );
    }

    #[test]
    fn relative_paths_without_config_file() {
        let settings = Settings::default();
        assert_eq!(
            settings.resolve_path(Path::new("release.json")),
            PathBuf::from("release.json")
        );
    }
}
