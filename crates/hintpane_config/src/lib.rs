//! Parsing, validation, and discovery of `hintpane.toml` configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`Config`] holding report and update-check settings. [`find_config`]
//! locates the file that applies to a given directory.

#![warn(missing_docs)]

pub mod discover;
pub mod error;
pub mod loader;
pub mod types;

pub use discover::{find_config, find_up_the_tree, CONFIG_FILE_NAME, HOME_CONFIG_FILE_NAME};
pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str};
pub use types::*;
