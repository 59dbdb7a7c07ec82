//! Configuration management for handlergen.
//!
//! This module defines the `Config` struct that controls where the generated
//! handler file is written and which capability trait it imports. Every field
//! has a default, so running without a configuration file reproduces the
//! fixed output location. A configuration can also be loaded from YAML.
//!
//! # Examples
//!
//! ```no_run
//! use handlergen_core::config::Config;
//!
//! // Defaults: write to <repo>/crates/handlergen-server/src/handler_gen.rs
//! let config = Config::default();
//! assert_eq!(config.handler_trait, "crate::HttpHandler");
//!
//! // Or load from a config file
//! let config = Config::from_file("handlergen.yaml").unwrap();
//! println!("{}", config.resolve_output_path().display());
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Location of this crate relative to the repository root
const CRATE_DIR_FROM_REPO_ROOT: &str = "crates/handlergen-core";

/// Location of the generated file relative to the repository root
const OUTPUT_FROM_REPO_ROOT: [&str; 4] = ["crates", "handlergen-server", "src", "handler_gen.rs"];

/// Configuration for a handlergen run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Destination of the generated file; defaults to the server crate's `src/handler_gen.rs`
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Path of the trait every generated handler must implement
    #[serde(default = "default_handler_trait")]
    pub handler_trait: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: None,
            handler_trait: default_handler_trait(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> crate::Result<()> {
        if self.trait_name().is_empty() {
            return Err(Error::config(format!(
                "handler_trait '{}' does not name a trait",
                self.handler_trait
            )));
        }
        Ok(())
    }

    /// Last path segment of `handler_trait`
    pub fn trait_name(&self) -> &str {
        self.handler_trait
            .rsplit("::")
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// The configured output path, or the fixed location under the repository root
    pub fn resolve_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => default_output_path(),
        }
    }
}

fn default_handler_trait() -> String {
    "crate::HttpHandler".to_string()
}

/// Repository root, derived from where this crate's sources live.
pub fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let depth = Path::new(CRATE_DIR_FROM_REPO_ROOT).components().count();
    if manifest_dir.ends_with(CRATE_DIR_FROM_REPO_ROOT) {
        manifest_dir
            .ancestors()
            .nth(depth)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| manifest_dir.to_path_buf())
    } else {
        manifest_dir.to_path_buf()
    }
}

/// Fixed location of the generated handler file
pub fn default_output_path() -> PathBuf {
    OUTPUT_FROM_REPO_ROOT
        .iter()
        .fold(repo_root(), |path, segment| path.join(segment))
}
