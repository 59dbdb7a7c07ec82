//! Error handling for the handlergen code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every stage of the pipeline
//! (load, enumerate, render, format, write) maps its failures onto one of these
//! variants; none of them are retried.
//!
//! # Examples
//!
//! ```
//! use handlergen_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::decode("method name is empty"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for handlergen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for handlergen operations
#[derive(Debug, Error)]
pub enum Error {
    /// The discovery document is malformed or violates a generation precondition
    #[error("Decode error: {0}")]
    Decode(String),

    /// The template failed to parse or to render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// The rendered text is not valid Rust source
    #[error("Format error: {0}")]
    Format(String),

    /// The destination file could not be written
    #[error("Failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated file on disk differs from the freshly rendered output
    #[error("Generated file is out of date: {}", .0.display())]
    Stale(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Self::Format(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
