//! Error types for the podium glue layer.
//!
//! The pure core (normalize/aggregate/classify/rank) never fails: malformed
//! scores become `None` and unknown categories fall through as no-ops. The
//! errors below cover the surrounding I/O (snapshot files, configuration)
//! and bridge into `anyhow` at the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading snapshots or configuration.
#[derive(Debug, Error)]
pub enum PodiumError {
    /// File system read/write failures.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot JSON that does not match the expected shape.
    #[error("invalid snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file parse failures.
    #[error("invalid configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration that parsed but fails policy validation.
    #[error("invalid category policy: {0}")]
    Policy(String),
}

impl PodiumError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PodiumError::Io {
            path: path.into(),
            source,
        }
    }
}
