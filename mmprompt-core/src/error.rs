//! Error types for mmprompt-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure, annotated with the path involved.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with the offending file.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// A media window that cannot be turned into ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A count in `TOTAL:IN_MESSAGE` is not a non-negative integer.
    #[error("invalid media count '{input}': {reason}")]
    InvalidCount { input: String, reason: String },

    /// A count does not fit the signed 64-bit id space.
    #[error("media count {count} is out of range (max {max})")]
    OutOfRange { count: usize, max: i64 },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.into(),
        source,
    }
}
