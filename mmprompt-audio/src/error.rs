//! Error types for mmprompt-audio.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can arise from audio normalization.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Filesystem error, with annotated path for context.
    #[error("audio I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The converter binary could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran and exited unsuccessfully.
    #[error("ffmpeg failed ({status}) out: {output}")]
    Ffmpeg { status: ExitStatus, output: String },

    /// The wav header could not be read after the file was opened.
    #[error("invalid wav file {path}: {reason}")]
    Wav { path: PathBuf, reason: String },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> AudioError {
    AudioError::Io {
        path: path.into(),
        source,
    }
}
