//! # mmprompt-audio
//!
//! Audio normalization for the prompt pipeline: inbound audio becomes
//! 16-bit mono 16 kHz wav for transcription, and generated wav can be
//! re-encoded into a requested output format. All encoding is delegated to
//! an external `ffmpeg` binary.

pub mod error;
pub mod ffmpeg;
pub mod format;
pub mod wav;

pub use error::AudioError;
pub use ffmpeg::{converted_path, Ffmpeg};
pub use format::OutputFormat;
pub use wav::WavSpec;
