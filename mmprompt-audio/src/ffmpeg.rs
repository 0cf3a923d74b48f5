//! ffmpeg invocation — [`Ffmpeg`].
//!
//! Every call is a synchronous child process with an empty environment, so
//! conversions behave the same regardless of the caller's shell. stdout and
//! stderr are captured and attached to any failure.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{io_err, AudioError};
use crate::format::OutputFormat;
use crate::wav::{WavSpec, TARGET_CHANNELS, TARGET_SAMPLE_RATE};

/// Handle to an ffmpeg binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Ffmpeg {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Ffmpeg { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Normalise `src` to 16-bit mono 16 kHz PCM wav at `dst`.
    ///
    /// A `.wav` source that already has that layout is moved to `dst`
    /// untouched. A `.wav` whose header cannot be read is converted.
    pub fn audio_to_wav(&self, src: &Path, dst: &Path) -> Result<(), AudioError> {
        if has_wav_suffix(src) {
            match WavSpec::read(src) {
                Ok(spec) if spec.is_transcription_ready() => {
                    std::fs::rename(src, dst).map_err(|e| io_err(dst, e))?;
                    tracing::debug!(src = %src.display(), dst = %dst.display(), "wav already normalised, moved");
                    return Ok(());
                }
                Ok(spec) => {
                    tracing::debug!(?spec, "wav needs resampling");
                }
                Err(AudioError::Wav { reason, .. }) => {
                    tracing::debug!(src = %src.display(), %reason, "unreadable wav header, converting");
                }
                // Only failing to open the source lands here.
                Err(err) => return Err(err),
            }
        }

        let sample_rate = TARGET_SAMPLE_RATE.to_string();
        let channels = TARGET_CHANNELS.to_string();
        self.run(&[
            OsStr::new("-i"),
            src.as_os_str(),
            OsStr::new("-format"),
            OsStr::new("s16le"),
            OsStr::new("-ar"),
            OsStr::new(&sample_rate),
            OsStr::new("-ac"),
            OsStr::new(&channels),
            OsStr::new("-acodec"),
            OsStr::new("pcm_s16le"),
            dst.as_os_str(),
        ])?;
        tracing::info!(src = %src.display(), dst = %dst.display(), "converted audio to wav");
        Ok(())
    }

    /// Convert a generated wav file to `format`, returning the output path.
    ///
    /// Wav output is a no-op that returns `src`. Otherwise the output sits
    /// next to `src` with every `.wav` in the path replaced by the target
    /// extension.
    pub fn audio_convert(&self, src: &Path, format: OutputFormat) -> Result<PathBuf, AudioError> {
        if format.is_wav() {
            return Ok(src.to_path_buf());
        }

        let dst = converted_path(src, format);
        self.run(&[
            OsStr::new("-y"),
            OsStr::new("-i"),
            src.as_os_str(),
            OsStr::new("-vn"),
            dst.as_os_str(),
        ])?;
        tracing::info!(src = %src.display(), dst = %dst.display(), %format, "converted audio");
        Ok(dst)
    }

    /// Run ffmpeg with `args`, returning its combined output.
    fn run(&self, args: &[&OsStr]) -> Result<String, AudioError> {
        let output = Command::new(&self.program)
            .args(args)
            .env_clear()
            .output()
            .map_err(|source| AudioError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            return Ok(combined);
        }
        Err(AudioError::Ffmpeg {
            status: output.status,
            output: combined,
        })
    }
}

/// Destination path for converting `src` to `format`.
pub fn converted_path(src: &Path, format: OutputFormat) -> PathBuf {
    PathBuf::from(src.to_string_lossy().replace(".wav", format.extension()))
}

fn has_wav_suffix(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".wav")
}
