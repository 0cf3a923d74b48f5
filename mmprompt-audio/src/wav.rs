//! Wav header inspection.
//!
//! Only the format header is decoded; sample data is never read.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{io_err, AudioError};

/// Sample layout the transcription backends expect.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;
pub const TARGET_CHANNELS: u16 = 1;
pub const TARGET_BITS_PER_SAMPLE: u16 = 16;

/// Format fields from a wav `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Read the spec from the header of the wav file at `path`.
    ///
    /// Failing to open the file is `AudioError::Io`; any failure after that,
    /// including I/O errors while walking the chunks, is `AudioError::Wav`.
    pub fn read(path: &Path) -> Result<Self, AudioError> {
        let file = File::open(path).map_err(|e| io_err(path, e))?;
        read_spec(BufReader::new(file), path)
    }

    /// 16-bit mono at 16 kHz.
    pub fn is_transcription_ready(&self) -> bool {
        self.bits_per_sample == TARGET_BITS_PER_SAMPLE
            && self.channels == TARGET_CHANNELS
            && self.sample_rate == TARGET_SAMPLE_RATE
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

fn read_spec<R: Read>(reader: R, path: &Path) -> Result<WavSpec, AudioError> {
    let wav = hound::WavReader::new(reader).map_err(|e| AudioError::Wav {
        path: PathBuf::from(path),
        reason: e.to_string(),
    })?;
    Ok(wav.spec().into())
}

/// Build a canonical 44-byte PCM wav header with no samples.
#[cfg(test)]
pub(crate) fn header_bytes(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let mut out = Vec::with_capacity(44);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&36u32.to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&0u32.to_le_bytes());
    out
}
