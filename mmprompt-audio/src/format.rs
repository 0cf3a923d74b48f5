//! Target formats for converted audio output.

use std::fmt;
use std::str::FromStr;

/// Output container selected from a requested format name.
///
/// Unknown names fall back to [`OutputFormat::Wav`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    Opus,
    Mp3,
    Aac,
    Flac,
    #[default]
    Wav,
}

impl OutputFormat {
    /// Resolve a format name; anything unrecognised is wav.
    pub fn from_name(name: &str) -> Self {
        match name {
            "opus" => OutputFormat::Opus,
            "mp3" => OutputFormat::Mp3,
            "aac" => OutputFormat::Aac,
            "flac" => OutputFormat::Flac,
            _ => OutputFormat::Wav,
        }
    }

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Opus => ".ogg",
            OutputFormat::Mp3 => ".mp3",
            OutputFormat::Aac => ".aac",
            OutputFormat::Flac => ".flac",
            OutputFormat::Wav => ".wav",
        }
    }

    /// Whether converting to this format is a no-op.
    pub fn is_wav(&self) -> bool {
        matches!(self, OutputFormat::Wav)
    }
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Opus => write!(f, "opus"),
            OutputFormat::Mp3 => write!(f, "mp3"),
            OutputFormat::Aac => write!(f, "aac"),
            OutputFormat::Flac => write!(f, "flac"),
            OutputFormat::Wav => write!(f, "wav"),
        }
    }
}
