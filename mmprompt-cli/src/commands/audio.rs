//! `mmprompt to-wav` and `mmprompt convert` — audio normalization.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mmprompt_audio::{Ffmpeg, OutputFormat};

/// Arguments for `mmprompt to-wav`.
#[derive(Args, Debug)]
pub struct ToWavArgs {
    /// Source audio file.
    pub src: PathBuf,

    /// Destination wav path.
    pub dst: PathBuf,

    /// Config file (defaults to ~/.mmprompt/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ToWavArgs {
    pub fn run(self) -> Result<()> {
        let ffmpeg = ffmpeg(self.config)?;
        ffmpeg
            .audio_to_wav(&self.src, &self.dst)
            .with_context(|| format!("failed to convert {} to wav", self.src.display()))?;
        println!("{}", self.dst.display());
        Ok(())
    }
}

/// Arguments for `mmprompt convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source wav file.
    pub src: PathBuf,

    /// Target format: opus, mp3, aac, flac; anything else keeps wav.
    #[arg(long, default_value = "wav")]
    pub format: OutputFormat,

    /// Config file (defaults to ~/.mmprompt/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let ffmpeg = ffmpeg(self.config)?;
        let out = ffmpeg
            .audio_convert(&self.src, self.format)
            .with_context(|| format!("failed to convert {} to {}", self.src.display(), self.format))?;
        println!("{}", out.display());
        Ok(())
    }
}

fn ffmpeg(config: Option<PathBuf>) -> Result<Ffmpeg> {
    let config = super::load_config(config.as_deref())?;
    Ok(Ffmpeg::new(config.ffmpeg()))
}
