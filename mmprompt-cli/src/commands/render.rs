//! `mmprompt render` — assemble a prompt fragment.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mmprompt_core::{MediaWindow, MultiModalOptions};

/// Arguments for `mmprompt render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Inline template text; overrides the config template.
    #[arg(long, conflicts_with = "template_file")]
    pub template: Option<String>,

    /// Read the template from a file.
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Image window as TOTAL:IN_MESSAGE (a bare N means N:N).
    #[arg(long, default_value = "0")]
    pub images: MediaWindow,

    /// Audio window as TOTAL:IN_MESSAGE.
    #[arg(long, default_value = "0")]
    pub audio: MediaWindow,

    /// Video window as TOTAL:IN_MESSAGE.
    #[arg(long, default_value = "0")]
    pub video: MediaWindow,

    /// Message text appended by the template.
    #[arg(long, default_value = "")]
    pub text: String,

    /// Only compile the template and report whether it is valid.
    #[arg(long)]
    pub check: bool,

    /// Config file (defaults to ~/.mmprompt/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let template = self.resolve_template()?;

        if self.check {
            mmprompt_renderer::compile(&template)
                .map_err(|e| anyhow::anyhow!(e.detailed()))
                .context("template is invalid")?;
            println!("template ok");
            return Ok(());
        }

        let opts = MultiModalOptions::default()
            .with_images(self.images)
            .with_audio(self.audio)
            .with_video(self.video);

        let prompt = mmprompt_renderer::render(&template, &opts, &self.text)
            .map_err(|e| anyhow::anyhow!(e.detailed()))
            .context("failed to render prompt")?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// `--template` → `--template-file` → config → built-in default (empty).
    fn resolve_template(&self) -> Result<String> {
        if let Some(text) = &self.template {
            tracing::debug!("using inline template");
            return Ok(text.clone());
        }
        if let Some(path) = &self.template_file {
            tracing::debug!(path = %path.display(), "using template file");
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template {}", path.display()));
        }
        let config = super::load_config(self.config.as_deref())?;
        Ok(config.template_text().to_string())
    }
}
