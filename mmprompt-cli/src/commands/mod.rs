pub mod audio;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use mmprompt_core::{config, PromptConfig};

/// Load the config from `path`, or from `~/.mmprompt/config.yaml`.
pub(crate) fn load_config(path: Option<&Path>) -> Result<PromptConfig> {
    match path {
        Some(path) => config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => config::load().context("failed to load ~/.mmprompt/config.yaml"),
    }
}
