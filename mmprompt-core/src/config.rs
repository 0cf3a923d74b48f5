//! YAML configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.mmprompt/
//!   config.yaml   (mode 0600)
//! ```
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! A missing config file is not an error: defaults are returned.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, ConfigError};

/// Default program name used to locate ffmpeg on `PATH`.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// User-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Custom multimodal template; `None` selects the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Path to the ffmpeg binary used for audio normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_path: Option<PathBuf>,
}

impl PromptConfig {
    /// Template text to render with; empty when the default should be used.
    pub fn template_text(&self) -> &str {
        self.template.as_deref().unwrap_or("")
    }

    /// ffmpeg binary to invoke.
    pub fn ffmpeg(&self) -> PathBuf {
        self.ffmpeg_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FFMPEG))
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.mmprompt/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".mmprompt").join("config.yaml")
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load the config file at an explicit path.
///
/// Returns defaults when the file does not exist and
/// `ConfigError::Parse` (with path) when the YAML is malformed.
pub fn load_from(path: &Path) -> Result<PromptConfig, ConfigError> {
    if !path.exists() {
        return Ok(PromptConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    if contents.trim().is_empty() {
        return Ok(PromptConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load `<home>/.mmprompt/config.yaml`.
pub fn load_at(home: &Path) -> Result<PromptConfig, ConfigError> {
    load_from(&config_path_at(home))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<PromptConfig, ConfigError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

/// Atomically save the config to `<home>/.mmprompt/config.yaml`.
///
/// Write flow: serialize → `.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, config: &PromptConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path_at(home);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    let tmp_path = path.with_file_name("config.yaml.tmp");

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&tmp_path, yaml).map_err(|e| io_err(&tmp_path, e))?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path).map_err(|e| io_err(&path, e))?;
    Ok(path)
}

/// `save_at` convenience wrapper.
pub fn save(config: &PromptConfig) -> Result<PathBuf, ConfigError> {
    save_at(&home()?, config)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}
