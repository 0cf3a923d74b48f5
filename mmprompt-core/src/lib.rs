//! mmprompt core library — media window types, configuration, errors.
//!
//! - [`types`] — media kinds, windows and indexed references
//! - [`config`] — YAML configuration load / save
//! - [`error`] — [`ConfigError`], [`WindowError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::PromptConfig;
pub use error::{ConfigError, WindowError};
pub use types::{MediaKind, MediaRef, MediaWindow, MultiModalOptions, MAX_MEDIA_COUNT};
