//! # mmprompt-renderer
//!
//! Tera-based engine that turns media counts plus message text into the
//! prompt fragment handed to a multimodal model.
//!
//! ## Usage
//!
//! ```rust
//! use mmprompt_core::{MediaWindow, MultiModalOptions};
//!
//! let opts = MultiModalOptions::default().with_audio(MediaWindow::new(3, 2));
//! let prompt = mmprompt_renderer::render("", &opts, "hello").unwrap();
//! assert_eq!(prompt, "<__media__><__media__>hello");
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::{
    compile, effective_template, render, CompiledTemplate, MultiModalRenderer,
    DEFAULT_MULTIMODAL_TEMPLATE,
};
pub use error::RenderError;
