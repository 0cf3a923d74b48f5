//! Error types for mmprompt-renderer.

use thiserror::Error;

use mmprompt_core::WindowError;

/// All errors that can arise from multimodal template rendering.
///
/// No variant carries partial output: a failed render never yields text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template text could not be parsed.
    #[error("template compile error: {0}")]
    Compile(#[source] tera::Error),

    /// The template parsed but failed while executing against the context.
    #[error("template execution error: {0}")]
    Exec(#[source] tera::Error),

    /// A media window holds a count that cannot be turned into ids.
    #[error("media window error: {0}")]
    Window(#[from] WindowError),

    /// Building the Tera context from the render context failed.
    #[error("context serialization error: {0}")]
    Serialization(#[source] tera::Error),
}

impl RenderError {
    /// Full message including every `source()` in the chain.
    ///
    /// Tera keeps the useful detail (line, column, expected token) in the
    /// nested error rather than the top-level message.
    pub fn detailed(&self) -> String {
        use std::error::Error as _;

        let mut msg = self.to_string();
        let mut source = self.source().and_then(|e| e.source());
        while let Some(err) = source {
            msg.push_str(": ");
            msg.push_str(&err.to_string());
            source = err.source();
        }
        msg
    }
}
