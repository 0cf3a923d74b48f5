//! Tera rendering engine — [`render`], [`CompiledTemplate`] and
//! [`MultiModalRenderer`].
//!
//! # Template surface
//!
//! | Name     | Type              | Content                                   |
//! |----------|-------------------|-------------------------------------------|
//! | `Audio`  | sequence of `{ID}`| audio items attached to the message       |
//! | `Images` | sequence of `{ID}`| image items attached to the message       |
//! | `Video`  | sequence of `{ID}`| video items attached to the message       |
//! | `Text`   | string            | message text, inserted verbatim           |
//!
//! Tera's built-in filters, testers and functions are available. Autoescaping
//! is off for every template.

use std::sync::Arc;

use dashmap::DashMap;
use tera::Tera;

use mmprompt_core::MultiModalOptions;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Placeholder layout used when no template is supplied.
///
/// Audio and images become the generic `<__media__>` marker the model server
/// substitutes in order; videos carry their id since they are referenced,
/// not inlined.
pub const DEFAULT_MULTIMODAL_TEMPLATE: &str = "{% for a in Audio %}<__media__>{% endfor %}\
{% for i in Images %}<__media__>{% endfor %}\
{% for v in Video %}[vid-{{ v.ID }}]{% endfor %}\
{{ Text }}";

const TEMPLATE_NAME: &str = "multimodal";

/// The template text that will actually be compiled for `template_text`.
pub fn effective_template(template_text: &str) -> &str {
    if template_text.is_empty() {
        DEFAULT_MULTIMODAL_TEMPLATE
    } else {
        template_text
    }
}

// ---------------------------------------------------------------------------
// CompiledTemplate
// ---------------------------------------------------------------------------

/// A parsed multimodal template, ready to execute any number of times.
#[derive(Debug)]
pub struct CompiledTemplate {
    tera: Tera,
}

impl CompiledTemplate {
    /// Execute against a fresh context built from `opts` and `text`.
    pub fn render(&self, opts: &MultiModalOptions, text: &str) -> Result<String, RenderError> {
        for kind in opts.inconsistent_kinds() {
            let window = opts.window(kind);
            tracing::warn!(
                kind = %kind,
                total = window.total,
                in_message = window.in_message,
                "media window has more items in message than in total; ids will be negative"
            );
        }

        let ctx = RenderContext::new(opts, text)?;
        let tera_ctx = ctx.to_tera_context()?;
        self.tera
            .render(TEMPLATE_NAME, &tera_ctx)
            .map_err(RenderError::Exec)
    }
}

/// Compile `template_text` (or the default when empty) without executing it.
pub fn compile(template_text: &str) -> Result<CompiledTemplate, RenderError> {
    let source = effective_template(template_text);
    if template_text.is_empty() {
        tracing::debug!("no multimodal template supplied, using default");
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(TEMPLATE_NAME, source)
        .map_err(RenderError::Compile)?;
    Ok(CompiledTemplate { tera })
}

/// Compile and render in one call. Nothing is shared between calls.
pub fn render(
    template_text: &str,
    opts: &MultiModalOptions,
    text: &str,
) -> Result<String, RenderError> {
    compile(template_text)?.render(opts, text)
}

// ---------------------------------------------------------------------------
// MultiModalRenderer
// ---------------------------------------------------------------------------

/// Reusable renderer that keeps compiled templates keyed by their text.
///
/// Output and errors are identical to [`render`]. Templates that fail to
/// compile are not cached. Safe to share across threads.
#[derive(Debug, Default)]
pub struct MultiModalRenderer {
    cache: DashMap<String, Arc<CompiledTemplate>>,
}

impl MultiModalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &self,
        template_text: &str,
        opts: &MultiModalOptions,
        text: &str,
    ) -> Result<String, RenderError> {
        self.compiled(template_text)?.render(opts, text)
    }

    /// Number of distinct compiled templates held.
    pub fn cached_templates(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn compiled(&self, template_text: &str) -> Result<Arc<CompiledTemplate>, RenderError> {
        let source = effective_template(template_text);
        if let Some(hit) = self.cache.get(source) {
            return Ok(Arc::clone(hit.value()));
        }

        let compiled = Arc::new(compile(template_text)?);
        tracing::debug!(cached = self.cache.len() + 1, "compiled multimodal template");
        let entry = self.cache.entry(source.to_string()).or_insert(compiled);
        Ok(Arc::clone(entry.value()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
