//! Render context — the only data a multimodal template can see.

use serde::Serialize;

use mmprompt_core::{MediaRef, MultiModalOptions};

use crate::error::RenderError;

/// Per-call rendering payload.
///
/// Serialized field names are what templates reference: `Audio`, `Images`
/// and `Video` are sequences whose elements expose `ID`; `Text` is the raw
/// message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext<'a> {
    #[serde(rename = "Audio")]
    pub audio: Vec<MediaRef>,
    #[serde(rename = "Images")]
    pub images: Vec<MediaRef>,
    #[serde(rename = "Video")]
    pub video: Vec<MediaRef>,
    #[serde(rename = "Text")]
    pub text: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Derive all three id sequences from one options snapshot.
    pub fn new(opts: &MultiModalOptions, text: &'a str) -> Result<Self, RenderError> {
        Ok(RenderContext {
            audio: MediaRef::sequence(&opts.audio)?,
            images: MediaRef::sequence(&opts.images)?,
            video: MediaRef::sequence(&opts.video)?,
            text,
        })
    }

    /// Convert to a [`tera::Context`].
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmprompt_core::MediaWindow;

    #[test]
    fn sequences_follow_windows() {
        let opts = MultiModalOptions::default()
            .with_images(MediaWindow::new(4, 1))
            .with_audio(MediaWindow::new(2, 2))
            .with_video(MediaWindow::new(0, 0));
        let ctx = RenderContext::new(&opts, "hi").unwrap();
        assert_eq!(ctx.images, vec![MediaRef { id: 3 }]);
        assert_eq!(ctx.audio, vec![MediaRef { id: 0 }, MediaRef { id: 1 }]);
        assert!(ctx.video.is_empty());
        assert_eq!(ctx.text, "hi");
    }

    #[test]
    fn serialized_names_match_template_fields() {
        let opts = MultiModalOptions::default().with_video(MediaWindow::new(3, 1));
        let ctx = RenderContext::new(&opts, "t").unwrap();
        let value = serde_json::to_value(&ctx).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "Audio": [],
                "Images": [],
                "Video": [{ "ID": 2 }],
                "Text": "t",
            })
        );
    }

    #[test]
    fn out_of_range_window_fails_before_any_sequence_is_used() {
        let opts = MultiModalOptions::default().with_images(MediaWindow::new(usize::MAX, 1));
        let err = RenderContext::new(&opts, "t").unwrap_err();
        assert!(matches!(err, RenderError::Window(_)), "got: {err}");
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = RenderContext::new(&MultiModalOptions::default(), "").unwrap();
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        assert!(tera_ctx.contains_key("Text"));
        assert!(tera_ctx.contains_key("Video"));
    }
}
