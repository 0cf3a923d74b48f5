//! Domain types for multimodal prompt assembly.
//!
//! A [`MediaWindow`] captures how many items of one [`MediaKind`] have been
//! seen across the conversation and how many of those belong to the current
//! message. [`MultiModalOptions`] bundles one window per kind so a single
//! render always sees one consistent snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WindowError;

/// Largest count a [`MediaWindow`] may hold; ids are signed 64-bit.
pub const MAX_MEDIA_COUNT: i64 = i64::MAX;

// ---------------------------------------------------------------------------
// MediaKind
// ---------------------------------------------------------------------------

/// The kinds of media a message can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

impl MediaKind {
    /// All media kinds in a stable order.
    pub fn all() -> &'static [MediaKind] {
        &[MediaKind::Image, MediaKind::Audio, MediaKind::Video]
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

// ---------------------------------------------------------------------------
// MediaWindow
// ---------------------------------------------------------------------------

/// Count pair for one media kind: everything seen so far, and the tail of
/// that total attached to the current message.
///
/// Callers are expected to keep `in_message <= total`. The window does not
/// enforce it; an inconsistent window yields negative ids from [`ids`](Self::ids).
/// Counts above [`MAX_MEDIA_COUNT`] are rejected when ids are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MediaWindow {
    pub total: usize,
    pub in_message: usize,
}

impl MediaWindow {
    pub const fn new(total: usize, in_message: usize) -> Self {
        Self { total, in_message }
    }

    /// A window with no media at all.
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Whether `in_message <= total`.
    pub fn is_consistent(&self) -> bool {
        self.in_message <= self.total
    }

    /// Both counts as ids, or `OutOfRange` if either exceeds `i64::MAX`.
    fn signed_counts(&self) -> Result<(i64, i64), WindowError> {
        let fit = |count: usize| {
            i64::try_from(count).map_err(|_| WindowError::OutOfRange {
                count,
                max: MAX_MEDIA_COUNT,
            })
        };
        Ok((fit(self.total)?, fit(self.in_message)?))
    }

    /// Fails when either count is larger than [`MAX_MEDIA_COUNT`].
    pub fn check_range(&self) -> Result<(), WindowError> {
        self.signed_counts().map(|_| ())
    }

    /// Id of the first item in the current message.
    pub fn first_id(&self) -> Result<i64, WindowError> {
        let (total, in_message) = self.signed_counts()?;
        Ok(total - in_message)
    }

    /// Ids of the items in the current message, ascending.
    ///
    /// These are the last `in_message` integers below `total`. Both counts
    /// are at most `i64::MAX`, so no id overflows.
    pub fn ids(&self) -> Result<impl Iterator<Item = i64>, WindowError> {
        let (total, in_message) = self.signed_counts()?;
        let first = total - in_message;
        Ok((0..in_message).map(move |i| i + first))
    }
}

impl fmt::Display for MediaWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.total, self.in_message)
    }
}

/// Parses `TOTAL:IN_MESSAGE`, or a bare `N` meaning `N:N`.
impl FromStr for MediaWindow {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| WindowError::InvalidCount {
                    input: part.to_string(),
                    reason: e.to_string(),
                })
        };
        let window = match s.split_once(':') {
            Some((total, in_message)) => Self::new(parse(total)?, parse(in_message)?),
            None => {
                let n = parse(s)?;
                Self::new(n, n)
            }
        };
        window.check_range()?;
        Ok(window)
    }
}

// ---------------------------------------------------------------------------
// MediaRef
// ---------------------------------------------------------------------------

/// One indexed media reference, as seen by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaRef {
    #[serde(rename = "ID")]
    pub id: i64,
}

impl MediaRef {
    /// All references for the current message of `window`, ascending by id.
    pub fn sequence(window: &MediaWindow) -> Result<Vec<MediaRef>, WindowError> {
        Ok(window.ids()?.map(|id| MediaRef { id }).collect())
    }
}

// ---------------------------------------------------------------------------
// MultiModalOptions
// ---------------------------------------------------------------------------

/// Media windows for every kind, captured together for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiModalOptions {
    #[serde(default)]
    pub images: MediaWindow,
    #[serde(default)]
    pub audio: MediaWindow,
    #[serde(default)]
    pub video: MediaWindow,
}

impl MultiModalOptions {
    pub fn with_images(mut self, window: MediaWindow) -> Self {
        self.images = window;
        self
    }

    pub fn with_audio(mut self, window: MediaWindow) -> Self {
        self.audio = window;
        self
    }

    pub fn with_video(mut self, window: MediaWindow) -> Self {
        self.video = window;
        self
    }

    pub fn window(&self, kind: MediaKind) -> MediaWindow {
        match kind {
            MediaKind::Image => self.images,
            MediaKind::Audio => self.audio,
            MediaKind::Video => self.video,
        }
    }

    /// Kinds whose window violates `in_message <= total`.
    pub fn inconsistent_kinds(&self) -> Vec<MediaKind> {
        MediaKind::all()
            .iter()
            .copied()
            .filter(|kind| !self.window(*kind).is_consistent())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_last_in_message_below_total() {
        let w = MediaWindow::new(5, 3);
        assert_eq!(w.ids().unwrap().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn empty_window_has_no_ids() {
        assert_eq!(MediaWindow::empty().ids().unwrap().count(), 0);
        assert_eq!(MediaWindow::new(7, 0).ids().unwrap().count(), 0);
    }

    #[test]
    fn inconsistent_window_yields_negative_ids() {
        let w = MediaWindow::new(1, 3);
        assert!(!w.is_consistent());
        assert_eq!(w.ids().unwrap().collect::<Vec<_>>(), vec![-2, -1, 0]);
    }

    #[test]
    fn largest_representable_total_yields_non_negative_ids() {
        let top = MediaWindow::new(i64::MAX as usize, 2);
        assert_eq!(top.first_id().unwrap(), i64::MAX - 2);
        assert_eq!(
            top.ids().unwrap().collect::<Vec<_>>(),
            vec![i64::MAX - 2, i64::MAX - 1]
        );
    }

    #[test]
    fn counts_beyond_i64_are_out_of_range() {
        let err = MediaWindow::new(usize::MAX, 2).ids().err().expect("out of range");
        assert_eq!(err, WindowError::OutOfRange { count: usize::MAX, max: i64::MAX });

        let huge_in_message = MediaWindow::new(3, usize::MAX);
        assert!(matches!(
            MediaRef::sequence(&huge_in_message),
            Err(WindowError::OutOfRange { .. })
        ));
        assert!(MediaWindow::new(i64::MAX as usize + 1, 0).check_range().is_err());
    }

    #[test]
    fn window_parse_rejects_counts_beyond_i64() {
        let err = "18446744073709551615:2".parse::<MediaWindow>().unwrap_err();
        assert!(matches!(err, WindowError::OutOfRange { .. }), "got: {err}");
        assert!("9223372036854775807:2".parse::<MediaWindow>().is_ok());
    }

    #[test]
    fn window_parses_pair_and_bare_count() {
        assert_eq!("4:2".parse::<MediaWindow>().unwrap(), MediaWindow::new(4, 2));
        assert_eq!("3".parse::<MediaWindow>().unwrap(), MediaWindow::new(3, 3));
        assert!("x:1".parse::<MediaWindow>().is_err());
        assert!("".parse::<MediaWindow>().is_err());
    }

    #[test]
    fn media_ref_serializes_with_template_field_name() {
        let yaml = serde_yaml::to_string(&MediaRef { id: 3 }).expect("serialize");
        assert_eq!(yaml.trim(), "ID: 3");
    }

    #[test]
    fn options_report_inconsistent_kinds() {
        let opts = MultiModalOptions::default()
            .with_audio(MediaWindow::new(1, 2))
            .with_video(MediaWindow::new(2, 2));
        assert_eq!(opts.inconsistent_kinds(), vec![MediaKind::Audio]);
        assert_eq!(opts.window(MediaKind::Video), MediaWindow::new(2, 2));
    }

    #[test]
    fn media_kind_display() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Video.to_string(), "video");
    }
}
