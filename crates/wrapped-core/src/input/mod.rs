//! Input abstraction layer.

use crate::deck::{CtaAction, Tone};

pub mod mock;

/// Logical actions consumed by the story app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Tap/swipe on the main surface: next slide, or close the share
    /// overlay if it is open.
    TapNext,
    /// Back button or left-edge tap.
    TapBack,
    /// Tap on a progress-rail segment.
    SegmentTap(u16),
    ChooseTone(Tone),
    Cta(CtaAction),
    OpenShare,
    DismissShare,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
