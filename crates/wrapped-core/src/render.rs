//! View models and transition metadata consumed by front-end renderers.

use crate::deck::Tone;

/// Sign of the most recent slide change; renderers mirror their motion
/// parameters off it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn signum(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Named transition profile. Purely descriptive; every kind obeys the
/// same lock/duration contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionKind {
    /// 3D perspective fade with rotation, used on the intro and wrap-up.
    PerspectiveFade,
    ScaleFade,
    /// Vertical drift while fading in.
    RiseFade,
    CrossFade,
    /// Displacement-style vertical carry between the designated adjacent
    /// pair of slides.
    CarryUp,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionSpec {
    pub kind: TransitionKind,
    pub duration_ms: u16,
}

impl TransitionSpec {
    pub const fn new(kind: TransitionKind, duration_ms: u16) -> Self {
        Self { kind, duration_ms }
    }
}

/// One frame of an in-flight transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionFrame {
    pub kind: TransitionKind,
    pub direction: Direction,
    /// 0..=100
    pub progress_pct: u8,
}

/// Fill state of one progress-rail segment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SegmentFill {
    #[default]
    Empty,
    /// 0..=100, tracks the active transition.
    Partial(u8),
    Full,
}

/// Read-only snapshot handed to the renderer. Navigation intent must
/// flow back through the app's input events, never by mutating this.
pub enum Screen<'a> {
    /// Assets are still warming up; nothing is navigable yet.
    Loading,
    Story {
        current: u16,
        previous: u16,
        direction: Direction,
        label: &'a str,
        transition: Option<TransitionFrame>,
        locked: bool,
        tone: Option<Tone>,
        /// The gate slide is showing and no tone has been chosen.
        awaiting_tone: bool,
        share_open: bool,
        segments: &'a [SegmentFill],
    },
}
