//! Application state machine for the guided story flow.

use log::debug;

use crate::{
    analytics::{AnalyticsSink, SOURCE_TAG, tags},
    assets::AssetGate,
    deck::{CtaAction, Deck, SLIDE_COUNT, Tone},
    engine::TransitionEngine,
    input::{InputEvent, InputProvider},
    render::{Direction, Screen, SegmentFill, TransitionFrame, TransitionSpec},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Timing knobs of the flow controller. Transition durations live in
/// the deck; these cover everything around them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoryConfig {
    /// Delay between a transition reaching full progress and the
    /// navigation lock clearing.
    pub unlock_grace_ms: u16,
    /// Delay between a tone choice and the scheduled forward advance,
    /// so the choice reads as acknowledged before the view moves on.
    pub choice_ack_ms: u16,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            unlock_grace_ms: 100,
            choice_ack_ms: 500,
        }
    }
}

pub struct StoryApp<IN, AN, AS>
where
    IN: InputProvider,
    AN: AnalyticsSink,
    AS: AssetGate,
{
    input: IN,
    analytics: AN,
    assets: AS,
    config: StoryConfig,
    deck: Deck,
    current: u16,
    previous: u16,
    direction: Direction,
    locked: bool,
    bypass: bool,
    tone: Option<Tone>,
    share_open: bool,
    generation: u32,
    engine: TransitionEngine,
    active_transition: TransitionSpec,
    pending_choice_ms: Option<u64>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
