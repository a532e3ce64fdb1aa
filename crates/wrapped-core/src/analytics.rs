//! Outbound click-tracking abstraction.
//!
//! Reporting is fire-and-forget: a failing sink is logged and ignored,
//! and must never influence navigation state or timing.

/// Fixed source reported alongside every event tag.
pub const SOURCE_TAG: &str = "prototype";

/// Event tags emitted by the flow controller.
pub mod tags {
    /// Forward tap leaving the intro slide.
    pub const FIRST_PAGE: &str = "first-page";
    /// Main "see how to save" call-to-action.
    pub const CTA_MAIN: &str = "cta-principal";
    /// Per-category offer button.
    pub const CATEGORY_DETAIL: &str = "detail-category";
    /// "See other options" on the partner slide.
    pub const OTHER_OPTIONS: &str = "autres-options";
    /// "I switch" confirmation button.
    pub const CONFIRM: &str = "je-change";
    /// Final "I confirm and switch" button on the confirmation slide.
    pub const CONFIRM_SWITCH: &str = "je-confirme";
}

pub trait AnalyticsSink {
    type Error;

    fn report(&mut self, event: &str, source: &str) -> Result<(), Self::Error>;
}

/// Sink that drops every event, for bring-up and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAnalytics;

impl NullAnalytics {
    pub const fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for NullAnalytics {
    type Error = core::convert::Infallible;

    fn report(&mut self, _event: &str, _source: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
