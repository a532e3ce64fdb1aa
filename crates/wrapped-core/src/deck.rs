//! Static deck configuration: the slide table, the branch/skip rules and
//! the call-to-action routes. Loaded once at session start and never
//! mutated; every literal slide index in the product lives here.

use heapless::Vec;

use crate::render::{Direction, TransitionKind, TransitionSpec};

/// Logical slide positions. Some are reachable only through a
/// call-to-action jump or the skip redirection, never sequentially.
pub const SLIDE_COUNT: u16 = 13;

const MAX_SKIP_NODES: usize = 4;

const TRANSITION_MS: u16 = 1_000;
const CARRY_MS: u16 = 800;

/// One-shot narration tone chosen at the gate slide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Roast,
    Gentle,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideInfo {
    pub label: &'static str,
    pub transition: TransitionSpec,
}

/// Call-to-action buttons that navigate by explicit target instead of
/// the natural successor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CtaAction {
    /// "See how to save" on the savings teaser.
    SavingsDetail,
    /// Per-category offer button on the savings detail slide.
    CategoryOffer,
    /// Partner offer shortcut; the one route that leaves the bypass
    /// flag untouched.
    PartnerOffer,
    /// "See other options" on the partner slide.
    OtherOptions,
    /// "I switch" confirmation button.
    Confirm,
    /// Final "I confirm and switch" on the confirmation slide; leads to
    /// the feedback form.
    ConfirmSwitch,
    /// "Send my feedback" submit, returning to the confirmation slide.
    FeedbackSubmit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CtaRoute {
    pub target: u16,
    /// Arm the bypass flag so the next forward tap takes the natural
    /// successor instead of the skip redirection.
    pub arm_bypass: bool,
    /// Analytics tag reported when the route is taken.
    pub tag: Option<&'static str>,
}

/// The single branch rule of the deck: forward progress past `gate` is
/// blocked until a tone is chosen, and slides in the skip set redirect
/// straight to `terminal` unless bypassed.
pub struct BranchRule {
    gate: u16,
    skip_set: Vec<u16, MAX_SKIP_NODES>,
    terminal: u16,
}

impl BranchRule {
    pub fn gate(&self) -> u16 {
        self.gate
    }

    pub fn terminal(&self) -> u16 {
        self.terminal
    }

    pub fn skips(&self, index: u16) -> bool {
        self.skip_set.contains(&index)
    }
}

pub struct Deck {
    slides: [SlideInfo; SLIDE_COUNT as usize],
    branch: BranchRule,
    /// Moving forward out of this slide uses the carry transition.
    carry_from: u16,
}

impl Deck {
    /// The production deck of the spending-recap story.
    pub fn standard() -> Self {
        let slide = |label, kind| SlideInfo {
            label,
            transition: TransitionSpec::new(kind, TRANSITION_MS),
        };

        let mut skip_set = Vec::new();
        for index in [7u16, 8, 9] {
            // Capacity is MAX_SKIP_NODES; the literal set is smaller.
            let _ = skip_set.push(index);
        }

        Self {
            slides: [
                slide("intro", TransitionKind::PerspectiveFade),
                slide("tone-choice", TransitionKind::ScaleFade),
                slide("total-spend", TransitionKind::RiseFade),
                slide("top-category", TransitionKind::ScaleFade),
                slide("spend-profile", TransitionKind::RiseFade),
                slide("expense-list", TransitionKind::CrossFade),
                slide("savings-teaser", TransitionKind::RiseFade),
                slide("savings-detail", TransitionKind::ScaleFade),
                slide("category-offers", TransitionKind::RiseFade),
                slide("partner-offers", TransitionKind::ScaleFade),
                slide("confirmation", TransitionKind::CrossFade),
                slide("wrap-up", TransitionKind::PerspectiveFade),
                slide("share-feedback", TransitionKind::CrossFade),
            ],
            branch: BranchRule {
                gate: 1,
                skip_set,
                terminal: 11,
            },
            carry_from: 5,
        }
    }

    pub fn slide(&self, index: u16) -> &SlideInfo {
        let index = index.min(SLIDE_COUNT.saturating_sub(1));
        &self.slides[index as usize]
    }

    pub fn branch(&self) -> &BranchRule {
        &self.branch
    }

    /// Transition profile for entering `to` from `from`. The designated
    /// adjacent pair uses the carry profile on forward motion; everything
    /// else uses the target slide's own profile.
    pub fn transition_into(&self, from: u16, to: u16, direction: Direction) -> TransitionSpec {
        if direction == Direction::Forward
            && from == self.carry_from
            && to == self.carry_from.saturating_add(1)
        {
            return TransitionSpec::new(TransitionKind::CarryUp, CARRY_MS);
        }

        self.slide(to).transition
    }

    pub fn route(&self, action: CtaAction) -> CtaRoute {
        match action {
            CtaAction::SavingsDetail => CtaRoute {
                target: 7,
                arm_bypass: true,
                tag: Some(crate::analytics::tags::CTA_MAIN),
            },
            CtaAction::CategoryOffer => CtaRoute {
                target: 8,
                arm_bypass: true,
                tag: Some(crate::analytics::tags::CATEGORY_DETAIL),
            },
            CtaAction::PartnerOffer => CtaRoute {
                target: 9,
                arm_bypass: false,
                tag: None,
            },
            CtaAction::OtherOptions => CtaRoute {
                target: 9,
                arm_bypass: true,
                tag: Some(crate::analytics::tags::OTHER_OPTIONS),
            },
            CtaAction::Confirm => CtaRoute {
                target: 10,
                arm_bypass: true,
                tag: Some(crate::analytics::tags::CONFIRM),
            },
            CtaAction::ConfirmSwitch => CtaRoute {
                target: 8,
                arm_bypass: true,
                tag: Some(crate::analytics::tags::CONFIRM_SWITCH),
            },
            CtaAction::FeedbackSubmit => CtaRoute {
                target: 10,
                arm_bypass: false,
                tag: None,
            },
        }
    }
}
