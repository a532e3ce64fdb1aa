//! Asset preload gating.

/// Gate consulted before any navigation; while not ready, every
/// navigation request is dropped.
pub trait AssetGate {
    fn is_ready(&self) -> bool;
}

/// Gate that is always ready.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadyAssets;

impl ReadyAssets {
    pub const fn new() -> Self {
        Self
    }
}

impl AssetGate for ReadyAssets {
    fn is_ready(&self) -> bool {
        true
    }
}
