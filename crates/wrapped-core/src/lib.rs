//! Slide-flow controller for the Wrapped story experience.
//!
//! The crate owns the navigation state machine only: which slide is
//! current, how the one-shot tone choice gates forward progress, which
//! slides redirect to the wrap-up unless a call-to-action armed the
//! bypass flag, and the generation-tagged transition timing that keeps
//! navigation single-file while a slide change animates. Everything
//! visual is derived by a front-end from the read-only [`render::Screen`]
//! snapshot.

#![cfg_attr(not(test), no_std)]

pub mod analytics;
pub mod app;
pub mod assets;
pub mod deck;
pub mod engine;
pub mod input;
pub mod render;
