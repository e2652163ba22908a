//! Shared utilities for the animation engine.
//!
//! Helpers for easing curves and wall-clock frame pacing.

pub mod easing;
pub mod frame_timing;
