use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shortest auto-advance delay, in milliseconds.
pub const MIN_STEP_DELAY_MS: f32 = 500.0;
/// Longest auto-advance delay, in milliseconds.
pub const MAX_STEP_DELAY_MS: f32 = 3000.0;

/// Step transport settings used by the player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Time between auto-advanced steps, in milliseconds.
    #[schemars(
        title = "Step Delay",
        range(min = 500.0, max = 3000.0),
        extend("step" = 100.0)
    )]
    pub step_delay_ms: f32,
    /// Frame rate the headless runner paces itself at.
    #[schemars(title = "Target FPS", range(min = 1, max = 240))]
    pub target_fps: u32,
    /// Restart from the first step after the last one.
    #[schemars(title = "Loop")]
    pub looping: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            step_delay_ms: 1500.0,
            target_fps: 60,
            looping: false,
        }
    }
}

impl PlaybackOptions {
    /// `step_delay_ms` clamped to the supported range.
    #[must_use]
    pub fn clamped_step_delay_ms(&self) -> f32 {
        clamp_step_delay(self.step_delay_ms)
    }
}

/// Clamp a step delay to `MIN_STEP_DELAY_MS..=MAX_STEP_DELAY_MS`. NaN maps
/// to the minimum.
#[must_use]
pub fn clamp_step_delay(ms: f32) -> f32 {
    if ms.is_nan() {
        return MIN_STEP_DELAY_MS;
    }
    ms.clamp(MIN_STEP_DELAY_MS, MAX_STEP_DELAY_MS)
}
