//! Step transport: play/pause/seek over a [`StepFile`] with a timed
//! auto-advance.
//!
//! The player only decides *which* step is current. Callers forward the
//! step it reports to [`VisualizationEngine::show_step`](crate::engine::VisualizationEngine::show_step).

use crate::options::{clamp_step_delay, PlaybackOptions};
use crate::step::{Step, StepFile};

/// Step sequencer that auto-advances with a configurable delay.
#[derive(Debug, Clone)]
pub struct Player {
    file: StepFile,
    current_step: usize,
    playing: bool,
    looping: bool,
    step_delay_ms: f32,
    /// Time accumulated towards the next auto-advance.
    since_advance_ms: f32,
}

impl Player {
    /// Paused player at step 0.
    #[must_use]
    pub fn new(file: StepFile, playback: &PlaybackOptions) -> Self {
        Self {
            file,
            current_step: 0,
            playing: false,
            looping: playback.looping,
            step_delay_ms: playback.clamped_step_delay_ms(),
            since_advance_ms: 0.0,
        }
    }

    /// Accumulate `dt_ms` of playback time and return the new step index if
    /// the step changed. Advances at most one step per call. Stops on the
    /// last step unless looping.
    pub fn tick(&mut self, dt_ms: f32) -> Option<usize> {
        if !self.playing || self.file.is_empty() {
            return None;
        }
        self.since_advance_ms += dt_ms.max(0.0);
        if self.since_advance_ms < self.step_delay_ms {
            return None;
        }
        self.since_advance_ms = 0.0;

        let next = self.current_step + 1;
        if next < self.file.len() {
            self.current_step = next;
        } else if self.looping {
            self.current_step = 0;
        } else {
            self.playing = false;
            return None;
        }
        Some(self.current_step)
    }

    /// Start auto-advancing. Restarts from the first step when sitting on
    /// the last one.
    pub fn play(&mut self) {
        if self.is_at_end() {
            self.current_step = 0;
        }
        self.playing = true;
        self.since_advance_ms = 0.0;
    }

    /// Stop auto-advancing.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle between playing and paused states.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step forward once. Returns the new index, or `None` at the end.
    pub fn next_step(&mut self) -> Option<usize> {
        self.seek(self.current_step + 1)
    }

    /// Step back once. Returns the new index, or `None` at the start.
    pub fn prev_step(&mut self) -> Option<usize> {
        let index = self.current_step.checked_sub(1)?;
        self.seek(index)
    }

    /// Pause and return to the first step.
    pub fn reset(&mut self) {
        self.playing = false;
        self.current_step = 0;
        self.since_advance_ms = 0.0;
    }

    /// Jump to `index`. Returns `None` (and stays put) when out of range.
    pub fn seek(&mut self, index: usize) -> Option<usize> {
        if index >= self.file.len() {
            return None;
        }
        self.current_step = index;
        self.since_advance_ms = 0.0;
        Some(index)
    }

    /// Set the auto-advance delay, clamped to the supported range.
    pub fn set_step_delay(&mut self, ms: f32) {
        self.step_delay_ms = clamp_step_delay(ms);
    }

    /// Enable or disable looping at the end of the trace.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Current step, if the trace is not empty.
    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        self.file.steps.get(self.current_step)
    }

    /// Index of the current step.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Total number of steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.file.len()
    }

    /// Whether the player is auto-advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current auto-advance delay.
    #[must_use]
    pub fn step_delay_ms(&self) -> f32 {
        self.step_delay_ms
    }

    /// Whether the current step is the last one.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current_step + 1 >= self.file.len()
    }
}
