//! Tween records: active interpolations and delay-gated pending ones.

use super::transform::{Transform, TransformTarget};
use crate::scene::EntityId;
use crate::util::easing::Easing;

/// A running interpolation of one entity's transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Entity being animated.
    pub entity: EntityId,
    /// Channels to animate and their end values.
    pub target: TransformTarget,
    /// Total duration in milliseconds.
    pub duration_ms: f32,
    /// Milliseconds advanced so far; only grows through scheduler ticks.
    pub elapsed_ms: f32,
    /// Entity transform when the tween became active.
    pub start: Transform,
    /// Curve applied to raw progress.
    pub easing: Easing,
}

impl Tween {
    /// Start a tween from the snapshot `start`.
    #[must_use]
    pub fn new(
        entity: EntityId,
        start: Transform,
        target: TransformTarget,
        duration_ms: f32,
        easing: Easing,
    ) -> Self {
        Self {
            entity,
            target,
            duration_ms,
            elapsed_ms: 0.0,
            start,
            easing,
        }
    }

    /// Raw progress `elapsed / duration`, clamped to `[0, 1]`. A zero (or
    /// otherwise non-positive) duration is complete immediately.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased progress.
    #[inline]
    #[must_use]
    pub fn eased_progress(&self) -> f32 {
        self.easing.evaluate(self.progress())
    }

    /// Whether progress reached 1.0.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// A tween waiting for the scheduler clock to reach its delay.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTween {
    /// Entity to animate.
    pub entity: EntityId,
    /// Channels to animate and their end values.
    pub target: TransformTarget,
    /// Duration once started, in milliseconds.
    pub duration_ms: f32,
    /// Curve applied to raw progress.
    pub easing: Easing,
    /// Scheduler time (ms since the last clear) at which the tween starts.
    pub delay_ms: f32,
}

impl ScheduledTween {
    /// Whether the scheduler clock has reached the delay.
    #[must_use]
    pub fn is_due(&self, clock_ms: f32) -> bool {
        clock_ms >= self.delay_ms
    }

    /// Turn into an active tween starting from `snapshot`.
    #[must_use]
    pub fn start(self, snapshot: Transform) -> Tween {
        Tween::new(
            self.entity,
            snapshot,
            self.target,
            self.duration_ms,
            self.easing,
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn tween(duration_ms: f32) -> Tween {
        Tween::new(
            EntityId(0),
            Transform::IDENTITY,
            TransformTarget::position(Vec3::X),
            duration_ms,
            Easing::InOutCubic,
        )
    }

    #[test]
    fn progress_clamps_to_one() {
        let mut t = tween(400.0);
        t.elapsed_ms = 100.0;
        assert!((t.progress() - 0.25).abs() < 1e-6);
        assert!(!t.is_done());
        for elapsed in [400.0, 401.0, 10_000.0] {
            t.elapsed_ms = elapsed;
            assert_eq!(t.progress(), 1.0);
            assert!(t.is_done());
        }
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let t = tween(0.0);
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.eased_progress(), 1.0);
        assert!(t.is_done());
        assert!(tween(-5.0).is_done());
        assert!(tween(f32::NAN).is_done());
    }

    #[test]
    fn scheduled_tween_gates_on_clock() {
        let pending = ScheduledTween {
            entity: EntityId(3),
            target: TransformTarget::uniform_scale(2.0),
            duration_ms: 300.0,
            easing: Easing::OutBounce,
            delay_ms: 550.0,
        };
        assert!(!pending.is_due(549.9));
        assert!(pending.is_due(550.0));

        let snapshot = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        let active = pending.start(snapshot);
        assert_eq!(active.start, snapshot);
        assert_eq!(active.elapsed_ms, 0.0);
        assert_eq!(active.entity, EntityId(3));
    }
}
