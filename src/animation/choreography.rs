//! Scripted multi-phase gestures.
//!
//! A swap is five phases per element: pickup, throw, two bounces and a
//! final settle. Phase 1 starts immediately; phases 2-5 are queued on the
//! scheduler with absolute start offsets, so all ten tweens stay on the
//! scheduler's single clock regardless of frame rate.

use std::f32::consts::PI;

use glam::Vec3;

use super::scheduler::TweenScheduler;
use super::transform::TransformTarget;
use crate::scene::{EntityId, Scene};
use crate::util::easing::Easing;

/// Timing of one choreography phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// Phase name, for logging.
    pub name: &'static str,
    /// Start offset from the scheduler clock's zero, in milliseconds.
    pub start_ms: f32,
    /// Duration in milliseconds.
    pub duration_ms: f32,
    /// Curve applied during the phase.
    pub easing: Easing,
}

impl Phase {
    /// Scheduler time at which the phase ends.
    #[must_use]
    pub fn end_ms(&self) -> f32 {
        self.start_ms + self.duration_ms
    }
}

/// Phase table of the swap gesture.
pub const SWAP_PHASES: [Phase; 5] = [
    Phase {
        name: "pickup",
        start_ms: 0.0,
        duration_ms: 500.0,
        easing: Easing::OutElastic,
    },
    Phase {
        name: "throw",
        start_ms: 550.0,
        duration_ms: 700.0,
        easing: Easing::InOutCubic,
    },
    Phase {
        name: "first-bounce",
        start_ms: 1350.0,
        duration_ms: 500.0,
        easing: Easing::OutBounce,
    },
    Phase {
        name: "second-bounce",
        start_ms: 1950.0,
        duration_ms: 400.0,
        easing: Easing::OutBounce,
    },
    Phase {
        name: "settle",
        start_ms: 2450.0,
        duration_ms: 300.0,
        easing: Easing::OutBounce,
    },
];

const PICKUP_HEIGHT: f32 = 10.0;
const PICKUP_DEPTH: f32 = 2.0;
const PICKUP_SCALE: f32 = 1.1;
const PICKUP_TILT: Vec3 = Vec3::new(0.2, 0.3, 0.0);
const THROW_HEIGHT: f32 = 15.0;
const THROW_DEPTH: f32 = 3.0;
const THROW_SPIN: Vec3 = Vec3::new(2.0 * PI, PI, PI);
const FIRST_BOUNCE: f32 = 2.5;
const SECOND_BOUNCE: f32 = 1.2;

/// Per-phase targets for an element travelling from `home` to `dest`.
/// `spin` is `1.0` or `-1.0` and mirrors the tilt and throw rotation so the
/// two elements of a swap turn in opposite directions.
#[must_use]
pub fn swap_targets(home: Vec3, dest: Vec3, spin: f32) -> [TransformTarget; 5] {
    [
        TransformTarget::position(Vec3::new(home.x, PICKUP_HEIGHT, PICKUP_DEPTH))
            .with_scale(Vec3::splat(PICKUP_SCALE))
            .with_rotation(PICKUP_TILT * spin),
        TransformTarget::position(Vec3::new(dest.x, THROW_HEIGHT, THROW_DEPTH))
            .with_rotation(THROW_SPIN * spin),
        TransformTarget::position(Vec3::new(dest.x, dest.y + FIRST_BOUNCE, 0.0))
            .with_scale(Vec3::ONE)
            .with_rotation(Vec3::ZERO),
        TransformTarget::position(Vec3::new(dest.x, dest.y + SECOND_BOUNCE, 0.0)),
        TransformTarget::position(Vec3::new(dest.x, dest.y, 0.0)),
    ]
}

/// Total length of the swap gesture in milliseconds.
#[must_use]
pub fn swap_duration_ms() -> f32 {
    SWAP_PHASES
        .iter()
        .map(Phase::end_ms)
        .fold(0.0, f32::max)
}

/// Queue the swap gesture for entities `a` and `b`: each travels to the
/// other's current position. Returns `false` (and queues nothing) when
/// either entity is not in the scene.
pub fn perform_swap(
    scheduler: &mut TweenScheduler,
    scene: &Scene,
    a: EntityId,
    b: EntityId,
) -> bool {
    let (Some(a_start), Some(b_start)) = (scene.transform(a), scene.transform(b))
    else {
        return false;
    };
    let legs = [
        (a, a_start.position, b_start.position, 1.0),
        (b, b_start.position, a_start.position, -1.0),
    ];

    for (entity, home, dest, spin) in legs {
        let targets = swap_targets(home, dest, spin);
        for (phase, target) in SWAP_PHASES.iter().zip(targets) {
            log::trace!("{entity}: {} at {}ms", phase.name, phase.start_ms);
            if phase.start_ms <= 0.0 {
                scheduler.add(scene, entity, target, phase.duration_ms, phase.easing);
            } else {
                scheduler.schedule(
                    entity,
                    target,
                    phase.duration_ms,
                    phase.easing,
                    phase.start_ms,
                );
            }
        }
    }
    log::debug!("swap queued for {a} <-> {b}");
    true
}
