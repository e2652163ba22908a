//! Frame-driven tween scheduler.
//!
//! The scheduler owns two queues: active tweens, which advance every tick,
//! and pending tweens, which wait until the scheduler's own clock reaches
//! their delay. The clock counts milliseconds of `tick` time since the last
//! [`TweenScheduler::clear`], so every delay is an absolute offset from the
//! start of the current step rather than from the previous tween.

use super::transform::TransformTarget;
use super::tween::{ScheduledTween, Tween};
use crate::scene::{EntityId, Scene};
use crate::util::easing::Easing;

/// Active and delay-gated tween queues sharing one clock.
#[derive(Debug, Default)]
pub struct TweenScheduler {
    active: Vec<Tween>,
    pending: Vec<ScheduledTween>,
    /// Milliseconds ticked since the last clear.
    clock_ms: f32,
}

impl TweenScheduler {
    /// Empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween now. The start snapshot is the entity's transform at
    /// this call. Entities missing from `scene` are ignored.
    pub fn add(
        &mut self,
        scene: &Scene,
        entity: EntityId,
        target: TransformTarget,
        duration_ms: f32,
        easing: Easing,
    ) {
        let Some(start) = scene.transform(entity) else {
            log::debug!("tween for detached entity {entity} dropped");
            return;
        };
        self.active
            .push(Tween::new(entity, start, target, duration_ms, easing));
    }

    /// Queue a tween that starts once the clock reaches `delay_ms`. Its start
    /// snapshot is taken at promotion time, not now.
    pub fn schedule(
        &mut self,
        entity: EntityId,
        target: TransformTarget,
        duration_ms: f32,
        easing: Easing,
        delay_ms: f32,
    ) {
        self.pending.push(ScheduledTween {
            entity,
            target,
            duration_ms,
            easing,
            delay_ms,
        });
    }

    /// Advance the clock and every tween by `dt_ms`, writing interpolated
    /// transforms into `scene`.
    ///
    /// Due pending tweens are promoted first, snapshotting the entity as it
    /// is at that moment, and then advance in the same tick. Tweens that
    /// reach full progress are removed.
    pub fn tick(&mut self, dt_ms: f32, scene: &mut Scene) {
        let dt_ms = dt_ms.max(0.0);
        self.clock_ms += dt_ms;
        self.promote_due(scene);

        self.active.retain_mut(|tween| {
            tween.elapsed_ms += dt_ms;
            let Some(current) = scene.transform_mut(tween.entity) else {
                return false;
            };
            tween
                .target
                .apply(&tween.start, current, tween.eased_progress());
            !tween.is_done()
        });
    }

    fn promote_due(&mut self, scene: &Scene) {
        if self.pending.is_empty() {
            return;
        }
        let clock_ms = self.clock_ms;
        for scheduled in std::mem::take(&mut self.pending) {
            if !scheduled.is_due(clock_ms) {
                self.pending.push(scheduled);
                continue;
            }
            if let Some(snapshot) = scene.transform(scheduled.entity) {
                self.active.push(scheduled.start(snapshot));
            }
        }
    }

    /// Drop every active and pending tween and reset the clock to zero.
    /// Entities stay wherever they were last interpolated to.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pending.clear();
        self.clock_ms = 0.0;
    }

    /// Milliseconds ticked since the last clear.
    #[must_use]
    pub fn elapsed_ms(&self) -> f32 {
        self.clock_ms
    }

    /// Running tweens.
    #[must_use]
    pub fn active(&self) -> &[Tween] {
        &self.active
    }

    /// Tweens waiting for their delay.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTween] {
        &self.pending
    }

    /// Whether both queues are empty.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::animation::transform::Transform;
    use crate::scene::{EntityKind, Material, VisualEntity};

    fn scene_with_entity(position: Vec3) -> (Scene, EntityId) {
        let mut scene = Scene::new();
        let entity = VisualEntity::new(
            EntityKind::Sphere { radius: 1.5 },
            Transform::at(position),
            Material::solid(0x63_66_f1),
            scene.resources_mut(),
        );
        let id = scene.attach(entity);
        (scene, id)
    }

    fn position(scene: &Scene, id: EntityId) -> Vec3 {
        scene.transform(id).map_or(Vec3::NAN, |t| t.position)
    }

    #[test]
    fn add_snapshots_at_enqueue_time() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.add(
            &scene,
            id,
            TransformTarget::position(Vec3::new(10.0, 0.0, 0.0)),
            100.0,
            Easing::InOutCubic,
        );
        // Moving the entity after enqueue does not change the start.
        if let Some(t) = scene.transform_mut(id) {
            t.position = Vec3::new(5.0, 5.0, 5.0);
        }
        scheduler.tick(50.0, &mut scene);
        let p = position(&scene, id);
        assert!((p.x - 5.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn completed_tween_lands_on_target_and_is_removed() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.add(
            &scene,
            id,
            TransformTarget::position(Vec3::new(0.0, 3.0, 0.0)),
            200.0,
            Easing::OutElastic,
        );
        scheduler.tick(100.0, &mut scene);
        assert_eq!(scheduler.active().len(), 1);
        scheduler.tick(150.0, &mut scene);
        assert!(scheduler.active().is_empty());
        assert_eq!(position(&scene, id), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn zero_duration_tween_finishes_on_first_tick() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.add(
            &scene,
            id,
            TransformTarget::uniform_scale(2.0),
            0.0,
            Easing::InOutCubic,
        );
        scheduler.tick(0.0, &mut scene);
        assert!(scheduler.is_idle());
        assert_eq!(scene.transform(id).map(|t| t.scale), Some(Vec3::splat(2.0)));
    }

    #[test]
    fn pending_tween_snapshots_at_promotion_time() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.schedule(
            id,
            TransformTarget::position(Vec3::new(0.0, 10.0, 0.0)),
            300.0,
            Easing::InOutCubic,
            200.0,
        );
        scheduler.tick(100.0, &mut scene);
        assert_eq!(scheduler.pending().len(), 1);
        assert!(scheduler.active().is_empty());

        // Entity moves between scheduling and promotion.
        if let Some(t) = scene.transform_mut(id) {
            t.position = Vec3::new(4.0, 2.0, 0.0);
        }
        scheduler.tick(100.0, &mut scene);
        assert!(scheduler.pending().is_empty());
        assert_eq!(scheduler.active().len(), 1);
        assert_eq!(scheduler.active()[0].start.position, Vec3::new(4.0, 2.0, 0.0));

        scheduler.tick(200.0, &mut scene);
        assert!(scheduler.is_idle());
        assert_eq!(position(&scene, id), Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn promoted_tween_advances_in_the_same_tick() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.schedule(
            id,
            TransformTarget::position(Vec3::X),
            100.0,
            Easing::InOutCubic,
            50.0,
        );
        scheduler.tick(60.0, &mut scene);
        assert!((scheduler.active()[0].elapsed_ms - 60.0).abs() < 1e-6);
    }

    #[test]
    fn clear_then_tick_leaves_clock_at_dt() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.add(&scene, id, TransformTarget::uniform_scale(1.2), 500.0, Easing::OutElastic);
        scheduler.schedule(id, TransformTarget::uniform_scale(1.0), 500.0, Easing::OutBounce, 900.0);
        scheduler.tick(300.0, &mut scene);

        scheduler.clear();
        assert_eq!(scheduler.elapsed_ms(), 0.0);
        scheduler.tick(16.0, &mut scene);
        assert_eq!(scheduler.elapsed_ms(), 16.0);
        assert!(scheduler.active().is_empty());
        assert!(scheduler.pending().is_empty());
    }

    #[test]
    fn clear_leaves_entity_mid_flight() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.add(
            &scene,
            id,
            TransformTarget::position(Vec3::new(8.0, 0.0, 0.0)),
            100.0,
            Easing::InOutCubic,
        );
        scheduler.tick(50.0, &mut scene);
        let mid = position(&scene, id);
        scheduler.clear();
        scheduler.tick(100.0, &mut scene);
        assert_eq!(position(&scene, id), mid);
    }

    #[test]
    fn tweens_for_disposed_entities_are_dropped() {
        let (mut scene, id) = scene_with_entity(Vec3::ZERO);
        let mut scheduler = TweenScheduler::new();
        scheduler.add(&scene, id, TransformTarget::uniform_scale(2.0), 100.0, Easing::InOutCubic);
        scheduler.schedule(id, TransformTarget::uniform_scale(1.0), 100.0, Easing::InOutCubic, 10.0);
        assert!(scene.dispose(id));
        scheduler.tick(20.0, &mut scene);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn negative_dt_does_not_rewind_clock() {
        let mut scene = Scene::new();
        let mut scheduler = TweenScheduler::new();
        scheduler.tick(10.0, &mut scene);
        scheduler.tick(-5.0, &mut scene);
        assert_eq!(scheduler.elapsed_ms(), 10.0);
    }
}
