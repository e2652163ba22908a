//! Sliding-window visualizer: a centred row of spheres with the current
//! window's members enlarged and outlined by a wireframe frame.

use glam::Vec3;

use super::sorting::idle_spin_resting;
use super::FamilyVisualizer;
use crate::animation::transform::{Transform, TransformTarget};
use crate::animation::TweenScheduler;
use crate::options::Options;
use crate::scene::{EntityId, EntityKind, Highlight, Scene, VisualEntity};
use crate::step::{Family, Step};
use crate::util::easing::Easing;

const IN_WINDOW_SCALE: f32 = 1.15;
const IN_WINDOW_MS: f32 = 600.0;
const OUT_OF_WINDOW_MS: f32 = 400.0;
/// Starting x/y scale of the frame's entrance.
const FRAME_ENTRANCE_SCALE: f32 = 0.85;
const FRAME_ENTRANCE_MS: f32 = 800.0;

/// Spheres and the window frame of the current sliding-window step.
#[derive(Debug, Default)]
pub struct SlidingWindowVisualizer {
    scheduler: TweenScheduler,
    elements: Vec<EntityId>,
    frame: Option<EntityId>,
}

impl SlidingWindowVisualizer {
    /// Empty visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the row and frame for `step`. Membership follows the raw
    /// `[start, end]` pair; the frame is drawn only when both endpoints are
    /// in range and `start <= end`.
    pub fn update_sliding_window_visualization(
        &mut self,
        step: &Step,
        scene: &mut Scene,
        options: &Options,
    ) {
        self.dispose(scene);

        let layout = &options.layout;
        let colors = &options.colors;
        let values = step.array();
        let range = step.window_range();
        if range.is_none() && step.window.is_some() {
            log::debug!("window {:?} is out of range, no frame drawn", step.window);
        }

        for (index, &value) in values.iter().enumerate() {
            let in_window = step.in_window(index);
            let (highlight, style) = if in_window {
                (Highlight::Active, colors.in_window)
            } else {
                (Highlight::Default, colors.default)
            };
            let mut entity = VisualEntity::new(
                EntityKind::Sphere {
                    radius: layout.sphere_radius,
                },
                Transform::at(layout.row_position(index, values.len())),
                colors.sphere_material(style),
                scene.resources_mut(),
            )
            .with_value(value)
            .at_index(index, 0);
            entity.highlight = highlight;
            let id = scene.attach(entity);
            self.elements.push(id);

            let (scale, duration, easing) = if in_window {
                (IN_WINDOW_SCALE, IN_WINDOW_MS, Easing::OutElastic)
            } else {
                (1.0, OUT_OF_WINDOW_MS, Easing::InOutCubic)
            };
            self.scheduler.add(
                scene,
                id,
                TransformTarget::uniform_scale(scale),
                duration,
                easing,
            );
        }

        if let Some((start, end)) = range {
            self.spawn_frame(scene, options, start, end, values.len());
        }

        log::debug!(
            "sliding-window pass: {} spheres, window {:?}",
            self.elements.len(),
            range
        );
    }

    fn spawn_frame(
        &mut self,
        scene: &mut Scene,
        options: &Options,
        start: usize,
        end: usize,
        len: usize,
    ) {
        let layout = &options.layout;
        let first = layout.row_position(start, len);
        let last = layout.row_position(end, len);
        let width = (last.x - first.x) + layout.element_spacing;
        let center = Vec3::new(
            first.x + width / 2.0 - layout.element_spacing / 2.0,
            first.y,
            0.0,
        );
        let entity = VisualEntity::new(
            EntityKind::WindowFrame {
                width,
                height: layout.window_frame_height,
                depth: layout.window_frame_depth,
            },
            Transform::at(center).with_scale(Vec3::new(
                FRAME_ENTRANCE_SCALE,
                FRAME_ENTRANCE_SCALE,
                1.0,
            )),
            options.colors.window_frame_material(),
            scene.resources_mut(),
        )
        .at_index(start, 0);
        let id = scene.attach(entity);
        self.frame = Some(id);

        self.scheduler.add(
            scene,
            id,
            TransformTarget::uniform_scale(1.0),
            FRAME_ENTRANCE_MS,
            Easing::OutElastic,
        );
    }

    /// Live sphere ids in array order.
    #[must_use]
    pub fn elements(&self) -> &[EntityId] {
        &self.elements
    }

    /// The window frame, if the current step has a valid window.
    #[must_use]
    pub fn frame(&self) -> Option<EntityId> {
        self.frame
    }
}

impl FamilyVisualizer for SlidingWindowVisualizer {
    fn family(&self) -> Family {
        Family::SlidingWindow
    }

    fn reconcile(&mut self, step: &Step, scene: &mut Scene, options: &Options) {
        self.update_sliding_window_visualization(step, scene, options);
    }

    fn update_animations(&mut self, dt_ms: f32, scene: &mut Scene) {
        self.scheduler.tick(dt_ms, scene);
    }

    fn idle_motion(&self, scene: &mut Scene) {
        idle_spin_resting(scene, &self.elements);
    }

    fn dispose(&mut self, scene: &mut Scene) {
        self.scheduler.clear();
        scene.dispose_all(&mut self.elements);
        if let Some(frame) = self.frame.take() {
            let _ = scene.dispose(frame);
        }
    }

    fn entity_count(&self) -> usize {
        self.elements.len() + usize::from(self.frame.is_some())
    }

    fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }
}
