//! Sorting-family visualizer: a centred row of spheres coloured by
//! comparison/sorted state, with the scripted swap gesture.

use glam::Vec3;

use super::FamilyVisualizer;
use crate::animation::choreography::perform_swap;
use crate::animation::transform::Transform;
use crate::animation::TweenScheduler;
use crate::options::Options;
use crate::scene::{EntityId, EntityKind, Highlight, Scene, VisualEntity};
use crate::step::{contains_index, Family, Step};

/// Per-frame idle rotation of resting spheres.
const SPHERE_SPIN: Vec3 = Vec3::new(0.001, 0.002, 0.0005);
/// Spheres higher than this above home are mid-gesture and do not idle.
const REST_TOLERANCE: f32 = 0.5;

/// Highlight of element `index`. Sorted beats comparing.
#[must_use]
pub fn sorting_highlight(step: &Step, index: usize) -> Highlight {
    if contains_index(step.sorted(), index) {
        Highlight::Sorted
    } else if contains_index(step.comparing(), index) {
        Highlight::Comparison
    } else {
        Highlight::Default
    }
}

/// Spheres of the current sorting step.
#[derive(Debug, Default)]
pub struct SortingVisualizer {
    scheduler: TweenScheduler,
    elements: Vec<EntityId>,
}

impl SortingVisualizer {
    /// Empty visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the row for `step`, apply highlights immediately and queue
    /// the swap gesture when the step names a valid pair.
    pub fn update_sorting_visualization(
        &mut self,
        step: &Step,
        scene: &mut Scene,
        options: &Options,
    ) {
        self.scheduler.clear();
        scene.dispose_all(&mut self.elements);

        let layout = &options.layout;
        let colors = &options.colors;
        let values = step.array();
        for (index, &value) in values.iter().enumerate() {
            let highlight = sorting_highlight(step, index);
            let mut entity = VisualEntity::new(
                EntityKind::Sphere {
                    radius: layout.sphere_radius,
                },
                Transform::at(layout.row_position(index, values.len())),
                colors.sphere_material(colors.style(highlight)),
                scene.resources_mut(),
            )
            .with_value(value)
            .at_index(index, 0);
            entity.highlight = highlight;
            self.elements.push(scene.attach(entity));
        }

        match step.swap_pair() {
            Some((a, b)) => {
                let (left, right) = (self.elements[a], self.elements[b]);
                if !perform_swap(&mut self.scheduler, scene, left, right) {
                    log::debug!("swap {left} <-> {right} skipped, sphere not in scene");
                }
            }
            None if step.swap.is_some() => {
                log::debug!("swap {:?} is not a valid pair, skipped", step.swap);
            }
            None => {}
        }

        log::debug!("sorting pass: {} spheres", self.elements.len());
    }

    /// Live sphere ids in array order.
    #[must_use]
    pub fn elements(&self) -> &[EntityId] {
        &self.elements
    }
}

impl FamilyVisualizer for SortingVisualizer {
    fn family(&self) -> Family {
        Family::Sorting
    }

    fn reconcile(&mut self, step: &Step, scene: &mut Scene, options: &Options) {
        self.update_sorting_visualization(step, scene, options);
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
    }

    fn entity_count(&self) -> usize {
        self.elements.len()
    }

    fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }
}

/// Rotate every sphere in `ids` that sits within rest tolerance of its home.
pub(crate) fn idle_spin_resting(scene: &mut Scene, ids: &[EntityId]) {
    for &id in ids {
        let Some(entity) = scene.entity(id) else {
            continue;
        };
        if entity.transform.position.y > entity.home.y + REST_TOLERANCE {
            continue;
        }
        if let Some(transform) = scene.transform_mut(id) {
            transform.rotation += SPHERE_SPIN;
        }
    }
}
