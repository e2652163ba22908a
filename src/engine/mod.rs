//! Step reconciliation engine.
//!
//! One [`FamilyVisualizer`] per algorithm family owns that family's
//! entities and its own [`TweenScheduler`]. [`VisualizationEngine`] routes
//! each incoming step to the right visualizer, clearing the scene whenever
//! the family changes, and forwards the per-frame clock to whichever
//! family is active.

pub mod pointer;
pub mod sliding_window;
pub mod sorting;

use self::pointer::PointerVisualizer;
use self::sliding_window::SlidingWindowVisualizer;
use self::sorting::SortingVisualizer;
use crate::animation::TweenScheduler;
use crate::options::Options;
use crate::scene::Scene;
use crate::step::{Family, Step};

/// Scene reconciler plus tween scheduler for one algorithm family.
pub trait FamilyVisualizer {
    /// Family this visualizer draws.
    fn family(&self) -> Family;

    /// Dispose this family's entities and rebuild them from `step`,
    /// cancelling any in-flight tweens first.
    fn reconcile(&mut self, step: &Step, scene: &mut Scene, options: &Options);

    /// Advance this family's tweens by `dt_ms`.
    fn update_animations(&mut self, dt_ms: f32, scene: &mut Scene);

    /// Apply one frame of ambient rotation.
    fn idle_motion(&self, scene: &mut Scene);

    /// Dispose every entity this visualizer owns and clear its tweens.
    fn dispose(&mut self, scene: &mut Scene);

    /// Number of live entities owned by this visualizer.
    fn entity_count(&self) -> usize;

    /// This family's scheduler.
    fn scheduler(&self) -> &TweenScheduler;

    /// Whether any tween is running or waiting.
    fn is_animating(&self) -> bool {
        !self.scheduler().is_idle()
    }
}

/// Owns the scene and routes steps to the three family visualizers.
#[derive(Debug, Default)]
pub struct VisualizationEngine {
    scene: Scene,
    options: Options,
    pointer: PointerVisualizer,
    sorting: SortingVisualizer,
    sliding_window: SlidingWindowVisualizer,
    active: Option<Family>,
    description: Option<String>,
}

impl VisualizationEngine {
    /// Engine with an empty scene.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Split borrow of the visualizer for `family` alongside the scene and
    /// options.
    fn parts(
        &mut self,
        family: Family,
    ) -> (&mut dyn FamilyVisualizer, &mut Scene, &Options) {
        let visualizer: &mut dyn FamilyVisualizer = match family {
            Family::Pointer => &mut self.pointer,
            Family::Sorting => &mut self.sorting,
            Family::SlidingWindow => &mut self.sliding_window,
        };
        (visualizer, &mut self.scene, &self.options)
    }

    fn visualizer(&self, family: Family) -> &dyn FamilyVisualizer {
        match family {
            Family::Pointer => &self.pointer,
            Family::Sorting => &self.sorting,
            Family::SlidingWindow => &self.sliding_window,
        }
    }

    /// Reconcile the scene to `step`.
    ///
    /// A step of a different family than the previous one clears the scene
    /// first. A step that fits no family clears the scene and shows
    /// nothing.
    pub fn show_step(&mut self, step: &Step) {
        self.description.clone_from(&step.description);

        let Some(family) = step.family() else {
            log::debug!("step has no recognisable shape, clearing scene");
            self.teardown();
            return;
        };

        if self.active != Some(family) {
            if let Some(previous) = self.active {
                log::info!("switching visualization {previous} -> {family}");
            } else {
                log::info!("starting {family} visualization");
            }
            self.teardown();
            self.active = Some(family);
        }

        let (visualizer, scene, options) = self.parts(family);
        visualizer.reconcile(step, scene, options);
    }

    /// Advance the active family's tweens by `dt_ms`, then apply idle
    /// motion if enabled.
    pub fn advance(&mut self, dt_ms: f32) {
        let Some(family) = self.active else {
            return;
        };
        let (visualizer, scene, options) = self.parts(family);
        visualizer.update_animations(dt_ms, scene);
        if options.motion.idle_spin {
            visualizer.idle_motion(scene);
        }
    }

    /// Dispose every entity of every family.
    pub fn teardown(&mut self) {
        for family in Family::ALL {
            let (visualizer, scene, _) = self.parts(family);
            visualizer.dispose(scene);
        }
        self.scene.clear();
        self.active = None;
    }

    /// Whether the active family has tweens in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active
            .is_some_and(|family| self.visualizer(family).is_animating())
    }

    /// Description of the last step shown.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Family of the current visualization.
    #[must_use]
    pub fn active_family(&self) -> Option<Family> {
        self.active
    }

    /// Number of entities owned by the active family.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.active
            .map_or(0, |family| self.visualizer(family).entity_count())
    }

    /// The scene being drawn.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access (e.g. for a renderer to mark frames drawn).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
