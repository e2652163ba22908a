//! Pointer-family visualizer: one lane of blocks per array, with named
//! pointer markers dropping onto their columns.

use glam::Vec3;

use super::FamilyVisualizer;
use crate::animation::transform::{Transform, TransformTarget};
use crate::animation::TweenScheduler;
use crate::options::Options;
use crate::scene::{
    EntityId, EntityKind, Highlight, Material, Scene, VisualEntity,
};
use crate::step::{Family, Step};
use crate::util::easing::Easing;

/// Scale of a highlighted block.
const ACTIVE_SCALE: f32 = 1.15;
/// Duration of the highlight scale and the pointer drop-in.
const FEEDBACK_MS: f32 = 600.0;
/// Emissive strength of pointer markers.
const POINTER_GLOW: f32 = 0.5;
/// Per-frame idle rotation of resting blocks.
const BLOCK_SPIN: Vec3 = Vec3::new(0.001, 0.002, 0.0);
/// Per-frame spin of a pointer's glow ring.
const RING_SPIN: f32 = 0.02;

/// Blocks and pointer markers of the current pointer step.
#[derive(Debug, Default)]
pub struct PointerVisualizer {
    scheduler: TweenScheduler,
    blocks: Vec<EntityId>,
    pointers: Vec<EntityId>,
}

impl PointerVisualizer {
    /// Empty visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the blocks and pointer markers for `step`.
    ///
    /// Pointers whose `arrayId` matches no array are skipped. Pointer
    /// columns are not range-checked, so a pointer one past the end of its
    /// array is drawn there.
    pub fn update_pointer_visualization(
        &mut self,
        step: &Step,
        scene: &mut Scene,
        options: &Options,
    ) {
        self.scheduler.clear();
        scene.dispose_all(&mut self.blocks);
        scene.dispose_all(&mut self.pointers);

        for (lane, array) in step.arrays().iter().enumerate() {
            for (column, &value) in array.values.iter().enumerate() {
                let id = self.spawn_block(scene, options, value, column, lane);
                if array.is_highlighted(column) {
                    self.set_block_highlight(scene, options, id, true);
                }
            }
        }

        let mut skipped = 0;
        for (slot, pointer) in step.pointers().iter().enumerate() {
            let Some(lane) =
                pointer.array_id.as_ref().and_then(|key| step.lane_of(key))
            else {
                log::debug!(
                    "pointer '{}' targets unknown array {:?}, skipped",
                    pointer.name,
                    pointer.array_id
                );
                skipped += 1;
                continue;
            };
            self.spawn_pointer(scene, options, slot, &pointer.name, pointer.index, lane);
        }

        log::debug!(
            "pointer pass: {} blocks, {} pointers ({skipped} skipped)",
            self.blocks.len(),
            self.pointers.len()
        );
    }

    fn spawn_block(
        &mut self,
        scene: &mut Scene,
        options: &Options,
        value: f64,
        column: usize,
        lane: usize,
    ) -> EntityId {
        let layout = &options.layout;
        let colors = &options.colors;
        let entity = VisualEntity::new(
            EntityKind::Block {
                size: layout.block_size,
            },
            Transform::at(layout.grid_position(column as f32, lane)),
            colors.block_material(colors.default),
            scene.resources_mut(),
        )
        .with_value(value)
        .at_index(column, lane);
        let id = scene.attach(entity);
        self.blocks.push(id);
        id
    }

    fn spawn_pointer(
        &mut self,
        scene: &mut Scene,
        options: &Options,
        slot: usize,
        name: &str,
        column: i64,
        lane: usize,
    ) {
        let layout = &options.layout;
        let color = options.colors.pointer_color(slot);
        let base = layout.grid_position(column as f32, lane);
        let entity = VisualEntity::new(
            EntityKind::Pointer {
                name: name.to_owned(),
                color,
                ring_angle: 0.0,
            },
            Transform::at(base + Vec3::Y * layout.pointer_lift),
            Material::solid(color).glowing(color, POINTER_GLOW),
            scene.resources_mut(),
        )
        .at_index(usize::try_from(column).unwrap_or_default(), lane);
        let id = scene.attach(entity);
        self.pointers.push(id);

        self.scheduler.add(
            scene,
            id,
            TransformTarget::position(base + Vec3::Y * layout.pointer_rest),
            FEEDBACK_MS,
            Easing::OutElastic,
        );
    }

    /// Switch a block between active and default styling in place. Styling
    /// changes immediately; the scale change is tweened (up with an elastic
    /// overshoot, back down smoothly).
    pub fn set_block_highlight(
        &mut self,
        scene: &mut Scene,
        options: &Options,
        id: EntityId,
        active: bool,
    ) {
        let colors = &options.colors;
        let Some(entity) = scene.entity_mut(id) else {
            return;
        };
        let was_active = entity.highlight == Highlight::Active;
        let (highlight, style) = if active {
            (Highlight::Active, colors.active)
        } else {
            (Highlight::Default, colors.default)
        };
        entity.highlight = highlight;
        entity.material = colors.block_material(style);

        if active {
            self.scheduler.add(
                scene,
                id,
                TransformTarget::uniform_scale(ACTIVE_SCALE),
                FEEDBACK_MS,
                Easing::OutElastic,
            );
        } else if was_active {
            self.scheduler.add(
                scene,
                id,
                TransformTarget::uniform_scale(1.0),
                FEEDBACK_MS,
                Easing::InOutCubic,
            );
        }
    }

    /// Live block ids in lane-then-column order.
    #[must_use]
    pub fn blocks(&self) -> &[EntityId] {
        &self.blocks
    }

    /// Live pointer marker ids in step order.
    #[must_use]
    pub fn pointers(&self) -> &[EntityId] {
        &self.pointers
    }
}

impl FamilyVisualizer for PointerVisualizer {
    fn family(&self) -> Family {
        Family::Pointer
    }

    fn reconcile(&mut self, step: &Step, scene: &mut Scene, options: &Options) {
        self.update_pointer_visualization(step, scene, options);
    }

    fn update_animations(&mut self, dt_ms: f32, scene: &mut Scene) {
        self.scheduler.tick(dt_ms, scene);
    }

    fn idle_motion(&self, scene: &mut Scene) {
        for &id in &self.blocks {
            if let Some(transform) = scene.transform_mut(id) {
                transform.rotation += BLOCK_SPIN;
            }
        }
        for &id in &self.pointers {
            if let Some(EntityKind::Pointer { ring_angle, .. }) =
                scene.entity_mut(id).map(|e| &mut e.kind)
            {
                *ring_angle += RING_SPIN;
            }
        }
    }

    fn dispose(&mut self, scene: &mut Scene) {
        self.scheduler.clear();
        scene.dispose_all(&mut self.blocks);
        scene.dispose_all(&mut self.pointers);
    }

    fn entity_count(&self) -> usize {
        self.blocks.len() + self.pointers.len()
    }

    fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }
}
