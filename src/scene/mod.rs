//! Scene container: the handle reconcilers attach entities to and detach
//! them from.
//!
//! The [`Scene`] owns every live [`VisualEntity`] plus the
//! [`ResourceRegistry`] their graphics resources come from. Disposal always
//! releases an entity's resources before the entity itself is dropped.

mod entity;
pub mod resources;

pub use entity::{
    EntityId, EntityKind, Highlight, Material, VisualEntity,
};
use rustc_hash::FxHashMap;

use self::resources::ResourceRegistry;
use crate::animation::transform::Transform;

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat entity storage keyed by [`EntityId`], iterated in attach order.
#[derive(Debug, Default)]
pub struct Scene {
    entities: FxHashMap<EntityId, VisualEntity>,
    /// Attach order, for deterministic iteration.
    order: Vec<EntityId>,
    next_entity_id: u32,
    resources: ResourceRegistry,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered (call after drawing a frame).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Entity management --

    /// Attach an entity and return its newly assigned ID.
    pub fn attach(&mut self, entity: VisualEntity) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        let _ = self.entities.insert(id, entity);
        self.order.push(id);
        self.invalidate();
        id
    }

    /// Detach an entity and release its graphics resources. Returns `false`
    /// if the entity was already gone.
    pub fn dispose(&mut self, id: EntityId) -> bool {
        if !self.detach(id) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|&other| other == id) {
            let _ = self.order.remove(pos);
        }
        true
    }

    /// Dispose every entity in `ids` and empty the list. The attach order
    /// is compacted once for the whole batch.
    pub fn dispose_all(&mut self, ids: &mut Vec<EntityId>) {
        let mut detached = false;
        for id in ids.drain(..) {
            detached |= self.detach(id);
        }
        if detached {
            let entities = &self.entities;
            self.order.retain(|id| entities.contains_key(id));
        }
    }

    /// Dispose every entity in the scene.
    pub fn clear(&mut self) {
        for id in std::mem::take(&mut self.order) {
            let _ = self.detach(id);
        }
    }

    /// Remove an entity from the map and release its resources, leaving
    /// `order` untouched.
    fn detach(&mut self, id: EntityId) -> bool {
        let Some(mut entity) = self.entities.remove(&id) else {
            return false;
        };
        entity.release_resources(&mut self.resources);
        self.invalidate();
        true
    }

    /// Read access to an entity.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&VisualEntity> {
        self.entities.get(&id)
    }

    /// Write access (invalidates the rendered generation).
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut VisualEntity> {
        self.invalidate();
        self.entities.get_mut(&id)
    }

    /// Current transform of an entity.
    #[must_use]
    pub fn transform(&self, id: EntityId) -> Option<Transform> {
        self.entities.get(&id).map(|e| e.transform)
    }

    /// Mutable transform of an entity (invalidates the rendered generation).
    pub fn transform_mut(&mut self, id: EntityId) -> Option<&mut Transform> {
        self.entity_mut(id).map(|e| &mut e.transform)
    }

    /// Entities in attach order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &VisualEntity)> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id).map(|e| (*id, e)))
    }

    /// Number of attached entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if an entity is attached.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Graphics resource registry.
    #[must_use]
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// Mutable registry, for allocating a new entity's resources.
    pub fn resources_mut(&mut self) -> &mut ResourceRegistry {
        &mut self.resources
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn sphere(scene: &mut Scene, x: f32) -> VisualEntity {
        VisualEntity::new(
            EntityKind::Sphere { radius: 1.5 },
            Transform::at(Vec3::new(x, 0.0, 0.0)),
            Material::solid(0x63_66_f1),
            scene.resources_mut(),
        )
    }

    #[test]
    fn attach_assigns_unique_ids_in_order() {
        let mut scene = Scene::new();
        let a = sphere(&mut scene, 0.0);
        let a = scene.attach(a);
        let b = sphere(&mut scene, 1.0);
        let b = scene.attach(b);
        assert_ne!(a, b);
        let ids: Vec<_> = scene.entities().map(|(id, _)| id).collect();
        assert_eq!(ids, [a, b]);
        assert_eq!(scene.transform(b).map(|t| t.position.x), Some(1.0));
    }

    #[test]
    fn dispose_releases_resources_and_is_idempotent() {
        let mut scene = Scene::new();
        let e = sphere(&mut scene, 0.0);
        let id = scene.attach(e);
        assert!(scene.resources().live_count() > 0);

        assert!(scene.dispose(id));
        assert!(!scene.dispose(id));
        assert_eq!(scene.resources().live_count(), 0);
        assert_eq!(scene.entity_count(), 0);
        assert!(!scene.contains(id));
    }

    #[test]
    fn clear_disposes_everything() {
        let mut scene = Scene::new();
        for x in 0..4 {
            let e = sphere(&mut scene, x as f32);
            let _ = scene.attach(e);
        }
        scene.clear();
        assert_eq!(scene.entity_count(), 0);
        assert_eq!(scene.resources().live_count(), 0);
        assert_eq!(scene.entities().count(), 0);
    }

    #[test]
    fn dispose_all_keeps_survivor_order() {
        let mut scene = Scene::new();
        let ids: Vec<EntityId> = (0..6)
            .map(|x| {
                let e = sphere(&mut scene, x as f32);
                scene.attach(e)
            })
            .collect();
        let mut doomed = vec![ids[1], ids[3], ids[4], ids[3]];
        scene.dispose_all(&mut doomed);

        assert!(doomed.is_empty());
        let left: Vec<_> = scene.entities().map(|(id, _)| id).collect();
        assert_eq!(left, [ids[0], ids[2], ids[5]]);
        assert_eq!(scene.entity_count(), 3);
        assert_eq!(
            scene.resources().live_count(),
            3 * EntityKind::Sphere { radius: 1.5 }.resource_layout().len()
        );
    }

    #[test]
    fn dirty_tracking() {
        let mut scene = Scene::new();
        assert!(!scene.is_dirty());
        let e = sphere(&mut scene, 0.0);
        let id = scene.attach(e);
        assert!(scene.is_dirty());
        scene.mark_rendered();
        assert!(!scene.is_dirty());
        if let Some(t) = scene.transform_mut(id) {
            t.position.y = 2.0;
        }
        assert!(scene.is_dirty());
    }
}
