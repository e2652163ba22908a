use std::fmt;

use glam::Vec3;

use super::resources::{ResourceHandle, ResourceKind, ResourceRegistry};
use crate::animation::transform::Transform;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// Scene-assigned identifier of a visual entity. Never reused within one
/// [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

/// Highlight/selection state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    /// Resting element.
    #[default]
    Default,
    /// Highlighted by a pointer step or inside a sliding window.
    Active,
    /// Being compared by a sorting step.
    Comparison,
    /// In its final sorted position.
    Sorted,
}

/// Surface appearance of an entity. Colours are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base colour.
    pub color: u32,
    /// Emissive colour.
    pub emissive: u32,
    /// Emissive strength.
    pub emissive_intensity: f32,
    /// PBR metalness.
    pub metalness: f32,
    /// PBR roughness.
    pub roughness: f32,
    /// Render as an outline instead of a solid surface.
    pub wireframe: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Material {
    /// Opaque solid material with no emission.
    #[must_use]
    pub fn solid(color: u32) -> Self {
        Self {
            color,
            emissive: 0x00_00_00,
            emissive_intensity: 0.0,
            metalness: 0.0,
            roughness: 1.0,
            wireframe: false,
            opacity: 1.0,
        }
    }

    /// Set the emissive colour and strength.
    #[must_use]
    pub fn glowing(mut self, emissive: u32, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    /// Set PBR metalness and roughness.
    #[must_use]
    pub fn finish(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    /// Switch to a translucent outline.
    #[must_use]
    pub fn outline(mut self, opacity: f32) -> Self {
        self.wireframe = true;
        self.opacity = opacity;
        self
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// What an entity depicts.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Cube for one element of a pointer-family lane.
    Block {
        /// Edge length.
        size: f32,
    },
    /// Sphere for one element of a sorting or sliding-window row.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Arrow marker naming a pointer, with a spinning glow ring.
    Pointer {
        /// Pointer name shown on its label.
        name: String,
        /// Palette colour.
        color: u32,
        /// Current angle of the glow ring, radians.
        ring_angle: f32,
    },
    /// Outline box around the current sliding window.
    WindowFrame {
        /// Extent along x.
        width: f32,
        /// Extent along y.
        height: f32,
        /// Extent along z.
        depth: f32,
    },
}

/// Block: cube mesh, edge lines, value label sprite.
const BLOCK_RESOURCES: &[ResourceKind] = &[
    ResourceKind::Geometry,
    ResourceKind::Material,
    ResourceKind::Geometry,
    ResourceKind::Material,
    ResourceKind::Texture,
    ResourceKind::Material,
];

/// Sphere: mesh plus value label sprite.
const SPHERE_RESOURCES: &[ResourceKind] = &[
    ResourceKind::Geometry,
    ResourceKind::Material,
    ResourceKind::Texture,
    ResourceKind::Material,
];

/// Pointer: cone head, shaft, glow ring, name label sprite.
const POINTER_RESOURCES: &[ResourceKind] = &[
    ResourceKind::Geometry,
    ResourceKind::Material,
    ResourceKind::Geometry,
    ResourceKind::Material,
    ResourceKind::Geometry,
    ResourceKind::Material,
    ResourceKind::Texture,
    ResourceKind::Material,
];

const FRAME_RESOURCES: &[ResourceKind] =
    &[ResourceKind::Geometry, ResourceKind::Material];

impl EntityKind {
    /// Graphics resources an entity of this kind owns.
    #[must_use]
    pub fn resource_layout(&self) -> &'static [ResourceKind] {
        match self {
            Self::Block { .. } => BLOCK_RESOURCES,
            Self::Sphere { .. } => SPHERE_RESOURCES,
            Self::Pointer { .. } => POINTER_RESOURCES,
            Self::WindowFrame { .. } => FRAME_RESOURCES,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Block { .. } => "block",
            Self::Sphere { .. } => "sphere",
            Self::Pointer { .. } => "pointer",
            Self::WindowFrame { .. } => "window-frame",
        }
    }
}

// ---------------------------------------------------------------------------
// VisualEntity
// ---------------------------------------------------------------------------

/// A renderable node: one array element, one pointer marker, or the window
/// frame.
#[derive(Debug, Clone)]
pub struct VisualEntity {
    /// What this entity depicts.
    pub kind: EntityKind,
    /// Array value shown on the element, if any.
    pub value: Option<f64>,
    /// Text of the value/name label, if any.
    pub label: Option<String>,
    /// Source index within its array.
    pub index: usize,
    /// Index of the owning array (pointer-family lane; 0 otherwise).
    pub lane: usize,
    /// Current highlight state.
    pub highlight: Highlight,
    /// Current appearance.
    pub material: Material,
    /// Current transform, mutated by tweens.
    pub transform: Transform,
    /// Position the entity was created at.
    pub home: Vec3,
    resources: Vec<ResourceHandle>,
}

impl VisualEntity {
    /// Build an entity at `transform`, allocating the graphics resources its
    /// kind requires.
    pub fn new(
        kind: EntityKind,
        transform: Transform,
        material: Material,
        registry: &mut ResourceRegistry,
    ) -> Self {
        let resources = registry.allocate_all(kind.resource_layout());
        let label = match &kind {
            EntityKind::Pointer { name, .. } => Some(name.clone()),
            _ => None,
        };
        Self {
            kind,
            value: None,
            label,
            index: 0,
            lane: 0,
            highlight: Highlight::Default,
            material,
            transform,
            home: transform.position,
            resources,
        }
    }

    /// Attach an array value and its label text.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self.label = Some(value.to_string());
        self
    }

    /// Record the element's source index and owning lane.
    #[must_use]
    pub fn at_index(mut self, index: usize, lane: usize) -> Self {
        self.index = index;
        self.lane = lane;
        self
    }

    /// Graphics resources still held by this entity.
    #[must_use]
    pub fn resources(&self) -> &[ResourceHandle] {
        &self.resources
    }

    /// Release every owned resource back to `registry`. Calling it twice is
    /// harmless.
    pub fn release_resources(&mut self, registry: &mut ResourceRegistry) {
        for handle in self.resources.drain(..) {
            let _ = registry.release(handle);
        }
    }
}
