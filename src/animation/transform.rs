//! Entity transforms and partial tween targets.

use glam::Vec3;

/// Position, scale and Euler rotation (radians) of a visual entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Per-axis scale factor.
    pub scale: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
}

impl Transform {
    /// Identity transform (origin, unit scale, no rotation).
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        scale: Vec3::ONE,
        rotation: Vec3::ZERO,
    };

    /// Unit-scale, unrotated transform placed at `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Replace the scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Target of a tween. Only the channels that are `Some` are animated;
/// absent channels keep whatever value the entity currently has.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformTarget {
    /// Target position, if animated.
    pub position: Option<Vec3>,
    /// Target scale, if animated.
    pub scale: Option<Vec3>,
    /// Target rotation, if animated.
    pub rotation: Option<Vec3>,
}

impl TransformTarget {
    /// Position-only target.
    #[must_use]
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Scale-only target.
    #[must_use]
    pub fn scale(scale: Vec3) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// Uniform scale-only target.
    #[must_use]
    pub fn uniform_scale(factor: f32) -> Self {
        Self::scale(Vec3::splat(factor))
    }

    /// Add a scale channel.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Add a rotation channel.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Whether no channel is animated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.scale.is_none() && self.rotation.is_none()
    }

    /// Write the blend of `start` toward this target at factor `eased` into
    /// `current`. Each present channel is interpolated independently.
    pub fn apply(&self, start: &Transform, current: &mut Transform, eased: f32) {
        if let Some(position) = self.position {
            current.position = start.position.lerp(position, eased);
        }
        if let Some(scale) = self.scale {
            current.scale = start.scale.lerp(scale, eased);
        }
        if let Some(rotation) = self.rotation {
            current.rotation = start.rotation.lerp(rotation, eased);
        }
    }

    /// Transform reached once this target is fully applied to `start`.
    #[must_use]
    pub fn resolve(&self, start: &Transform) -> Transform {
        let mut end = *start;
        self.apply(start, &mut end, 1.0);
        end
    }
}
