use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// World-space layout of elements, lanes and markers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Distance between neighbouring elements along x.
    #[schemars(title = "Element Spacing", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub element_spacing: f32,
    /// Vertical distance between pointer-family lanes.
    #[schemars(title = "Lane Spacing", range(min = 1.0, max = 20.0), extend("step" = 0.1))]
    pub lane_spacing: f32,
    /// x of column 0 in pointer-family lanes.
    #[schemars(skip)]
    pub grid_origin_x: f32,
    /// y of lane 0 in pointer-family lanes.
    #[schemars(skip)]
    pub grid_origin_y: f32,
    /// Radius of sorting/sliding-window spheres; also their resting y.
    #[schemars(title = "Sphere Radius", range(min = 0.5, max = 3.0), extend("step" = 0.1))]
    pub sphere_radius: f32,
    /// Edge length of pointer-family blocks.
    #[schemars(title = "Block Size", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub block_size: f32,
    /// Height above its lane a pointer marker drops in from.
    #[schemars(skip)]
    pub pointer_lift: f32,
    /// Height above its lane a pointer marker comes to rest at.
    #[schemars(skip)]
    pub pointer_rest: f32,
    /// Height of the sliding-window frame.
    #[schemars(skip)]
    pub window_frame_height: f32,
    /// Depth of the sliding-window frame.
    #[schemars(skip)]
    pub window_frame_depth: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            element_spacing: 3.5,
            lane_spacing: 7.0,
            grid_origin_x: -5.25,
            grid_origin_y: -3.5,
            sphere_radius: 1.5,
            block_size: 2.5,
            pointer_lift: 4.0,
            pointer_rest: 3.0,
            window_frame_height: 4.0,
            window_frame_depth: 0.1,
        }
    }
}

impl LayoutOptions {
    /// Position of a pointer-family block. `column` is signed so pointers
    /// aimed past either end of a lane still get a position.
    #[must_use]
    pub fn grid_position(&self, column: f32, lane: usize) -> Vec3 {
        Vec3::new(
            column * self.element_spacing + self.grid_origin_x,
            lane as f32 * self.lane_spacing + self.grid_origin_y,
            0.0,
        )
    }

    /// Position of element `index` in a centred row of `len` spheres.
    #[must_use]
    pub fn row_position(&self, index: usize, len: usize) -> Vec3 {
        let offset = index as f32 - len as f32 / 2.0;
        Vec3::new(
            offset * self.element_spacing + self.element_spacing / 2.0,
            self.sphere_radius,
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_positions_match_reference_layout() {
        let layout = LayoutOptions::default();
        assert_eq!(layout.grid_position(0.0, 0), Vec3::new(-5.25, -3.5, 0.0));
        assert_eq!(layout.grid_position(3.0, 1), Vec3::new(5.25, 3.5, 0.0));
    }

    #[test]
    fn row_is_centred() {
        let layout = LayoutOptions::default();
        // Five elements: x = -7, -3.5, 0, 3.5, 7.
        let xs: Vec<f32> = (0..5).map(|i| layout.row_position(i, 5).x).collect();
        assert_eq!(xs, [-7.0, -3.5, 0.0, 3.5, 7.0]);
        assert_eq!(layout.row_position(0, 5).y, 1.5);
        // Even counts straddle the origin.
        assert_eq!(layout.row_position(0, 2).x, -1.75);
        assert_eq!(layout.row_position(1, 2).x, 1.75);
    }
}
