use serde::{Deserialize, Serialize};

use crate::scene::{Highlight, Material};

/// Colour plus glow of one highlight state. Colours are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightStyle {
    /// Base colour.
    pub color: u32,
    /// Emissive colour.
    pub emissive: u32,
    /// Emissive strength.
    pub emissive_intensity: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: 0x63_66_f1,
            emissive: 0x4f_46_e5,
            emissive_intensity: 0.15,
        }
    }
}

impl HighlightStyle {
    const fn glow(color: u32, emissive_intensity: f32) -> Self {
        Self {
            color,
            emissive: color,
            emissive_intensity,
        }
    }
}

/// Colour palette of elements, pointer markers and the window frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Resting element style.
    pub default: HighlightStyle,
    /// Pointer-highlighted block style.
    pub active: HighlightStyle,
    /// Sorting comparison style.
    pub comparison: HighlightStyle,
    /// Sorting final-position style.
    pub sorted: HighlightStyle,
    /// Sliding-window member style.
    pub in_window: HighlightStyle,
    /// Block `[metalness, roughness]`.
    pub block_finish: [f32; 2],
    /// Sphere `[metalness, roughness]`.
    pub sphere_finish: [f32; 2],
    /// Window frame outline colour.
    pub window_frame: u32,
    /// Window frame outline opacity.
    pub window_frame_opacity: f32,
    /// Pointer marker colours, picked by the pointer's slot in the step.
    pub pointer_palette: Vec<u32>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            default: HighlightStyle::default(),
            active: HighlightStyle::glow(0xfb_bf_24, 0.8),
            comparison: HighlightStyle::glow(0xfb_bf_24, 0.8),
            sorted: HighlightStyle::glow(0x10_b9_81, 0.6),
            in_window: HighlightStyle::glow(0xfb_bf_24, 0.6),
            block_finish: [0.4, 0.3],
            sphere_finish: [0.5, 0.2],
            window_frame: 0xfb_bf_24,
            window_frame_opacity: 0.8,
            pointer_palette: vec![0xff_6b_6b, 0x4e_cd_c4, 0x4a_de_80, 0xfb_bf_24],
        }
    }
}

impl ColorOptions {
    /// Style for a sorting/pointer highlight state.
    #[must_use]
    pub fn style(&self, highlight: Highlight) -> HighlightStyle {
        match highlight {
            Highlight::Default => self.default,
            Highlight::Active => self.active,
            Highlight::Comparison => self.comparison,
            Highlight::Sorted => self.sorted,
        }
    }

    /// Pointer marker colour for the pointer at `slot`. Wraps around the
    /// palette; an empty palette falls back to the default element colour.
    #[must_use]
    pub fn pointer_color(&self, slot: usize) -> u32 {
        if self.pointer_palette.is_empty() {
            return self.default.color;
        }
        self.pointer_palette[slot % self.pointer_palette.len()]
    }

    /// Block material in `style`.
    #[must_use]
    pub fn block_material(&self, style: HighlightStyle) -> Material {
        let [metalness, roughness] = self.block_finish;
        Material::solid(style.color)
            .glowing(style.emissive, style.emissive_intensity)
            .finish(metalness, roughness)
    }

    /// Sphere material in `style`.
    #[must_use]
    pub fn sphere_material(&self, style: HighlightStyle) -> Material {
        let [metalness, roughness] = self.sphere_finish;
        Material::solid(style.color)
            .glowing(style.emissive, style.emissive_intensity)
            .finish(metalness, roughness)
    }

    /// Wireframe material of the sliding-window frame.
    #[must_use]
    pub fn window_frame_material(&self) -> Material {
        Material::solid(self.window_frame).outline(self.window_frame_opacity)
    }
}
