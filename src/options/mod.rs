//! Visualization options with TOML preset support.
//!
//! Layout, palette, ambient motion and playback settings are consolidated
//! here. Options serialize to/from TOML so presets can live next to step
//! files.

mod colors;
mod layout;
mod motion;
mod playback;

use std::path::Path;

pub use colors::{ColorOptions, HighlightStyle};
pub use layout::LayoutOptions;
pub use motion::MotionOptions;
pub use playback::{
    clamp_step_delay, PlaybackOptions, MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Element and lane placement.
    pub layout: LayoutOptions,
    /// Colour palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Idle motion toggles.
    pub motion: MotionOptions,
    /// Auto-advance settings.
    pub playback: PlaybackOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VizError> {
        let content = std::fs::read_to_string(path).map_err(VizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VizError::Io)?;
        }
        std::fs::write(path, content).map_err(VizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[playback]
step_delay_ms = 800.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.playback.step_delay_ms, 800.0);
        // Everything else should be default
        assert_eq!(opts.playback.target_fps, 60);
        assert_eq!(opts.layout.element_spacing, 3.5);
        assert!(opts.motion.idle_spin);
    }

    #[test]
    fn pointer_palette_wraps() {
        let colors = ColorOptions::default();
        assert_eq!(colors.pointer_color(0), 0xff_6b_6b);
        assert_eq!(colors.pointer_color(5), 0x4e_cd_c4);

        let empty = ColorOptions {
            pointer_palette: Vec::new(),
            ..ColorOptions::default()
        };
        assert_eq!(empty.pointer_color(3), empty.default.color);
    }

    #[test]
    fn step_delay_is_clamped() {
        assert_eq!(clamp_step_delay(100.0), MIN_STEP_DELAY_MS);
        assert_eq!(clamp_step_delay(9000.0), MAX_STEP_DELAY_MS);
        assert_eq!(clamp_step_delay(f32::NAN), MIN_STEP_DELAY_MS);
        let playback = PlaybackOptions {
            step_delay_ms: 1200.0,
            ..PlaybackOptions::default()
        };
        assert_eq!(playback.clamped_step_delay_ms(), 1200.0);
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir()
            .join(format!("algoviz-options-{}", std::process::id()));
        let path = dir.join("slow.toml");
        let mut opts = Options::default();
        opts.playback.step_delay_ms = 2500.0;
        opts.motion.idle_spin = false;

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), ["slow"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("algoviz-bad-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[playback\nstep_delay_ms = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, VizError::OptionsParse(_)));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("layout"));
        assert!(props.contains_key("motion"));
        assert!(props.contains_key("playback"));
        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));

        let layout = &props["layout"]["properties"];
        assert!(layout.get("element_spacing").is_some());
        assert!(layout.get("grid_origin_x").is_none());
    }
}
