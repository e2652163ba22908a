use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ambient motion applied between steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Slowly rotate resting elements and spin pointer rings.
    #[schemars(title = "Idle Spin")]
    pub idle_spin: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self { idle_spin: true }
    }
}
