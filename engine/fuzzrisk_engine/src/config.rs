use serde::{Deserialize, Serialize};

/// Sample points used for the centroid when a profile does not say otherwise.
pub const DEFAULT_RESOLUTION: usize = 1001;

/// Engine-wide settings fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Output domain to defuzzify over. When unset, the hull of all output
    /// terms' supports is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_range: Option<(f64, f64)>,
    /// Number of grid points (both ends included) for the centroid.
    pub resolution: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            output_range: None,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}
