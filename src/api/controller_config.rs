use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::interaction::{GestureConfig, HitZoneConfig, SelectorMode};

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can keep widget tuning alongside their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorControllerConfig {
    #[serde(default = "default_mode")]
    pub mode: SelectorMode,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub hit_zone: HitZoneConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Default for SelectorControllerConfig {
    fn default() -> Self {
        Self::new(default_mode(), Viewport::default())
    }
}

impl SelectorControllerConfig {
    #[must_use]
    pub fn new(mode: SelectorMode, viewport: Viewport) -> Self {
        Self {
            mode,
            viewport,
            hit_zone: HitZoneConfig::default(),
            gesture: GestureConfig::default(),
        }
    }

    /// Range selector with two handles.
    #[must_use]
    pub fn dual(viewport: Viewport) -> Self {
        Self::new(SelectorMode::Dual, viewport)
    }

    /// Value selector with one handle.
    #[must_use]
    pub fn single(viewport: Viewport) -> Self {
        Self::new(SelectorMode::Single, viewport)
    }

    #[must_use]
    pub fn with_hit_zone_width(mut self, width_px: f64) -> Self {
        self.hit_zone.width_px = width_px;
        self
    }

    /// Restricts presses to the `(top, bottom)` band around the axis.
    #[must_use]
    pub fn with_hit_zone_band(mut self, top: f64, bottom: f64) -> Self {
        self.hit_zone.vertical_band = Some((top, bottom));
        self
    }

    #[must_use]
    pub fn with_dead_zone(mut self, dead_zone_px: f64) -> Self {
        self.gesture.dead_zone_px = dead_zone_px;
        self
    }

    #[must_use]
    pub fn with_center_capture_ratio(mut self, ratio: f64) -> Self {
        self.gesture.center_capture_ratio = ratio;
        self
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidConfig(format!("failed to parse controller config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphError::InvalidConfig(format!("failed to serialize controller config: {e}"))
        })
    }
}

fn default_mode() -> SelectorMode {
    SelectorMode::Dual
}
