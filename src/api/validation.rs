use crate::error::{GraphError, GraphResult};
use crate::interaction::{GestureConfig, HitZoneConfig};

use super::SelectorControllerConfig;

pub(super) fn validate_config(
    config: SelectorControllerConfig,
) -> GraphResult<SelectorControllerConfig> {
    if !config.viewport.is_valid() {
        return Err(GraphError::InvalidViewport {
            left: config.viewport.left,
            right: config.viewport.right,
        });
    }
    validate_hit_zone(config.hit_zone)?;
    validate_gesture(config.gesture)?;
    Ok(config)
}

pub(super) fn validate_hit_zone(hit_zone: HitZoneConfig) -> GraphResult<HitZoneConfig> {
    if !hit_zone.width_px.is_finite() || hit_zone.width_px <= 0.0 {
        return Err(GraphError::InvalidConfig(
            "hit zone width_px must be finite and > 0".to_owned(),
        ));
    }
    if let Some((top, bottom)) = hit_zone.vertical_band {
        if !top.is_finite() || !bottom.is_finite() || bottom < top {
            return Err(GraphError::InvalidConfig(
                "hit zone vertical band must be finite with bottom >= top".to_owned(),
            ));
        }
    }
    Ok(hit_zone)
}

pub(super) fn validate_gesture(gesture: GestureConfig) -> GraphResult<GestureConfig> {
    if !gesture.dead_zone_px.is_finite() || gesture.dead_zone_px < 0.0 {
        return Err(GraphError::InvalidConfig(
            "gesture dead_zone_px must be finite and >= 0".to_owned(),
        ));
    }
    if !gesture.center_capture_ratio.is_finite()
        || !(0.0..=0.5).contains(&gesture.center_capture_ratio)
    {
        return Err(GraphError::InvalidConfig(
            "gesture center_capture_ratio must be in [0, 0.5]".to_owned(),
        ));
    }
    Ok(gesture)
}
