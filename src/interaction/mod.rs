use serde::{Deserialize, Serialize};

use crate::core::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorMode {
    /// One handle selecting a value; the selection spans from the domain start.
    Single,
    /// Two ordered handles selecting a sub-range.
    Dual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectorHandle {
    Value,
    Min,
    Max,
}

/// Which handle(s) the current gesture controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureState {
    Idle,
    ValueCaptured,
    MinCaptured,
    MaxCaptured,
    /// Press landed on both handles; the first decisive move picks one.
    BothCaptured,
}

impl CaptureState {
    #[must_use]
    pub fn captured(handle: SelectorHandle) -> Self {
        match handle {
            SelectorHandle::Value => Self::ValueCaptured,
            SelectorHandle::Min => Self::MinCaptured,
            SelectorHandle::Max => Self::MaxCaptured,
        }
    }

    /// Handle driven by pointer moves, if the capture is unambiguous.
    #[must_use]
    pub fn handle(self) -> Option<SelectorHandle> {
        match self {
            Self::ValueCaptured => Some(SelectorHandle::Value),
            Self::MinCaptured => Some(SelectorHandle::Min),
            Self::MaxCaptured => Some(SelectorHandle::Max),
            Self::Idle | Self::BothCaptured => None,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }
}

/// Touch field around each handle centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitZoneConfig {
    /// Full horizontal extent of the field, centred on the handle.
    pub width_px: f64,
    /// Optional `(top, bottom)` band the press `y` must fall into.
    pub vertical_band: Option<(f64, f64)>,
}

impl Default for HitZoneConfig {
    fn default() -> Self {
        Self {
            width_px: 48.0,
            vertical_band: None,
        }
    }
}

impl HitZoneConfig {
    #[must_use]
    pub fn contains(self, center_x: f64, x: f64, y: f64) -> bool {
        let in_band = self
            .vertical_band
            .is_none_or(|(top, bottom)| y >= top && y <= bottom);
        in_band && (x - center_x).abs() <= self.width_px / 2.0
    }
}

/// Tuning for resolving presses that land on both handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Horizontal travel from the press point needed to pick a handle.
    pub dead_zone_px: f64,
    /// A press closer than `ratio * hit_zone.width_px` to exactly one
    /// handle centre captures that handle directly. `0` disables this.
    pub center_capture_ratio: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dead_zone_px: 1.0,
            center_capture_ratio: 0.2,
        }
    }
}

/// Pixel centres of the handles at press time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HandlePositions {
    Single(f64),
    Dual { min: f64, max: f64 },
}

/// Decides what a press at `(x, y)` captures.
#[must_use]
pub fn resolve_press(
    positions: HandlePositions,
    x: f64,
    y: f64,
    hit_zone: HitZoneConfig,
    gesture: GestureConfig,
) -> CaptureState {
    match positions {
        HandlePositions::Single(center) => {
            if hit_zone.contains(center, x, y) {
                CaptureState::ValueCaptured
            } else {
                CaptureState::Idle
            }
        }
        HandlePositions::Dual { min, max } => {
            let in_min = hit_zone.contains(min, x, y);
            let in_max = hit_zone.contains(max, x, y);
            match (in_min, in_max) {
                (true, true) => {
                    let radius = gesture.center_capture_ratio * hit_zone.width_px;
                    let min_close = (min - x).abs() < radius;
                    let max_close = (max - x).abs() < radius;
                    match (min_close, max_close) {
                        (true, false) => CaptureState::MinCaptured,
                        (false, true) => CaptureState::MaxCaptured,
                        _ => CaptureState::BothCaptured,
                    }
                }
                (true, false) => CaptureState::MinCaptured,
                (false, true) => CaptureState::MaxCaptured,
                (false, false) => CaptureState::Idle,
            }
        }
    }
}

/// Picks a handle once travel from `press_x` leaves the dead zone.
#[must_use]
pub fn resolve_ambiguous_move(press_x: f64, x: f64, dead_zone_px: f64) -> Option<CaptureState> {
    if (x - press_x).abs() <= dead_zone_px {
        return None;
    }
    if x < press_x {
        Some(CaptureState::MinCaptured)
    } else if x > press_x {
        Some(CaptureState::MaxCaptured)
    } else {
        None
    }
}

/// Clamps a drag position for `handle` so the handles never cross and stay
/// inside the viewport.
#[must_use]
pub fn clamp_drag_position(
    handle: SelectorHandle,
    x: f64,
    positions: HandlePositions,
    viewport: Viewport,
) -> f64 {
    match (handle, positions) {
        (SelectorHandle::Min, HandlePositions::Dual { max, .. }) => x.max(viewport.left).min(max),
        (SelectorHandle::Max, HandlePositions::Dual { min, .. }) => x.min(viewport.right).max(min),
        _ => viewport.clamp(x),
    }
}

/// Transient state of one press-to-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    capture: CaptureState,
    press_x: f64,
    press_y: f64,
}

impl PointerSession {
    #[must_use]
    pub fn begin(capture: CaptureState, press_x: f64, press_y: f64) -> Self {
        Self {
            capture,
            press_x,
            press_y,
        }
    }

    #[must_use]
    pub fn capture(self) -> CaptureState {
        self.capture
    }

    #[must_use]
    pub fn press_position(self) -> (f64, f64) {
        (self.press_x, self.press_y)
    }

    /// Advances the session for a move to `x` and returns the handle to drive.
    pub fn on_move(&mut self, x: f64, gesture: GestureConfig) -> Option<SelectorHandle> {
        if self.capture == CaptureState::BothCaptured {
            if let Some(resolved) = resolve_ambiguous_move(self.press_x, x, gesture.dead_zone_px) {
                self.capture = resolved;
            }
        }
        self.capture.handle()
    }
}
