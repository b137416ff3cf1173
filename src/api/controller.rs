use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DomainRange, GraphData, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::extensions::SelectionListener;
use crate::interaction::{
    CaptureState, GestureConfig, HitZoneConfig, PointerSession, SelectorHandle, SelectorMode,
};

use super::SelectorControllerConfig;
use super::validation::{validate_config, validate_gesture, validate_hit_zone};

/// Committed selector value(s), always inside the bound domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionState {
    Single { value: f64 },
    /// Invariant: `min <= max`.
    Dual { min: f64, max: f64 },
}

impl SelectionState {
    /// Selection spanning the whole domain (or its start, for one handle).
    #[must_use]
    pub fn initial(mode: SelectorMode, domain: DomainRange) -> Self {
        match mode {
            SelectorMode::Single => Self::Single { value: domain.min },
            SelectorMode::Dual => Self::Dual {
                min: domain.min,
                max: domain.max,
            },
        }
    }

    #[must_use]
    pub fn value_of(self, handle: SelectorHandle) -> Option<f64> {
        match (self, handle) {
            (Self::Single { value }, SelectorHandle::Value) => Some(value),
            (Self::Dual { min, .. }, SelectorHandle::Min) => Some(min),
            (Self::Dual { max, .. }, SelectorHandle::Max) => Some(max),
            _ => None,
        }
    }

    pub(super) fn slot_mut(&mut self, handle: SelectorHandle) -> Option<&mut f64> {
        match (self, handle) {
            (Self::Single { value }, SelectorHandle::Value) => Some(value),
            (Self::Dual { min, .. }, SelectorHandle::Min) => Some(min),
            (Self::Dual { max, .. }, SelectorHandle::Max) => Some(max),
            _ => None,
        }
    }

    #[must_use]
    pub fn handles(self) -> &'static [SelectorHandle] {
        match self {
            Self::Single { .. } => &[SelectorHandle::Value],
            Self::Dual { .. } => &[SelectorHandle::Min, SelectorHandle::Max],
        }
    }

    /// Domain interval the selection covers.
    #[must_use]
    pub fn covered_range(self, domain: DomainRange) -> (f64, f64) {
        match self {
            Self::Single { value } => (domain.min, value),
            Self::Dual { min, max } => (min, max),
        }
    }
}

/// Selection engine behind a one- or two-handle graph widget.
///
/// `SelectorController` owns the bound domain data, the committed selection
/// and the in-flight pointer gesture. It is the only mutator of the
/// selection: external setters and pointer drags share one normalization
/// path, and every committed change is reported to registered listeners.
pub struct SelectorController {
    pub(super) config: SelectorControllerConfig,
    pub(super) data: Option<GraphData>,
    pub(super) selection: Option<SelectionState>,
    pub(super) session: Option<PointerSession>,
    pub(super) listeners: IndexMap<String, Box<dyn SelectionListener>>,
}

impl SelectorController {
    pub fn new(config: SelectorControllerConfig) -> GraphResult<Self> {
        let config = validate_config(config)?;
        Ok(Self {
            config,
            data: None,
            selection: None,
            session: None,
            listeners: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> SelectorControllerConfig {
        self.config
    }

    #[must_use]
    pub fn mode(&self) -> SelectorMode {
        self.config.mode
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Updates the pixel extent on layout changes; committed values are kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> GraphResult<()> {
        let viewport = viewport.validate()?;
        debug!(left = viewport.left, right = viewport.right, "set viewport");
        self.config.viewport = viewport;
        Ok(())
    }

    pub fn set_hit_zone_config(&mut self, hit_zone: HitZoneConfig) -> GraphResult<()> {
        self.config.hit_zone = validate_hit_zone(hit_zone)?;
        Ok(())
    }

    pub fn set_gesture_config(&mut self, gesture: GestureConfig) -> GraphResult<()> {
        self.config.gesture = validate_gesture(gesture)?;
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> Option<&GraphData> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn domain(&self) -> Option<DomainRange> {
        self.data.as_ref().map(GraphData::domain)
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionState> {
        self.selection
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.selection?.value_of(SelectorHandle::Value)
    }

    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        self.selection?.value_of(SelectorHandle::Min)
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.selection?.value_of(SelectorHandle::Max)
    }

    #[must_use]
    pub fn capture_state(&self) -> CaptureState {
        self.session
            .map_or(CaptureState::Idle, PointerSession::capture)
    }

    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.session.is_some()
    }

    pub(super) fn require_domain(&self) -> GraphResult<DomainRange> {
        self.domain().ok_or(GraphError::NoDataBound)
    }
}
