use alloc::sync::Arc;

use crate::{OptionsError, Point, ScrollDirection};

/// Default distance (in scroll units) the content must travel away from the last settled
/// offset before a settled overlay starts following the scroll again.
pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 200.0;

/// Smallest view height [`crate::ScrollHide::new`] clamps an invalid height to.
pub const MIN_VIEW_HEIGHT: f64 = 1.0;

/// A callback fired with the new overlay constraint offset.
pub type OnUpdateOffsetCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A callback fired with the content offset the scroll container should jump to.
pub type OnSnapContentOffsetCallback = Arc<dyn Fn(Point) + Send + Sync>;

/// Configuration for [`crate::ScrollHide`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct ScrollHideOptions {
    /// Full travel range of the overlay (fully open to fully hidden).
    pub view_height: f64,

    /// Hysteresis distance from the last settled content offset.
    pub movement_threshold: f64,

    /// Upper bound of the "near top" zone `[0, near_top_zone]` in which a downward scroll always
    /// moves the overlay. `None` uses `view_height`.
    pub near_top_zone: Option<f64>,

    /// Direction assumed before the first scroll sample arrives.
    pub initial_direction: ScrollDirection,

    /// Fired every time the constraint offset is recomputed.
    pub on_update_offset: Option<OnUpdateOffsetCallback>,

    /// Fired when a drag ends with the overlay projected mid-transition.
    pub on_snap_content_offset: Option<OnSnapContentOffsetCallback>,
}

impl Clone for ScrollHideOptions {
    fn clone(&self) -> Self {
        Self {
            view_height: self.view_height,
            movement_threshold: self.movement_threshold,
            near_top_zone: self.near_top_zone,
            initial_direction: self.initial_direction,
            on_update_offset: self.on_update_offset.clone(),
            on_snap_content_offset: self.on_snap_content_offset.clone(),
        }
    }
}

impl ScrollHideOptions {
    pub fn new(view_height: f64) -> Self {
        Self {
            view_height,
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            near_top_zone: None,
            initial_direction: ScrollDirection::Down,
            on_update_offset: None,
            on_snap_content_offset: None,
        }
    }

    pub fn with_movement_threshold(mut self, movement_threshold: f64) -> Self {
        self.movement_threshold = movement_threshold;
        self
    }

    pub fn with_near_top_zone(mut self, near_top_zone: Option<f64>) -> Self {
        self.near_top_zone = near_top_zone;
        self
    }

    pub fn with_initial_direction(mut self, initial_direction: ScrollDirection) -> Self {
        self.initial_direction = initial_direction;
        self
    }

    pub fn with_on_update_offset(
        mut self,
        on_update_offset: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_update_offset = on_update_offset.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_snap_content_offset(
        mut self,
        on_snap_content_offset: Option<impl Fn(Point) + Send + Sync + 'static>,
    ) -> Self {
        self.on_snap_content_offset = on_snap_content_offset.map(|f| Arc::new(f) as _);
        self
    }

    /// The effective near-top zone bound.
    pub fn near_top_zone(&self) -> f64 {
        self.near_top_zone.unwrap_or(self.view_height)
    }

    /// Checks the numeric parameters without constructing a controller.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.view_height.is_finite() || self.view_height <= 0.0 {
            return Err(OptionsError::InvalidViewHeight(self.view_height));
        }
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(OptionsError::InvalidMovementThreshold(
                self.movement_threshold,
            ));
        }
        if let Some(zone) = self.near_top_zone {
            if !zone.is_finite() || zone < 0.0 {
                return Err(OptionsError::InvalidNearTopZone(zone));
            }
        }
        Ok(())
    }

    /// Replaces invalid parameters with safe values.
    pub(crate) fn sanitized(mut self) -> Self {
        if !self.view_height.is_finite() || self.view_height <= 0.0 {
            hwarn!(
                view_height = self.view_height,
                "ScrollHideOptions: invalid view height, clamping"
            );
            self.view_height = MIN_VIEW_HEIGHT;
        }
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            hwarn!(
                movement_threshold = self.movement_threshold,
                "ScrollHideOptions: invalid movement threshold, using default"
            );
            self.movement_threshold = DEFAULT_MOVEMENT_THRESHOLD;
        }
        if let Some(zone) = self.near_top_zone {
            if !zone.is_finite() || zone < 0.0 {
                hwarn!(
                    near_top_zone = zone,
                    "ScrollHideOptions: invalid near-top zone, using view height"
                );
                self.near_top_zone = None;
            }
        }
        self
    }
}

impl core::fmt::Debug for ScrollHideOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollHideOptions")
            .field("view_height", &self.view_height)
            .field("movement_threshold", &self.movement_threshold)
            .field("near_top_zone", &self.near_top_zone)
            .field("initial_direction", &self.initial_direction)
            .finish_non_exhaustive()
    }
}
