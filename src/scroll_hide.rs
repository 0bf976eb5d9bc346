use alloc::sync::Arc;

use crate::{
    OptionsError, Point, ScrollDirection, ScrollHideEvent, ScrollHideOptions, ScrollHideState,
    ScrollInput, Visibility,
};

/// A headless auto-hide controller for an overlay above scrollable content.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any view objects or layout constraints.
/// - Your adapter drives it with scroll samples (`on_scroll`) and drag releases (`on_drag_end`).
/// - Results are returned by value and, optionally, pushed to the callbacks in
///   [`ScrollHideOptions`].
///
/// The overlay's constraint offset always stays in `[-view_height, 0]`: `0` is fully open,
/// `-view_height` fully hidden.
#[derive(Clone, Debug)]
pub struct ScrollHide {
    options: ScrollHideOptions,
    view_top_offset: f64,
    content_offset: f64,
    last_settled_offset: f64,
    direction: ScrollDirection,
}

impl ScrollHide {
    /// Creates a controller, clamping invalid parameters to safe values.
    ///
    /// Use [`ScrollHide::try_new`] to reject them instead.
    pub fn new(options: ScrollHideOptions) -> Self {
        Self::from_valid(options.sanitized())
    }

    /// Creates a controller, rejecting a non-positive (or non-finite) view height and invalid
    /// tuning constants.
    pub fn try_new(options: ScrollHideOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::from_valid(options))
    }

    /// Shorthand for `ScrollHide::new(ScrollHideOptions::new(view_height))`.
    pub fn with_view_height(view_height: f64) -> Self {
        Self::new(ScrollHideOptions::new(view_height))
    }

    fn from_valid(options: ScrollHideOptions) -> Self {
        hdebug!(
            view_height = options.view_height,
            movement_threshold = options.movement_threshold,
            near_top_zone = options.near_top_zone(),
            "ScrollHide::new"
        );
        Self {
            view_top_offset: 0.0,
            content_offset: 0.0,
            last_settled_offset: 0.0,
            direction: options.initial_direction,
            options,
        }
    }

    pub fn options(&self) -> &ScrollHideOptions {
        &self.options
    }

    pub fn set_on_update_offset(&mut self, f: Option<impl Fn(f64) + Send + Sync + 'static>) {
        self.options.on_update_offset = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_snap_content_offset(
        &mut self,
        f: Option<impl Fn(Point) + Send + Sync + 'static>,
    ) {
        self.options.on_snap_content_offset = f.map(|f| Arc::new(f) as _);
    }

    pub fn view_height(&self) -> f64 {
        self.options.view_height
    }

    /// Current constraint offset, in `[-view_height, 0]`.
    pub fn view_top_offset(&self) -> f64 {
        self.view_top_offset
    }

    /// Last scroll offset received through `on_scroll`.
    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    /// Content offset recorded the last time the overlay was settled.
    pub fn last_settled_offset(&self) -> f64 {
        self.last_settled_offset
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility_of(self.view_top_offset)
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning_at(self.view_top_offset)
    }

    pub fn is_open(&self) -> bool {
        self.visibility() == Visibility::Open
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility() == Visibility::Hidden
    }

    /// How much of the overlay is hidden: `0.0` open, `1.0` fully hidden.
    pub fn hidden_fraction(&self) -> f64 {
        (-self.view_top_offset / self.options.view_height).clamp(0.0, 1.0)
    }

    /// Where the overlay would end up if the content settled at `final_offset` with no further
    /// gating. Not clamped.
    pub fn projected_top_offset(&self, final_offset: f64) -> f64 {
        self.view_top_offset + self.content_offset - final_offset
    }

    fn visibility_of(&self, offset: f64) -> Visibility {
        if self.is_transitioning_at(offset) {
            Visibility::Transitioning
        } else if offset >= 0.0 {
            Visibility::Open
        } else {
            Visibility::Hidden
        }
    }

    // Both bounds are exclusive: exactly open or exactly hidden counts as settled.
    fn is_transitioning_at(&self, offset: f64) -> bool {
        offset > -self.options.view_height && offset < 0.0
    }

    fn should_update(&self, new_offset: f64) -> bool {
        let moved = self.last_settled_offset - new_offset;
        let moved = if moved < 0.0 { -moved } else { moved };
        let near_top = new_offset >= 0.0 && new_offset <= self.options.near_top_zone();

        // At or above the content top the overlay must always reopen.
        new_offset <= 0.0
            || self.is_transitioning()
            || moved > self.options.movement_threshold
            || (near_top && !self.direction.is_up())
    }

    /// Handles a scroll sample from the container.
    ///
    /// Returns the new constraint offset when the overlay was repositioned (also delivered to
    /// `on_update_offset`), or `None` when the sample was absorbed by the hysteresis gate.
    ///
    /// `content_height` is accepted for parity with scroll-container interfaces; it does not
    /// affect the result.
    pub fn on_scroll(&mut self, new_offset: f64, content_height: f64) -> Option<f64> {
        let _ = content_height;
        let old_offset = self.content_offset;
        let update = self.should_update(new_offset);
        htrace!(
            new_offset,
            old_offset,
            content_height,
            update,
            "ScrollHide::on_scroll"
        );

        let emitted = if update {
            self.view_top_offset = if new_offset <= 0.0 {
                0.0
            } else {
                (self.view_top_offset + old_offset - new_offset)
                    .clamp(-self.options.view_height, 0.0)
            };
            if let Some(cb) = &self.options.on_update_offset {
                cb(self.view_top_offset);
            }
            if !self.is_transitioning() {
                self.last_settled_offset = old_offset;
            }
            Some(self.view_top_offset)
        } else {
            None
        };

        // Direction must come from the offset before it is overwritten.
        self.direction = ScrollDirection::from_delta(new_offset - self.content_offset);
        self.content_offset = new_offset;

        emitted
    }

    /// Handles the end of a user drag; `final_offset` is where the content will settle absent
    /// correction.
    ///
    /// If the overlay would come to rest mid-transition, returns (and delivers to
    /// `on_snap_content_offset`) the content offset that lands it exactly open or exactly hidden,
    /// following the last scroll direction. Never mutates state.
    pub fn on_drag_end(&self, final_offset: f64) -> Option<Point> {
        let projected = self.projected_top_offset(final_offset);
        if !self.is_transitioning_at(projected) {
            htrace!(final_offset, projected, "ScrollHide::on_drag_end: settled");
            return None;
        }

        let extra = if self.direction.is_up() {
            self.options.view_height
        } else {
            0.0
        };
        let target = Point::new(0.0, self.content_offset + self.view_top_offset + extra);
        htrace!(
            final_offset,
            projected,
            target_y = target.y,
            "ScrollHide::on_drag_end: snap"
        );
        if let Some(cb) = &self.options.on_snap_content_offset {
            cb(target);
        }
        Some(target)
    }

    /// Dispatches a queued container input to `on_scroll` / `on_drag_end`.
    pub fn apply(&mut self, input: ScrollInput) -> Option<ScrollHideEvent> {
        match input {
            ScrollInput::Scroll {
                offset,
                content_height,
            } => self
                .on_scroll(offset, content_height)
                .map(ScrollHideEvent::UpdateOffset),
            ScrollInput::DragEnd { offset } => self
                .on_drag_end(offset)
                .map(ScrollHideEvent::SnapContentOffset),
        }
    }

    /// Returns to the freshly constructed state. Does not notify.
    pub fn reset(&mut self) {
        self.view_top_offset = 0.0;
        self.content_offset = 0.0;
        self.last_settled_offset = 0.0;
        self.direction = self.options.initial_direction;
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> ScrollHideState {
        ScrollHideState {
            view_top_offset: self.view_top_offset,
            content_offset: self.content_offset,
            last_settled_offset: self.last_settled_offset,
            direction: self.direction,
        }
    }

    /// Restores a previously captured snapshot. Does not notify.
    ///
    /// The constraint offset is clamped into `[-view_height, 0]`, so a snapshot taken with a
    /// taller overlay cannot break the range invariant.
    pub fn restore_state(&mut self, state: ScrollHideState) {
        let clamped = state
            .view_top_offset
            .clamp(-self.options.view_height, 0.0);
        if clamped != state.view_top_offset {
            hwarn!(
                view_top_offset = state.view_top_offset,
                clamped,
                "ScrollHide::restore_state: offset out of range"
            );
        }
        self.view_top_offset = clamped;
        self.content_offset = state.content_offset;
        self.last_settled_offset = state.last_settled_offset;
        self.direction = state.direction;
    }
}
