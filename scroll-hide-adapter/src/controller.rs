use scroll_hide::{ScrollHide, ScrollHideEvent, ScrollHideOptions, ScrollInput};

use crate::{ScrollEventHandler, ScrollHideDelegate};

/// A framework-neutral controller that wraps a `scroll_hide::ScrollHide` and forwards its
/// results to a [`ScrollHideDelegate`].
///
/// This type does not hold any UI objects. Adapters drive it by calling `on_scroll` /
/// `on_drag_end` (or the [`ScrollEventHandler`] methods) when UI events occur; the delegate
/// receives `update_offset` / `snap_content_offset` exactly when the core emits them.
#[derive(Clone, Debug)]
pub struct Controller<D> {
    s: ScrollHide,
    delegate: D,
}

impl<D: ScrollHideDelegate> Controller<D> {
    pub fn new(options: ScrollHideOptions, delegate: D) -> Self {
        Self {
            s: ScrollHide::new(options),
            delegate,
        }
    }

    pub fn from_scroll_hide(s: ScrollHide, delegate: D) -> Self {
        Self { s, delegate }
    }

    pub fn scroll_hide(&self) -> &ScrollHide {
        &self.s
    }

    pub fn scroll_hide_mut(&mut self) -> &mut ScrollHide {
        &mut self.s
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn into_parts(self) -> (ScrollHide, D) {
        (self.s, self.delegate)
    }

    /// Call this when the UI reports a scroll offset change.
    ///
    /// Returns the new constraint offset if one was sent to the delegate.
    pub fn on_scroll(&mut self, y_offset: f64, content_height: f64) -> Option<f64> {
        let offset = self.s.on_scroll(y_offset, content_height)?;
        self.delegate.update_offset(offset);
        Some(offset)
    }

    /// Call this when the user releases a drag.
    ///
    /// Returns `true` when a snap correction was sent to the delegate.
    pub fn on_drag_end(&mut self, final_y_offset: f64) -> bool {
        let Some(point) = self.s.on_drag_end(final_y_offset) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "scroll_hide_adapter",
            final_y_offset,
            snap_y = point.y,
            "Controller::on_drag_end: snapping content"
        );
        self.delegate.snap_content_offset(point);
        true
    }

    /// Feeds a queued container input and forwards the resulting event, if any.
    pub fn apply(&mut self, input: ScrollInput) -> Option<ScrollHideEvent> {
        let event = self.s.apply(input)?;
        self.delegate.dispatch(event);
        Some(event)
    }
}

impl<D: ScrollHideDelegate> ScrollEventHandler for Controller<D> {
    fn did_scroll(&mut self, y_offset: f64, content_height: f64) {
        self.on_scroll(y_offset, content_height);
    }

    fn will_end_dragging(&mut self, final_y_offset: f64) {
        self.on_drag_end(final_y_offset);
    }
}
