use alloc::vec::Vec;

use scroll_hide::{Point, ScrollHideEvent};

/// The rendering/content side of a [`scroll_hide::ScrollHide`].
///
/// Implement this for whatever owns the overlay constraint and the scroll container.
pub trait ScrollHideDelegate {
    /// Apply `offset` as the overlay's current top displacement.
    fn update_offset(&mut self, offset: f64);

    /// Force the scrollable content to `point` immediately.
    fn snap_content_offset(&mut self, point: Point);

    /// Routes an event value to the matching method.
    fn dispatch(&mut self, event: ScrollHideEvent) {
        match event {
            ScrollHideEvent::UpdateOffset(offset) => self.update_offset(offset),
            ScrollHideEvent::SnapContentOffset(point) => self.snap_content_offset(point),
        }
    }
}

impl<D: ScrollHideDelegate + ?Sized> ScrollHideDelegate for &mut D {
    fn update_offset(&mut self, offset: f64) {
        (**self).update_offset(offset);
    }

    fn snap_content_offset(&mut self, point: Point) {
        (**self).snap_content_offset(point);
    }
}

/// Records every notification, in order.
impl ScrollHideDelegate for Vec<ScrollHideEvent> {
    fn update_offset(&mut self, offset: f64) {
        self.push(ScrollHideEvent::UpdateOffset(offset));
    }

    fn snap_content_offset(&mut self, point: Point) {
        self.push(ScrollHideEvent::SnapContentOffset(point));
    }
}

/// A delegate built from two closures.
pub struct FnDelegate<U, S> {
    on_update: U,
    on_snap: S,
}

impl<U, S> FnDelegate<U, S>
where
    U: FnMut(f64),
    S: FnMut(Point),
{
    pub fn new(on_update: U, on_snap: S) -> Self {
        Self { on_update, on_snap }
    }
}

impl<U, S> ScrollHideDelegate for FnDelegate<U, S>
where
    U: FnMut(f64),
    S: FnMut(Point),
{
    fn update_offset(&mut self, offset: f64) {
        (self.on_update)(offset);
    }

    fn snap_content_offset(&mut self, point: Point) {
        (self.on_snap)(point);
    }
}

impl<U, S> core::fmt::Debug for FnDelegate<U, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnDelegate(..)")
    }
}
