use crate::*;

use alloc::vec::Vec;
use scroll_hide::{Point, ScrollHide, ScrollHideEvent, ScrollHideOptions, ScrollInput};

#[test]
fn controller_forwards_updates_and_snaps_to_delegate() {
    let mut c = Controller::new(ScrollHideOptions::new(100.0), Vec::<ScrollHideEvent>::new());

    assert_eq!(c.on_scroll(50.0, 1000.0), Some(-50.0));
    assert!(c.on_drag_end(60.0));
    assert_eq!(c.on_scroll(100.0, 1000.0), Some(-100.0));
    // Settled and within the hysteresis distance: nothing is forwarded.
    assert_eq!(c.on_scroll(120.0, 1000.0), None);
    assert!(!c.on_drag_end(130.0));

    assert_eq!(
        c.delegate().as_slice(),
        &[
            ScrollHideEvent::UpdateOffset(-50.0),
            ScrollHideEvent::SnapContentOffset(Point::new(0.0, 100.0)),
            ScrollHideEvent::UpdateOffset(-100.0),
        ]
    );
    assert!(c.scroll_hide().is_hidden());
}

#[test]
fn event_handler_trait_drives_controller() {
    fn drive(h: &mut impl ScrollEventHandler) {
        h.did_scroll(10.0, 500.0);
        h.did_scroll(40.0, 500.0);
        h.will_end_dragging(45.0);
    }

    let mut events = Vec::<ScrollHideEvent>::new();
    let mut c = Controller::new(ScrollHideOptions::new(100.0), &mut events);
    drive(&mut c);
    assert_eq!(c.scroll_hide().view_top_offset(), -40.0);
    drop(c);

    assert_eq!(
        events,
        [
            ScrollHideEvent::UpdateOffset(-10.0),
            ScrollHideEvent::UpdateOffset(-40.0),
            ScrollHideEvent::SnapContentOffset(Point::new(0.0, 100.0)),
        ]
    );
}

#[test]
fn fn_delegate_receives_values() {
    let mut offsets = Vec::new();
    let mut snaps = Vec::new();
    {
        let delegate = FnDelegate::new(|o| offsets.push(o), |p| snaps.push(p));
        let mut c = Controller::new(ScrollHideOptions::new(80.0), delegate);
        c.on_scroll(30.0, 1000.0);
        c.on_scroll(20.0, 1000.0);
        c.on_drag_end(15.0);
    }
    assert_eq!(offsets, [-30.0, -20.0]);
    assert_eq!(snaps, [Point::new(0.0, 0.0)]);
}

#[test]
fn apply_forwards_dispatched_events() {
    let mut c = Controller::from_scroll_hide(
        ScrollHide::with_view_height(100.0),
        Vec::<ScrollHideEvent>::new(),
    );
    let ev = c.apply(ScrollInput::Scroll {
        offset: 50.0,
        content_height: 1000.0,
    });
    assert_eq!(ev, Some(ScrollHideEvent::UpdateOffset(-50.0)));
    assert_eq!(c.apply(ScrollInput::DragEnd { offset: 0.0 }), None);

    let (s, events) = c.into_parts();
    assert_eq!(events, [ScrollHideEvent::UpdateOffset(-50.0)]);
    assert_eq!(s.content_offset(), 50.0);
}

#[test]
fn delegate_dispatch_routes_by_variant() {
    let mut events = Vec::<ScrollHideEvent>::new();
    events.dispatch(ScrollHideEvent::SnapContentOffset(Point::new(0.0, 7.0)));
    events.dispatch(ScrollHideEvent::UpdateOffset(-3.0));
    assert_eq!(
        events,
        [
            ScrollHideEvent::SnapContentOffset(Point::new(0.0, 7.0)),
            ScrollHideEvent::UpdateOffset(-3.0),
        ]
    );
}

#[test]
fn scroll_hide_mut_allows_reset_without_notifying() {
    let mut c = Controller::new(ScrollHideOptions::new(100.0), Vec::<ScrollHideEvent>::new());
    c.on_scroll(60.0, 1000.0);
    c.scroll_hide_mut().reset();
    assert!(c.scroll_hide().is_open());
    assert_eq!(c.delegate().len(), 1);
    c.delegate_mut().clear();
    assert!(c.delegate().is_empty());
}
