use scroll_hide::{Point, ScrollHideOptions};
use scroll_hide_adapter::{Controller, ScrollEventHandler, ScrollHideDelegate};

/// Stand-in for a host view: holds the overlay constraint and the list scroll position.
#[derive(Debug, Default)]
struct Host {
    overlay_top: f64,
    content_y: Option<f64>,
}

impl ScrollHideDelegate for Host {
    fn update_offset(&mut self, offset: f64) {
        self.overlay_top = offset;
    }

    fn snap_content_offset(&mut self, point: Point) {
        self.content_y = Some(point.y);
    }
}

fn main() {
    // An adapter would:
    // - forward scroll-container callbacks into the controller
    // - apply the overlay constraint when `update_offset` fires
    // - jump the list (and feed the new offset back) when `snap_content_offset` fires
    let mut c = Controller::new(ScrollHideOptions::new(56.0), Host::default());

    for y in [8.0, 20.0, 34.0] {
        c.did_scroll(y, 4_000.0);
        println!("y={y} overlay_top={}", c.delegate().overlay_top);
    }

    c.will_end_dragging(38.0);
    if let Some(y) = c.delegate_mut().content_y.take() {
        println!("snap content to y={y}");
        c.did_scroll(y, 4_000.0);
    }

    println!(
        "settled: overlay_top={} visibility={:?}",
        c.delegate().overlay_top,
        c.scroll_hide().visibility()
    );
}
