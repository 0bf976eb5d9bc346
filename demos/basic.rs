use scroll_hide::{ScrollHide, ScrollHideOptions};

fn main() {
    // A 48pt toolbar above a long list. Feed scroll samples and apply the returned offsets.
    let mut s = ScrollHide::new(ScrollHideOptions::new(48.0));

    for y in [0.0, 12.0, 30.0, 60.0, 300.0, 280.0, 40.0, 0.0] {
        match s.on_scroll(y, 5_000.0) {
            Some(top) => println!("y={y:>6} top={top:>6} {:?}", s.visibility()),
            None => println!("y={y:>6} (no change)"),
        }
    }

    s.on_scroll(20.0, 5_000.0);
    if let Some(p) = s.on_drag_end(24.0) {
        println!("drag released mid-transition: snap content to y={}", p.y);
    }
}
