/// The scroll-container side: what a list/collection view reports while the user scrolls.
pub trait ScrollEventHandler {
    /// The content scrolled to `y_offset`.
    fn did_scroll(&mut self, y_offset: f64, content_height: f64);

    /// The user released a drag; the content will settle at `final_y_offset` unless corrected.
    fn will_end_dragging(&mut self, final_y_offset: f64);
}
