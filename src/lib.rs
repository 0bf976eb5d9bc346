//! A headless auto-hide/auto-reveal engine for overlays driven by scroll events.
//!
//! Think of a filter bar or toolbar sitting above a scrollable list: it slides away as the
//! content scrolls, comes back near the top or after a large scroll back, and never rests
//! half-visible once the user lets go.
//!
//! This crate contains only the offset-tracking state machine. It is UI-agnostic. A TUI/GUI
//! layer is expected to:
//! - feed scroll offsets (`ScrollHide::on_scroll`) and drag releases (`ScrollHide::on_drag_end`)
//! - apply the returned constraint offset to the overlay
//! - apply the returned snap target to the scroll container
//!
//! Animation is left to the rendering layer. For delegate-style wiring, see the
//! `scroll-hide-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod scroll_hide;
mod state;
mod types;


pub use error::OptionsError;
pub use options::{
    DEFAULT_MOVEMENT_THRESHOLD, MIN_VIEW_HEIGHT, OnSnapContentOffsetCallback,
    OnUpdateOffsetCallback, ScrollHideOptions,
};
pub use scroll_hide::ScrollHide;
pub use state::ScrollHideState;
pub use types::{Point, ScrollDirection, ScrollHideEvent, ScrollInput, Visibility};
