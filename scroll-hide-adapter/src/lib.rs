//! Adapter utilities for the `scroll-hide` crate.
//!
//! The `scroll-hide` crate is UI-agnostic and focuses on the offset state machine. This crate
//! provides small, framework-neutral helpers for wiring it into a host:
//!
//! - A delegate trait for the rendering/content side (`ScrollHideDelegate`)
//! - An event-handler trait for the scroll-container side (`ScrollEventHandler`)
//! - A `Controller` that connects the two
//!
//! This crate is intentionally framework-agnostic (no UI toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod delegate;
mod handler;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use delegate::{FnDelegate, ScrollHideDelegate};
pub use handler::ScrollEventHandler;
