use crate::ScrollDirection;

/// A lightweight, serializable snapshot of the controller's mutable state.
///
/// Useful for restoring the overlay position across view recycling or sessions without
/// coupling the controller to any specific UI framework.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollHideState {
    pub view_top_offset: f64,
    pub content_offset: f64,
    pub last_settled_offset: f64,
    pub direction: ScrollDirection,
}
