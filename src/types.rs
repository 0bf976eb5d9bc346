/// A content offset the scroll container should jump to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction of the most recent scroll-offset change.
///
/// `Up` means the content offset *increased*. Hysteresis and snap targets are derived from this
/// convention, so it must not be read as a finger/gesture direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

impl ScrollDirection {
    /// `Up` for a strictly positive delta, `Down` otherwise (including zero).
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 { Self::Up } else { Self::Down }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Where the overlay currently sits between its two settled states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Constraint offset is `0`.
    Open,
    /// Constraint offset is `-view_height`.
    Hidden,
    /// Strictly between the two.
    Transitioning,
}

impl Visibility {
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Transitioning)
    }
}

/// An outbound notification produced by [`crate::ScrollHide`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollHideEvent {
    /// Apply this value as the overlay's top displacement.
    UpdateOffset(f64),
    /// Force the scrollable content to this offset (no animation implied).
    SnapContentOffset(Point),
}

/// An inbound notification from the scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollInput {
    Scroll { offset: f64, content_height: f64 },
    DragEnd { offset: f64 },
}
