use thiserror::Error;

/// Rejected construction parameters for [`crate::ScrollHide::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("view height must be finite and positive, got {0}")]
    InvalidViewHeight(f64),

    #[error("movement threshold must be finite and non-negative, got {0}")]
    InvalidMovementThreshold(f64),

    #[error("near-top zone must be finite and non-negative, got {0}")]
    InvalidNearTopZone(f64),
}
