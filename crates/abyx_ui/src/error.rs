//! UI error types.

use thiserror::Error;

/// Errors raised while preparing the HUD.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A required sprite could not be loaded.
    #[error("missing asset: {path}")]
    MissingAsset {
        /// Path that failed to load.
        path: String,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
