//! # Core Error Types

use thiserror::Error;

/// Errors raised by the entity store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Every slot in the pool is occupied.
    #[error("entity pool exhausted: all {capacity} slots in use")]
    PoolExhausted {
        /// Fixed pool capacity.
        capacity: usize,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
