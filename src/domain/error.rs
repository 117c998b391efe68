//! Error types for engine operations.

use thiserror::Error;

/// Errors returned by grid accessors, resizing and stepping.
///
/// None of these are fatal to a running session: the driver logs them and
/// keeps ticking.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Zero width or height at creation or resize.
    #[error("invalid grid dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Accessor called with a coordinate outside the current extents.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Current grid width.
        width: u32,
        /// Current grid height.
        height: u32,
    },

    /// Rule configuration does not fit the active cell domain.
    #[error("rule configuration does not fit the cell domain: {reason}")]
    DimensionMismatch {
        /// What was wrong with the configuration.
        reason: &'static str,
    },
}

/// Result alias used across the domain layer.
pub type Result<T> = std::result::Result<T, EngineError>;
