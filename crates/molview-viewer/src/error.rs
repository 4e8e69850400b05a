//! Error types for the viewer state machine

use molview_color::ColorError;
use thiserror::Error;

/// Errors that can occur while configuring or rendering a viewer
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Format name outside the supported set
    #[error("unsupported format '{0}' (use 'pdb', 'mmcif', or 'sdf')")]
    InvalidFormat(String),

    /// Grid dimensions must both be nonzero
    #[error("grid dimensions must be nonzero (got {rows}x{cols})")]
    InvalidGrid {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Explicit placement outside the grid dimensions
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// Auto-placement requested but every cell is occupied
    #[error("grid is full ({rows}x{cols})")]
    GridFull {
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// Grid operation invoked on a viewer constructed in single layout
    #[error("viewer was not constructed in grid mode")]
    NotGridMode,

    /// Color theme or hex conversion failure
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Payload serialization failure
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;
