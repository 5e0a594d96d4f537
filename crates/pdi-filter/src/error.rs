//! Error types for pdi-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pdi_core::Error),

    /// The convolution engine needs a square kernel with an odd side
    #[error("kernel must be square with odd side, got {width}x{height}")]
    InvalidKernelShape { width: u32, height: u32 },

    /// Kernel data does not match its declared size
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Two response maps that must be combined differ in size
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: (u32, u32), right: (u32, u32) },

    /// Unknown normalization policy token
    #[error("invalid normalization policy '{0}' (expected clip_zero or scale)")]
    InvalidPolicy(String),

    /// Laplacian mask id outside 1..=4
    #[error("invalid Laplacian mask id {0} (expected 1, 2, 3 or 4)")]
    InvalidMaskId(u32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
