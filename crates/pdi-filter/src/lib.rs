//! pdi-filter - Image filtering operations
//!
//! This crate provides:
//!
//! - A convolution engine with replicate or zero border padding
//! - Response normalization (`ClipZero` clamping or min/max `Scale`)
//! - Edge detection (Sobel magnitude, four Laplacian masks)
//! - Histogram equalization
//!
//! # Example
//!
//! ```
//! use pdi_core::Pix;
//! use pdi_filter::{LaplacianMask, NormalizePolicy, laplacian_edge};
//!
//! let pix = Pix::from_rows(&[[0u8, 0, 0], [0, 255, 0], [0, 0, 0]]).unwrap();
//! let edges =
//!     laplacian_edge(&pix, LaplacianMask::FourNeighbor, NormalizePolicy::ClipZero).unwrap();
//! assert_eq!(edges.row(1), &[255, 0, 255]);
//! ```

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;
pub mod normalize;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve, convolve_pix};
pub use edge::{
    LaplacianMask, combine_magnitude, laplacian_edge, laplacian_response, sobel_edge,
    sobel_gradients,
};
pub use enhance::{Equalization, TrcLut, equalize_histogram, equalize_trc, trc_map};
pub use normalize::{NormalizePolicy, normalize};
