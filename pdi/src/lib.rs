//! pdi - Grayscale image processing for Rust
//!
//! # Overview
//!
//! - Image I/O (PNG, JPEG, PNM), decoded to 8-bit gray
//! - 2D convolution with replicate or zero border padding
//! - Sobel and Laplacian edge detection with `ClipZero` or `Scale`
//!   normalization
//! - Histogram equalization
//! - Grayscale erosion, dilation and morphological gradient
//!
//! # Example
//!
//! ```
//! use pdi::Pix;
//! use pdi::filter::{NormalizePolicy, sobel_edge};
//!
//! let pix = Pix::new_with_value(32, 32, 80).unwrap();
//! let edges = sobel_edge(&pix, NormalizePolicy::ClipZero).unwrap();
//! assert_eq!(edges.dimensions(), (32, 32));
//! assert!(edges.data().iter().all(|&v| v == 0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pdi_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pdi_filter as filter;
pub use pdi_io as io;
pub use pdi_morph as morph;
