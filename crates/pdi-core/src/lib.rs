//! pdi-core - Basic raster types for grayscale image processing
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`Pix`] / [`PixMut`] - 8-bit single-channel raster (immutable / mutable)
//! - [`FPix`] - Floating-point raster used for unclamped filter responses
//! - [`BorderPolicy`] - How out-of-bounds samples are synthesized when a
//!   raster is padded

pub mod error;
pub mod fpix;
pub mod pix;

pub use error::{Error, Result};
pub use fpix::{BorderPolicy, FPix};
pub use pix::{GRAY_LEVELS, GrayHistogram, Pix, PixMut};
