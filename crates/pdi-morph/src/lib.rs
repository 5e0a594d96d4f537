//! pdi-morph - Grayscale morphological operations
//!
//! Erosion, dilation and morphological gradient of 8-bit images with an
//! arbitrary structuring element ([`Sel`]), plus brick shortcuts.
//!
//! # Example
//!
//! ```
//! use pdi_core::Pix;
//! use pdi_morph::gradient_brick;
//!
//! let pix = Pix::from_rows(&[[0u8, 0, 255, 255]]).unwrap();
//! let grad = gradient_brick(&pix, 3, 1).unwrap();
//! assert_eq!(grad.row(0), &[0, 255, 255, 0]);
//! ```

mod error;
pub mod grayscale;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use grayscale::{
    dilate_brick, dilate_gray, erode_brick, erode_gray, gradient_brick, gradient_gray,
};
pub use sel::Sel;
