//! pdi-test - Regression test framework for pdi
//!
//! Supports three modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use pdi_test::{RegParams, square_image};
//!
//! let mut rp = RegParams::new("edge");
//! let pixs = square_image(200, 50, 150).unwrap();
//! rp.compare_values(200.0, pixs.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! No binary fixtures ship with the workspace; test images are
//! synthesized by the helpers below.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pdi_core::Pix;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pdi-test is at crates/pdi-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Square `size`x`size` image, black with a white block covering
/// rows and columns `lo..hi`.
///
/// `square_image(200, 50, 150)` is the classic demo image.
pub fn square_image(size: u32, lo: u32, hi: u32) -> TestResult<Pix> {
    let mut pix = Pix::new(size, size)?.to_mut();
    for y in lo..hi.min(size) {
        pix.row_mut(y)[lo.min(size) as usize..hi.min(size) as usize].fill(255);
    }
    Ok(pix.into())
}

/// Horizontal ramp: pixel (x, y) has value `x * 255 / (width - 1)`.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Pix> {
    let mut pix = Pix::new(width, height)?.to_mut();
    let span = width.saturating_sub(1).max(1);
    for y in 0..height {
        for (x, v) in pix.row_mut(y).iter_mut().enumerate() {
            *v = (x as u32 * 255 / span) as u8;
        }
    }
    Ok(pix.into())
}

/// Black image with a single pixel of `value` at (x, y).
pub fn impulse_image(width: u32, height: u32, x: u32, y: u32, value: u8) -> TestResult<Pix> {
    let mut pix = Pix::new(width, height)?.to_mut();
    pix.set_pixel(x, y, value)?;
    Ok(pix.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_image() {
        let pix = square_image(200, 50, 150).unwrap();
        assert_eq!(pix.dimensions(), (200, 200));
        assert_eq!(pix.get_pixel(49, 100), Some(0));
        assert_eq!(pix.get_pixel(50, 50), Some(255));
        assert_eq!(pix.get_pixel(149, 149), Some(255));
        assert_eq!(pix.get_pixel(150, 100), Some(0));
        assert_eq!(pix.gray_histogram()[255], 100 * 100);
    }

    #[test]
    fn test_gradient_image() {
        let pix = gradient_image(256, 3).unwrap();
        assert_eq!(pix.get_pixel(0, 2), Some(0));
        assert_eq!(pix.get_pixel(128, 1), Some(128));
        assert_eq!(pix.get_pixel(255, 0), Some(255));
    }

    #[test]
    fn test_impulse_image() {
        let pix = impulse_image(5, 5, 2, 3, 7).unwrap();
        assert_eq!(pix.get_pixel(2, 3), Some(7));
        assert_eq!(pix.data().iter().map(|&v| v as u32).sum::<u32>(), 7);
        assert!(impulse_image(5, 5, 5, 0, 1).is_err());
    }
}
