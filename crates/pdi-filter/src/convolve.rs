//! Convolution engine
//!
//! Slides a square, odd-sided kernel over a padded copy of the image and
//! stores the plain product sum at every pixel. The kernel is not flipped,
//! and the response is kept as unclamped `f32` so that negative and
//! out-of-range values survive until normalization.

use crate::{FilterError, FilterResult, Kernel};
use log::debug;
use pdi_core::{BorderPolicy, FPix, Pix};

/// Convolve a floating-point image with a kernel
///
/// The image is padded by `side / 2` samples on every side according to
/// `border`. The result has the same dimensions as `fpix`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernelShape`] unless the kernel is square
/// with an odd side.
pub fn convolve(fpix: &FPix, kernel: &Kernel, border: BorderPolicy) -> FilterResult<FPix> {
    if !kernel.is_odd_square() {
        return Err(FilterError::InvalidKernelShape {
            width: kernel.width(),
            height: kernel.height(),
        });
    }

    let side = kernel.width() as usize;
    let pad = kernel.width() / 2;
    let padded = fpix.add_border(pad, border);
    let pw = padded.width() as usize;
    let pdata = padded.data();
    let kdata = kernel.data();
    let w = fpix.width() as usize;

    let mut out = fpix.create_template();
    for (y, out_row) in out.data_mut().chunks_exact_mut(w).enumerate() {
        for (x, dst) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (ky, krow) in kdata.chunks_exact(side).enumerate() {
                let start = (y + ky) * pw + x;
                for (p, k) in pdata[start..start + side].iter().zip(krow) {
                    sum += p * k;
                }
            }
            *dst = sum;
        }
    }

    let (min, max) = out.min_max();
    debug!(
        "convolve: {}x{} image, {}x{} kernel, {:?} border, response in [{}, {}]",
        fpix.width(),
        fpix.height(),
        side,
        side,
        border,
        min,
        max
    );
    Ok(out)
}

/// Convolve an 8-bit image with a kernel
///
/// Widens the image to `f32` and calls [`convolve`].
pub fn convolve_pix(pix: &Pix, kernel: &Kernel, border: BorderPolicy) -> FilterResult<FPix> {
    convolve(&FPix::from_pix(pix), kernel, border)
}
