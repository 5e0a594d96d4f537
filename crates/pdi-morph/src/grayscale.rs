//! Grayscale morphological operations
//!
//! - **Erosion**: minimum over the SE hits, shrinks bright regions
//! - **Dilation**: maximum over the same neighborhood, grows bright regions
//! - **Gradient**: dilation minus erosion, highlights boundaries
//!
//! Neighbors that fall outside the image are skipped rather than padded.
//! If no hit lands inside the image, erosion yields 255 and dilation 0.

use crate::{MorphResult, Sel};
use log::debug;
use pdi_core::Pix;

/// Apply `combine` over the in-image SE neighborhood of every pixel.
fn rank_extreme(pix: &Pix, sel: &Sel, init: u8, combine: fn(u8, u8) -> u8) -> Pix {
    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let offsets = sel.hit_offsets();
    let src = pix.data();

    let mut out = pix.create_template().to_mut();
    for (y, row) in out.data_mut().chunks_exact_mut(w as usize).enumerate() {
        let y = y as i64;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as i64;
            let mut acc = init;
            for &(dx, dy) in &offsets {
                let sx = x + dx as i64;
                let sy = y + dy as i64;
                if (0..w).contains(&sx) && (0..h).contains(&sy) {
                    acc = combine(acc, src[(sy * w + sx) as usize]);
                }
            }
            *dst = acc;
        }
    }
    out.into()
}

/// Erode a grayscale image with a structuring element
pub fn erode_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    debug!(
        "erode_gray: {}x{} image, {}x{} sel",
        pix.width(),
        pix.height(),
        sel.width(),
        sel.height()
    );
    Ok(rank_extreme(pix, sel, u8::MAX, u8::min))
}

/// Dilate a grayscale image with a structuring element
///
/// Uses the same neighborhood as [`erode_gray`]; the element is not
/// reflected.
pub fn dilate_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    debug!(
        "dilate_gray: {}x{} image, {}x{} sel",
        pix.width(),
        pix.height(),
        sel.width(),
        sel.height()
    );
    Ok(rank_extreme(pix, sel, u8::MIN, u8::max))
}

/// Grayscale morphological gradient (dilation - erosion)
///
/// Highlights edges and boundaries in the image.
pub fn gradient_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let dilated = dilate_gray(pix, sel)?;
    let eroded = erode_gray(pix, sel)?;
    Ok(dilated.subtract_gray(&eroded)?)
}

/// Erode with an `hsize` x `vsize` brick
pub fn erode_brick(pix: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    erode_gray(pix, &Sel::brick(hsize, vsize)?)
}

/// Dilate with an `hsize` x `vsize` brick
pub fn dilate_brick(pix: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    dilate_gray(pix, &Sel::brick(hsize, vsize)?)
}

/// Morphological gradient with an `hsize` x `vsize` brick
pub fn gradient_brick(pix: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    gradient_gray(pix, &Sel::brick(hsize, vsize)?)
}
