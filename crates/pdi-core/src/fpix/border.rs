//! Border padding for floating-point images
//!
//! Enlarges an [`FPix`] by the same number of samples on every side, so
//! that a centered window of half-size `npix` fits around every original
//! pixel.

use super::FPix;

/// How samples outside the image are synthesized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Repeat the nearest edge pixel
    #[default]
    Replicate,
    /// Use the constant 0
    Zero,
}

impl FPix {
    /// Add a uniform border of `npix` samples around the image.
    ///
    /// Returns a new image of size `(width + 2*npix, height + 2*npix)`.
    /// With `npix == 0` this is a plain copy.
    pub fn add_border(&self, npix: u32, policy: BorderPolicy) -> FPix {
        let w = self.width as i64;
        let h = self.height as i64;
        let pad = npix as i64;
        let wd = (w + 2 * pad) as usize;
        let hd = (h + 2 * pad) as usize;

        let mut data = Vec::with_capacity(wd * hd);
        for yd in 0..hd as i64 {
            let sy = yd - pad;
            for xd in 0..wd as i64 {
                let sx = xd - pad;
                let inside = (0..w).contains(&sx) && (0..h).contains(&sy);
                let val = if inside {
                    self.data[(sy * w + sx) as usize]
                } else {
                    match policy {
                        BorderPolicy::Zero => 0.0,
                        BorderPolicy::Replicate => {
                            let cx = sx.clamp(0, w - 1);
                            let cy = sy.clamp(0, h - 1);
                            self.data[(cy * w + cx) as usize]
                        }
                    }
                };
                data.push(val);
            }
        }

        FPix {
            width: wd as u32,
            height: hd as u32,
            data,
        }
    }
}
