//! Edge detection
//!
//! - Sobel gradients combined by Euclidean magnitude, with replicated
//!   borders
//! - Four fixed 3x3 Laplacian masks, with zero borders
//!
//! Both paths run through the shared [`convolve`] engine and finish in
//! [`normalize`].

use crate::{FilterError, FilterResult, Kernel, NormalizePolicy, convolve, normalize};
use log::debug;
use pdi_core::{BorderPolicy, FPix, Pix};
use std::fmt;

/// Combine two gradient maps into `sqrt(gx² + gy²)`
///
/// # Errors
///
/// Returns [`FilterError::ShapeMismatch`] if the maps differ in size.
pub fn combine_magnitude(gx: &FPix, gy: &FPix) -> FilterResult<FPix> {
    if !gx.sizes_equal(gy) {
        return Err(FilterError::ShapeMismatch {
            left: gx.dimensions(),
            right: gy.dimensions(),
        });
    }
    let mut out = gx.create_template();
    for ((dst, &a), &b) in out.data_mut().iter_mut().zip(gx.data()).zip(gy.data()) {
        *dst = (a * a + b * b).sqrt();
    }
    Ok(out)
}

/// Horizontal and vertical Sobel responses of `pix`, replicate border.
pub fn sobel_gradients(pix: &Pix) -> FilterResult<(FPix, FPix)> {
    let fpix = FPix::from_pix(pix);
    let gx = convolve(&fpix, &Kernel::sobel_x(), BorderPolicy::Replicate)?;
    let gy = convolve(&fpix, &Kernel::sobel_y(), BorderPolicy::Replicate)?;
    Ok((gx, gy))
}

/// Sobel edge magnitude of `pix`, normalized with `policy`.
///
/// The magnitude is never negative, so `ClipZero` only clamps values
/// above 255.
pub fn sobel_edge(pix: &Pix, policy: NormalizePolicy) -> FilterResult<Pix> {
    let (gx, gy) = sobel_gradients(pix)?;
    let magnitude = combine_magnitude(&gx, &gy)?;
    debug!("sobel_edge: max magnitude {}", magnitude.max_value());
    normalize(&magnitude, policy)
}

/// The four fixed Laplacian masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaplacianMask {
    /// 1: `[[0,1,0],[1,-4,1],[0,1,0]]`
    FourNeighbor,
    /// 2: `[[1,1,1],[1,-8,1],[1,1,1]]`
    EightNeighbor,
    /// 3: `[[-1,-1,-1],[-1,8,-1],[-1,-1,-1]]`
    EightNeighborInverted,
    /// 4: `[[0,-1,0],[-1,4,-1],[0,-1,0]]`
    FourNeighborInverted,
}

impl LaplacianMask {
    /// All masks in id order
    pub const ALL: [LaplacianMask; 4] = [
        LaplacianMask::FourNeighbor,
        LaplacianMask::EightNeighbor,
        LaplacianMask::EightNeighborInverted,
        LaplacianMask::FourNeighborInverted,
    ];

    /// Look up a mask by its id in `1..=4`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMaskId`] for any other id.
    pub fn from_id(id: u32) -> FilterResult<Self> {
        match id {
            1..=4 => Ok(Self::ALL[id as usize - 1]),
            _ => Err(FilterError::InvalidMaskId(id)),
        }
    }

    /// The mask's id in `1..=4`
    pub fn id(self) -> u32 {
        match self {
            LaplacianMask::FourNeighbor => 1,
            LaplacianMask::EightNeighbor => 2,
            LaplacianMask::EightNeighborInverted => 3,
            LaplacianMask::FourNeighborInverted => 4,
        }
    }

    /// The 3x3 coefficients, row-major
    pub fn coefficients(self) -> [f32; 9] {
        match self {
            LaplacianMask::FourNeighbor => [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0],
            LaplacianMask::EightNeighbor => [1.0, 1.0, 1.0, 1.0, -8.0, 1.0, 1.0, 1.0, 1.0],
            LaplacianMask::EightNeighborInverted => {
                [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0]
            }
            LaplacianMask::FourNeighborInverted => {
                [0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0]
            }
        }
    }

    /// The mask as a convolution kernel
    pub fn kernel(self) -> Kernel {
        Kernel::from_3x3(self.coefficients())
    }
}

impl fmt::Display for LaplacianMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mask{}", self.id())
    }
}

/// Raw Laplacian response of `pix`, zero border.
pub fn laplacian_response(pix: &Pix, mask: LaplacianMask) -> FilterResult<FPix> {
    convolve(&FPix::from_pix(pix), &mask.kernel(), BorderPolicy::Zero)
}

/// Laplacian edge image of `pix`, normalized with `policy`.
pub fn laplacian_edge(
    pix: &Pix,
    mask: LaplacianMask,
    policy: NormalizePolicy,
) -> FilterResult<Pix> {
    debug!("laplacian_edge: {} with {}", mask, policy);
    let response = laplacian_response(pix, mask)?;
    normalize(&response, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_magnitude() {
        let gx = FPix::from_rows(&[[3.0f32, -3.0, 0.0]]).unwrap();
        let gy = FPix::from_rows(&[[4.0f32, -4.0, 0.0]]).unwrap();
        let m = combine_magnitude(&gx, &gy).unwrap();
        assert_eq!(m.data(), &[5.0, 5.0, 0.0]);
    }

    #[test]
    fn test_combine_shape_mismatch() {
        let gx = FPix::new(10, 10).unwrap();
        let gy = FPix::new(12, 10).unwrap();
        assert!(matches!(
            combine_magnitude(&gx, &gy),
            Err(FilterError::ShapeMismatch {
                left: (10, 10),
                right: (12, 10)
            })
        ));
    }

    #[test]
    fn test_mask_ids() {
        for id in 1..=4 {
            assert_eq!(LaplacianMask::from_id(id).unwrap().id(), id);
        }
        assert!(matches!(
            LaplacianMask::from_id(0),
            Err(FilterError::InvalidMaskId(0))
        ));
        assert!(matches!(
            LaplacianMask::from_id(5),
            Err(FilterError::InvalidMaskId(5))
        ));
    }

    #[test]
    fn test_mask_kernels() {
        for mask in LaplacianMask::ALL {
            let k = mask.kernel();
            assert_eq!((k.width(), k.height()), (3, 3));
            assert_eq!(k.sum(), 0.0);
        }
        assert_eq!(LaplacianMask::FourNeighbor.kernel().get(1, 1), Some(-4.0));
        assert_eq!(
            LaplacianMask::EightNeighborInverted.kernel().get(1, 1),
            Some(8.0)
        );
        assert_eq!(LaplacianMask::FourNeighborInverted.to_string(), "mask4");
    }

    #[test]
    fn test_sobel_flat_is_zero() {
        let pix = Pix::new_with_value(6, 5, 77).unwrap();
        let out = sobel_edge(&pix, NormalizePolicy::ClipZero).unwrap();
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_sobel_step() {
        // vertical step from 0 to 10 between columns 1 and 2
        let pix = Pix::from_rows(&[[0u8, 0, 10, 10], [0, 0, 10, 10], [0, 0, 10, 10]]).unwrap();
        let (gx, gy) = sobel_gradients(&pix).unwrap();
        assert!(gy.data().iter().all(|&v| v == 0.0));
        assert_eq!(gx.row(1), &[0.0, 40.0, 40.0, 0.0]);
        let out = sobel_edge(&pix, NormalizePolicy::ClipZero).unwrap();
        assert_eq!(out.row(1), &[0, 40, 40, 0]);
    }

    #[test]
    fn test_laplacian_impulse() {
        let pix = Pix::from_rows(&[[0u8, 0, 0], [0, 255, 0], [0, 0, 0]]).unwrap();
        let response = laplacian_response(&pix, LaplacianMask::FourNeighbor).unwrap();
        assert_eq!(response.row(0), &[0.0, 255.0, 0.0]);
        assert_eq!(response.row(1), &[255.0, -1020.0, 255.0]);
        assert_eq!(response.row(2), &[0.0, 255.0, 0.0]);

        let out =
            laplacian_edge(&pix, LaplacianMask::FourNeighbor, NormalizePolicy::ClipZero).unwrap();
        assert_eq!(out.row(0), &[0, 255, 0]);
        assert_eq!(out.row(1), &[255, 0, 255]);
        assert_eq!(out.row(2), &[0, 255, 0]);
    }
}
