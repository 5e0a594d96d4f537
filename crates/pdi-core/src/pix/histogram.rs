//! Histogram generation for grayscale images

use super::Pix;

/// Number of intensity levels in an 8-bit raster.
pub const GRAY_LEVELS: usize = 256;

/// Per-level pixel counts of an 8-bit raster.
pub type GrayHistogram = [u32; GRAY_LEVELS];

impl Pix {
    /// Count how many pixels take each of the 256 gray levels.
    ///
    /// # Example
    ///
    /// ```
    /// use pdi_core::Pix;
    ///
    /// let pix = Pix::new_with_value(10, 10, 42).unwrap();
    /// let hist = pix.gray_histogram();
    /// assert_eq!(hist[42], 100);
    /// ```
    pub fn gray_histogram(&self) -> GrayHistogram {
        let mut hist = [0u32; GRAY_LEVELS];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        hist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_sums_to_area() {
        let pix = Pix::from_rows(&[[0u8, 0, 255], [10, 10, 10]]).unwrap();
        let hist = pix.gray_histogram();
        assert_eq!(hist[0], 2);
        assert_eq!(hist[10], 3);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<u32>(), 6);
    }
}
