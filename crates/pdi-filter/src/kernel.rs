//! Convolution kernels
//!
//! A [`Kernel`] is a small row-major grid of `f32` coefficients. Its origin
//! is the center sample `(width / 2, height / 2)`; the convolution engine
//! only accepts square kernels with an odd side, for which this is the
//! exact middle.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a zero-filled kernel with the given dimensions.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernelShape { width, height });
        }
        Ok(Kernel {
            width,
            height,
            data: vec![0.0; (width * height) as usize],
        })
    }

    /// Create a kernel from a row-major slice of values.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for {}x{}, got {}",
                kernel.data.len(),
                width,
                height,
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a kernel from equally long rows.
    ///
    /// ```
    /// use pdi_filter::Kernel;
    ///
    /// let k = Kernel::from_rows(&[[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!(k.get(1, 1), Some(-4.0));
    /// assert_eq!(k.sum(), 0.0);
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> FilterResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        let mut data = Vec::with_capacity((width * height) as usize);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(FilterError::InvalidKernel(format!(
                    "ragged kernel rows: {} vs {}",
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_slice(width, height, &data)
    }

    /// The 1x1 kernel `[[1]]`.
    pub fn identity() -> Self {
        Kernel {
            width: 1,
            height: 1,
            data: vec![1.0],
        }
    }

    /// A 3x3 kernel from nine row-major values.
    pub fn from_3x3(data: [f32; 9]) -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: data.to_vec(),
        }
    }

    /// Sobel derivative along x: `[[-1,0,1],[-2,0,2],[-1,0,1]]`.
    ///
    /// Responds to vertical edges.
    pub fn sobel_x() -> Self {
        Self::from_3x3([-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0])
    }

    /// Sobel derivative along y: `[[-1,-2,-1],[0,0,0],[1,2,1]]`.
    ///
    /// Responds to horizontal edges.
    pub fn sobel_y() -> Self {
        Self::from_3x3([-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0])
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set a value at (x, y); out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Whether the kernel is square with an odd side.
    pub fn is_odd_square(&self) -> bool {
        self.width == self.height && self.width % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert!(matches!(
            Kernel::new(0, 3),
            Err(FilterError::InvalidKernelShape {
                width: 0,
                height: 3
            })
        ));
        assert!(Kernel::from_rows::<[f32; 0]>(&[]).is_err());
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Kernel::from_slice(3, 3, &[1.0; 9]).is_ok());
        assert!(matches!(
            Kernel::from_slice(3, 3, &[1.0; 8]),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: [&[f32]; 2] = [&[1.0, 2.0], &[3.0]];
        assert!(Kernel::from_rows(&rows).is_err());
    }

    #[test]
    fn test_sobel_kernels() {
        let sx = Kernel::sobel_x();
        let sy = Kernel::sobel_y();
        assert_eq!(sx.sum(), 0.0);
        assert_eq!(sy.sum(), 0.0);
        assert_eq!(sx.get(0, 1), Some(-2.0));
        assert_eq!(sy.get(1, 2), Some(2.0));
        // Sy is the transpose of Sx
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(sx.get(x, y), sy.get(y, x));
            }
        }
    }

    #[test]
    fn test_shape_predicates() {
        assert!(Kernel::identity().is_odd_square());
        assert!(Kernel::sobel_x().is_odd_square());
        assert!(!Kernel::new(2, 2).unwrap().is_odd_square());
        assert!(!Kernel::new(3, 5).unwrap().is_odd_square());
        assert_eq!(Kernel::new(5, 5).unwrap().center_x(), 2);
    }

    #[test]
    fn test_get_set() {
        let mut k = Kernel::new(3, 3).unwrap();
        k.set(2, 1, 4.5);
        k.set(3, 3, 9.0);
        assert_eq!(k.get(2, 1), Some(4.5));
        assert_eq!(k.get(3, 0), None);
        assert_eq!(k.sum(), 4.5);
    }
}
