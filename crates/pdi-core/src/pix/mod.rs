//! PIX - The 8-bit grayscale raster
//!
//! `Pix` holds a `height x width` grid of `u8` intensities in row-major
//! order, one byte per pixel, with no row padding.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership). To modify pixel
//! data, convert to `PixMut` via [`Pix::try_into_mut`] or [`Pix::to_mut`],
//! then convert back with `Into<Pix>`. Filters never write into their
//! input; every operation returns a freshly allocated raster.

mod access;
pub mod arith;
pub mod graphics;
mod histogram;

pub use histogram::{GRAY_LEVELS, GrayHistogram};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal pixel storage shared by [`Pix`] and owned by [`PixMut`].
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    text: Option<String>,
    data: Vec<u8>,
}

/// 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use pdi_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new image with all pixels set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRaster`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new image with all pixels set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRaster`] if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self::from_parts(width, height, vec![value; size]))
    }

    /// Create an image from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRaster`] for a zero dimension and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Create an image from a slice of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRaster`] if there are no rows or the rows are
    /// empty, and [`Error::InvalidParameter`] for ragged rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster { width, height });
        }
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} pixels, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(width, height, data))
    }

    fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        Pix {
            inner: Arc::new(PixData {
                width,
                height,
                text: None,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the attached text annotation, if any.
    pub fn text(&self) -> Option<&str> {
        self.inner.text.as_deref()
    }

    /// Get raw access to the pixel data (row-major).
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get a row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &self.inner.data[start..start + w]
    }

    /// Number of references sharing this image's data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check whether two images have the same size and identical pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }

    /// Create a zeroed image of the same size, without text.
    pub fn create_template(&self) -> Pix {
        Pix {
            inner: Arc::new(PixData {
                width: self.inner.width,
                height: self.inner.height,
                text: None,
                data: vec![0; self.inner.data.len()],
            }),
        }
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    ///
    /// Always copies, so the original stays untouched.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable 8-bit grayscale image
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Replace the text annotation.
    pub fn set_text(&mut self, text: Option<String>) {
        self.inner.text = text;
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get a mutable row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `value`.
    pub fn set_all(&mut self, value: u8) {
        self.inner.data.fill(value);
    }

    /// Set every pixel to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
