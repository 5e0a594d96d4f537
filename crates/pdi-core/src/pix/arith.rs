//! Pixel arithmetic between grayscale images

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Subtract `other` from `self` pixelwise, saturating at 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the images differ in size.
    pub fn subtract_gray(&self, other: &Pix) -> Result<Pix> {
        self.check_same_size(other)?;
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| a.saturating_sub(b))
            .collect();
        Pix::from_data(self.width(), self.height(), data)
    }

    /// Invert an image (255 - pixel).
    pub fn invert(&self) -> Pix {
        let mut pm = self.to_mut();
        for v in pm.data_mut() {
            *v = 255 - *v;
        }
        pm.into()
    }

    fn check_same_size(&self, other: &Pix) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        Ok(())
    }
}
