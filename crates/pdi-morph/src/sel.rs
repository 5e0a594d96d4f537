//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations. Each position is either a hit (part of the neighborhood) or
//! ignored. The origin is always the center `(width / 2, height / 2)`.

use crate::{MorphError, MorphResult};

/// Structuring Element (SEL)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Sel {
    /// Create a rectangular "brick" structuring element with all hits
    pub fn brick(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "brick must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        Ok(Sel {
            width,
            height,
            data: vec![true; (width * height) as usize],
        })
    }

    /// Create a structuring element from a row-major hit mask
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] for a zero dimension, a mask of
    /// the wrong length, or a mask without any hit.
    pub fn from_mask(width: u32, height: u32, mask: &[bool]) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "zero-sized element {}x{}",
                width, height
            )));
        }
        if mask.len() != (width * height) as usize {
            return Err(MorphError::InvalidSel(format!(
                "mask has {} entries, expected {}",
                mask.len(),
                width * height
            )));
        }
        if !mask.iter().any(|&hit| hit) {
            return Err(MorphError::InvalidSel("element has no hits".to_string()));
        }
        Ok(Sel {
            width,
            height,
            data: mask.to_vec(),
        })
    }

    /// Create a structuring element from a text pattern
    ///
    /// Rows are separated by newlines; `x` marks a hit and `.` a position
    /// that is ignored. Surrounding whitespace on each line is dropped.
    ///
    /// ```
    /// use pdi_morph::Sel;
    ///
    /// let cross = Sel::from_string(".x.\nxxx\n.x.").unwrap();
    /// assert_eq!(cross.hit_count(), 5);
    /// assert!(!cross.is_hit(0, 0));
    /// ```
    pub fn from_string(pattern: &str) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut mask = Vec::with_capacity(width as usize * rows.len());
        for row in &rows {
            if row.chars().count() != width as usize {
                return Err(MorphError::InvalidSel("ragged pattern rows".to_string()));
            }
            for c in row.chars() {
                match c {
                    'x' | 'X' => mask.push(true),
                    '.' => mask.push(false),
                    other => {
                        return Err(MorphError::InvalidSel(format!(
                            "unexpected character '{}' in pattern",
                            other
                        )));
                    }
                }
            }
        }
        Self::from_mask(width, rows.len() as u32, &mask)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.height / 2
    }

    /// Whether (x, y) is a hit; out-of-range positions are not
    #[inline]
    pub fn is_hit(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[(y * self.width + x) as usize]
    }

    /// Number of hits
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&hit| hit).count()
    }

    /// Offsets `(dx, dy)` of every hit relative to the origin
    pub fn hit_offsets(&self) -> Vec<(i32, i32)> {
        let cx = self.origin_x() as i32;
        let cy = self.origin_y() as i32;
        let mut offsets = Vec::with_capacity(self.hit_count());
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_hit(x, y) {
                    offsets.push((x as i32 - cx, y as i32 - cy));
                }
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick() {
        let sel = Sel::brick(5, 3).unwrap();
        assert_eq!((sel.width(), sel.height()), (5, 3));
        assert_eq!((sel.origin_x(), sel.origin_y()), (2, 1));
        assert_eq!(sel.hit_count(), 15);
        assert!(Sel::brick(0, 3).is_err());
    }

    #[test]
    fn test_from_mask_errors() {
        assert!(matches!(
            Sel::from_mask(2, 2, &[false; 4]),
            Err(MorphError::InvalidSel(_))
        ));
        assert!(Sel::from_mask(2, 2, &[true; 3]).is_err());
        assert!(Sel::from_mask(0, 0, &[]).is_err());
    }

    #[test]
    fn test_from_string() {
        let sel = Sel::from_string("x..\n.x.\n..x").unwrap();
        assert_eq!(sel.hit_offsets(), vec![(-1, -1), (0, 0), (1, 1)]);
        assert!(Sel::from_string("xx\nx").is_err());
        assert!(Sel::from_string("xo").is_err());
        assert!(Sel::from_string("").is_err());
    }

    #[test]
    fn test_even_origin() {
        let sel = Sel::brick(4, 2).unwrap();
        assert_eq!((sel.origin_x(), sel.origin_y()), (2, 1));
        let offsets = sel.hit_offsets();
        assert_eq!(offsets.first(), Some(&(-2, -1)));
        assert_eq!(offsets.last(), Some(&(1, 0)));
    }
}
