//! Simple raster graphics
//!
//! Renders diagnostic images directly into a [`Pix`]:
//!
//! - Bar charts (used for gray-level histograms)
//! - Side-by-side tiling of several images into one panel

use super::Pix;
use crate::error::{Error, Result};

/// Layout of a rendered bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChartStyle {
    /// Width of each bar in pixels
    pub bar_width: u32,
    /// Height of the plotting area in pixels
    pub plot_height: u32,
    /// Blank margin around the plotting area
    pub margin: u32,
    /// Background gray level
    pub background: u8,
    /// Bar gray level
    pub bar: u8,
    /// Axis gray level
    pub axis: u8,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 2,
            plot_height: 200,
            margin: 10,
            background: 255,
            bar: 128,
            axis: 0,
        }
    }
}

impl Pix {
    /// Render `values` as a vertical bar chart.
    ///
    /// Bars are scaled so that the largest value fills the plotting area.
    /// An all-zero series renders just the axes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `values` is empty or the
    /// style has a zero bar width or plot height.
    pub fn render_bar_chart(values: &[u32], style: &BarChartStyle) -> Result<Pix> {
        if values.is_empty() {
            return Err(Error::InvalidParameter("no values to plot".into()));
        }
        if style.bar_width == 0 || style.plot_height == 0 {
            return Err(Error::InvalidParameter(
                "bar width and plot height must be > 0".into(),
            ));
        }

        let plot_w = values.len() as u32 * style.bar_width;
        let width = plot_w + 2 * style.margin + 1;
        let height = style.plot_height + 2 * style.margin + 1;
        let mut pm = Pix::new_with_value(width, height, style.background)?.to_mut();

        let x0 = style.margin + 1;
        let y_axis = style.margin + style.plot_height;
        let max = values.iter().copied().max().unwrap_or(0);

        if max > 0 {
            for (i, &v) in values.iter().enumerate() {
                let h = ((v as f64 / max as f64) * style.plot_height as f64).round() as u32;
                if h == 0 {
                    continue;
                }
                let left = x0 + i as u32 * style.bar_width;
                for y in (y_axis - h)..y_axis {
                    let row = pm.row_mut(y);
                    row[left as usize..(left + style.bar_width) as usize].fill(style.bar);
                }
            }
        }

        // x axis along the bottom, y axis along the left edge
        for x in style.margin..(x0 + plot_w) {
            pm.set_pixel_unchecked(x, y_axis, style.axis);
        }
        for y in style.margin..=y_axis {
            pm.set_pixel_unchecked(style.margin, y, style.axis);
        }

        Ok(pm.into())
    }

    /// Place images left to right, `spacing` pixels apart, top-aligned.
    ///
    /// Uncovered areas are filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `pixs` is empty.
    pub fn tile_horizontal(pixs: &[&Pix], spacing: u32, background: u8) -> Result<Pix> {
        if pixs.is_empty() {
            return Err(Error::InvalidParameter("no images to tile".into()));
        }
        let width =
            pixs.iter().map(|p| p.width()).sum::<u32>() + spacing * (pixs.len() as u32 - 1);
        let height = pixs.iter().map(|p| p.height()).max().unwrap_or(0);
        let mut pm = Pix::new_with_value(width, height, background)?.to_mut();

        let mut left = 0usize;
        for pix in pixs {
            let w = pix.width() as usize;
            for y in 0..pix.height() {
                pm.row_mut(y)[left..left + w].copy_from_slice(pix.row(y));
            }
            left += w + spacing as usize;
        }
        Ok(pm.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_tallest_bar_fills_plot() {
        let style = BarChartStyle {
            bar_width: 1,
            plot_height: 10,
            margin: 2,
            ..Default::default()
        };
        let chart = Pix::render_bar_chart(&[0, 5, 10], &style).unwrap();
        assert_eq!(chart.dimensions(), (3 + 4 + 1, 10 + 4 + 1));

        // bar 2 occupies column x0 + 2 = 5 over the full plot height
        for y in 2..12 {
            assert_eq!(chart.get_pixel(5, y), Some(style.bar));
        }
        // bar 1 is half height
        assert_eq!(chart.get_pixel(4, 6), Some(style.background));
        assert_eq!(chart.get_pixel(4, 7), Some(style.bar));
        // bar 0 is empty
        assert_eq!(chart.get_pixel(3, 11), Some(style.background));
        // axis
        assert_eq!(chart.get_pixel(5, 12), Some(style.axis));
    }

    #[test]
    fn test_bar_chart_all_zero() {
        let chart = Pix::render_bar_chart(&[0; 256], &BarChartStyle::default()).unwrap();
        assert!(chart.data().iter().all(|&v| v == 255 || v == 0));
    }

    #[test]
    fn test_bar_chart_rejects_empty() {
        assert!(Pix::render_bar_chart(&[], &BarChartStyle::default()).is_err());
    }

    #[test]
    fn test_tile_horizontal() {
        let a = Pix::new_with_value(2, 3, 10).unwrap();
        let b = Pix::new_with_value(1, 1, 20).unwrap();
        let t = Pix::tile_horizontal(&[&a, &b], 1, 255).unwrap();
        assert_eq!(t.dimensions(), (4, 3));
        assert_eq!(t.row(0), &[10, 10, 255, 20]);
        assert_eq!(t.row(2), &[10, 10, 255, 255]);
    }
}
