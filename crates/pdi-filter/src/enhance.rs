//! Histogram equalization
//!
//! Tone reproduction curve (TRC) mapping driven by the cumulative gray
//! level distribution of the image.

use log::debug;
use pdi_core::{GRAY_LEVELS, GrayHistogram, Pix};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input pixel values [0..255] to output pixel values [0..255].
pub type TrcLut = [u8; GRAY_LEVELS];

/// Generate a histogram equalization TRC lookup table.
///
/// With `p(k) = h(k) / N` and `cdf(k) = p(0) + ... + p(k)`, the table is
/// `lut[k] = round(255 * cdf(k))`, ties rounding to even. The table is
/// monotone and its last entry is 255.
pub fn equalize_trc(pix: &Pix) -> TrcLut {
    lut_from_histogram(&pix.gray_histogram())
}

fn lut_from_histogram(hist: &GrayHistogram) -> TrcLut {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    let mut lut = [0u8; GRAY_LEVELS];
    if total == 0 {
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = i as u8;
        }
        return lut;
    }

    let mut cumul = 0u64;
    for (entry, &count) in lut.iter_mut().zip(hist.iter()) {
        cumul += count as u64;
        *entry = (255.0 * cumul as f64 / total as f64).round_ties_even() as u8;
    }
    lut
}

/// Map every pixel of `pix` through `lut`.
pub fn trc_map(pix: &Pix, lut: &TrcLut) -> Pix {
    let mut out = pix.to_mut();
    for v in out.data_mut() {
        *v = lut[*v as usize];
    }
    out.into()
}

/// Result of [`equalize_histogram`]
#[derive(Debug, Clone)]
pub struct Equalization {
    /// The equalized image
    pub pix: Pix,
    /// Gray histogram of the input
    pub hist_before: GrayHistogram,
    /// Gray histogram of the output
    pub hist_after: GrayHistogram,
}

/// Equalize the gray histogram of `pix`.
pub fn equalize_histogram(pix: &Pix) -> Equalization {
    let hist_before = pix.gray_histogram();
    let lut = lut_from_histogram(&hist_before);
    let equalized = trc_map(pix, &lut);
    let hist_after = equalized.gray_histogram();

    let used = |h: &GrayHistogram| h.iter().filter(|&&c| c > 0).count();
    debug!(
        "equalize_histogram: {}x{}, {} gray levels in, {} out",
        pix.width(),
        pix.height(),
        used(&hist_before),
        used(&hist_after)
    );

    Equalization {
        pix: equalized,
        hist_before,
        hist_after,
    }
}
