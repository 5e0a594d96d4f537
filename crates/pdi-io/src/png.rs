//! PNG image format support
//!
//! Every PNG color type is decoded to 8-bit gray. Low bit depths are
//! scaled up to the full 0..=255 range, 16-bit samples keep their high
//! byte, alpha is dropped and color is reduced with [`crate::luma`].
//! A `Title` text chunk, if present, becomes the image text.

use crate::{IoError, IoResult, luma};
use pdi_core::Pix;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Keyword of the text chunk carrying the image title
pub const TITLE_KEYWORD: &str = "Title";

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;
    let palette: Option<Vec<u8>> = info.palette.as_ref().map(|p| p.to_vec());
    let title = info
        .uncompressed_latin1_text
        .iter()
        .find(|chunk| chunk.keyword == TITLE_KEYWORD)
        .map(|chunk| chunk.text.clone());

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let wide = bit_depth == BitDepth::Sixteen;

    let pix = Pix::new(width, height)?;
    let mut pix_mut = pix.to_mut();
    pix_mut.set_text(title);

    for y in 0..height {
        let src = &data[y as usize * bytes_per_row..];
        let dst = pix_mut.row_mut(y);
        match color_type {
            ColorType::Grayscale | ColorType::Indexed if (bit_depth as u8) < 8 => {
                let bits = bit_depth as u32;
                let per_byte = 8 / bits;
                let mask = (1u8 << bits) - 1;
                for (x, d) in dst.iter_mut().enumerate() {
                    let x = x as u32;
                    let byte = src[(x / per_byte) as usize];
                    let shift = 8 - bits * (x % per_byte + 1);
                    let index = (byte >> shift) & mask;
                    *d = if color_type == ColorType::Indexed {
                        palette_gray(palette.as_deref(), index)?
                    } else {
                        (index as u32 * 255 / mask as u32) as u8
                    };
                }
            }
            ColorType::Indexed => {
                for (x, d) in dst.iter_mut().enumerate() {
                    *d = palette_gray(palette.as_deref(), src[x])?;
                }
            }
            ColorType::Grayscale | ColorType::GrayscaleAlpha => {
                let samples = if color_type == ColorType::Grayscale {
                    1
                } else {
                    2
                };
                let step = if wide { samples * 2 } else { samples };
                for (x, d) in dst.iter_mut().enumerate() {
                    *d = src[x * step];
                }
            }
            ColorType::Rgb | ColorType::Rgba => {
                let samples = if color_type == ColorType::Rgb { 3 } else { 4 };
                let sample = if wide { 2 } else { 1 };
                for (x, d) in dst.iter_mut().enumerate() {
                    let idx = x * samples * sample;
                    *d = luma(src[idx], src[idx + sample], src[idx + 2 * sample]);
                }
            }
        }
    }

    Ok(pix_mut.into())
}

/// Look up a palette entry and reduce it to gray
fn palette_gray(palette: Option<&[u8]>, index: u8) -> IoResult<u8> {
    let palette =
        palette.ok_or_else(|| IoError::InvalidData("indexed PNG without palette".to_string()))?;
    let start = index as usize * 3;
    palette
        .get(start..start + 3)
        .map(|rgb| luma(rgb[0], rgb[1], rgb[2]))
        .ok_or_else(|| IoError::InvalidData(format!("palette index {} out of range", index)))
}

/// Write a PNG image
///
/// The output is always 8-bit grayscale. The image text, if any, is
/// stored in a `Title` text chunk.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    if let Some(text) = pix.text() {
        encoder
            .add_text_chunk(TITLE_KEYWORD.to_string(), text.to_string())
            .map_err(|e| IoError::EncodeError(format!("PNG text chunk error: {}", e)))?;
    }

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
