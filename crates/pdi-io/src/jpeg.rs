//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Color images are reduced to gray with [`crate::luma`];
//! output is always single-channel.

use crate::{IoError, IoResult, luma};
use jpeg_decoder::PixelFormat;
use pdi_core::Pix;
use std::io::{Read, Write};

/// Quality used by [`write_jpeg`]
pub const DEFAULT_QUALITY: u8 = 95;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let gray: Vec<u8> = match info.pixel_format {
        PixelFormat::L8 => pixels,
        // 16-bit samples come out big-endian
        PixelFormat::L16 => pixels.chunks_exact(2).map(|s| s[0]).collect(),
        PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .map(|s| luma(s[0], s[1], s[2]))
            .collect(),
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG images are not supported".to_string(),
            ));
        }
    };

    Ok(Pix::from_data(width, height, gray)?)
}

/// Write a JPEG image with [`DEFAULT_QUALITY`].
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(pix, writer, DEFAULT_QUALITY)
}

/// Write a JPEG image with an explicit quality in `1..=100`.
pub fn write_jpeg_with_quality<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality {} outside 1..=100",
            quality
        )));
    }
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("width {} too large for JPEG", pix.width())))?;
    let height = u16::try_from(pix.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} too large for JPEG", pix.height()))
    })?;

    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(pix.data(), width, height, jpeg_encoder::ColorType::Luma)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
