//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ascii, P5 binary) and PPM (P3 ascii, P6 binary) with any
//! maxval up to 65535; samples are rescaled to 0..=255 and color is
//! reduced to gray. Writes binary PGM (P5) only.

use crate::{IoError, IoResult, luma};
use pdi_core::Pix;
use std::io::{BufRead, Write};

/// Header fields shared by all PNM variants
struct PnmHeader {
    magic: [u8; 2],
    width: u32,
    height: u32,
    maxval: u32,
}

/// Read a PNM image (P2/P3/P5/P6) from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut pos = 0;
    let header = parse_header(&bytes, &mut pos)?;
    let channels = match &header.magic {
        b"P2" | b"P5" => 1,
        b"P3" | b"P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {}",
                String::from_utf8_lossy(other)
            )));
        }
    };
    let count = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| IoError::InvalidData("PNM dimensions overflow".to_string()))?;
    let remaining = bytes.len().saturating_sub(pos);

    let samples: Vec<u32> = match &header.magic {
        b"P2" | b"P3" => {
            // n ascii samples take at least 2n - 1 bytes
            if count > remaining.div_ceil(2) {
                return Err(IoError::InvalidData(format!(
                    "PNM header declares {} samples, only {} bytes follow",
                    count, remaining
                )));
            }
            let mut samples = Vec::with_capacity(count);
            for _ in 0..count {
                samples.push(next_number(&bytes, &mut pos)?);
            }
            samples
        }
        _ => {
            // exactly one whitespace byte separates header and raster
            pos += 1;
            let wide = header.maxval > 255;
            let raster = count
                .checked_mul(if wide { 2 } else { 1 })
                .and_then(|needed| pos.checked_add(needed))
                .and_then(|end| bytes.get(pos..end))
                .ok_or_else(|| IoError::InvalidData("PNM raster truncated".to_string()))?;
            if wide {
                raster
                    .chunks_exact(2)
                    .map(|s| ((s[0] as u32) << 8) | s[1] as u32)
                    .collect()
            } else {
                raster.iter().map(|&v| v as u32).collect()
            }
        }
    };

    let maxval = header.maxval;
    let scale = |v: u32| -> u8 { ((v.min(maxval) * 255 + maxval / 2) / maxval) as u8 };
    let gray: Vec<u8> = if channels == 1 {
        samples.into_iter().map(scale).collect()
    } else {
        samples
            .chunks_exact(3)
            .map(|s| luma(scale(s[0]), scale(s[1]), scale(s[2])))
            .collect()
    };

    Ok(Pix::from_data(header.width, header.height, gray)?)
}

fn parse_header(bytes: &[u8], pos: &mut usize) -> IoResult<PnmHeader> {
    let magic: [u8; 2] = bytes
        .get(..2)
        .and_then(|m| m.try_into().ok())
        .ok_or_else(|| IoError::InvalidData("PNM header truncated".to_string()))?;
    if magic[0] != b'P' {
        return Err(IoError::InvalidData("missing PNM magic".to_string()));
    }
    *pos = 2;
    let width = next_number(bytes, pos)?;
    let height = next_number(bytes, pos)?;
    let maxval = next_number(bytes, pos)?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid PNM maxval {}", maxval)));
    }
    Ok(PnmHeader {
        magic,
        width,
        height,
        maxval,
    })
}

/// Parse the next decimal token, skipping whitespace and `#` comments.
fn next_number(bytes: &[u8], pos: &mut usize) -> IoResult<u32> {
    loop {
        match bytes.get(*pos) {
            Some(b'#') => {
                while let Some(&c) = bytes.get(*pos) {
                    if c == b'\n' {
                        break;
                    }
                    *pos += 1;
                }
            }
            Some(c) if c.is_ascii_whitespace() => *pos += 1,
            _ => break,
        }
    }

    let start = *pos;
    while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    if start == *pos {
        return Err(IoError::InvalidData(format!(
            "expected a number at byte {}",
            start
        )));
    }
    std::str::from_utf8(&bytes[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| IoError::InvalidData(format!("number out of range at byte {}", start)))
}

/// Write a `Pix` as binary PGM (P5).
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", pix.width(), pix.height())?;
    writer.write_all(pix.data())?;
    writer.flush()?;
    Ok(())
}
