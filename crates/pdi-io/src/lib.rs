//! pdi-io - Image I/O for pdi
//!
//! Reads PNG, JPEG and PNM files into 8-bit grayscale [`Pix`] images and
//! writes them back. Formats are detected from magic bytes on read and
//! from the file extension on [`write_image_auto`].
//!
//! Each format can be disabled through Cargo features (`png-format`,
//! `jpeg`, `pnm`).

pub mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use log::debug;
use pdi_core::Pix;
#[cfg(feature = "png-format")]
use pdi_core::pix::graphics::BarChartStyle;
use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::Path;

/// Reduce an RGB triple to gray with ITU-R 601 weights, rounded.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Read an image from a file path
///
/// # Errors
///
/// Returns [`IoError::NotFound`] if the file does not exist,
/// [`IoError::UnsupportedFormat`] if the content is not a known format and
/// [`IoError::DecodeError`] if decoding fails.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::NotFound {
            path: path.display().to_string(),
        },
        _ => IoError::Io(e),
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    let pix = read_image_mem(&data)?;
    debug!(
        "read {} ({}x{})",
        path.display(),
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Read an image of a known format from a buffered, seekable reader
pub fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} reading not enabled",
            format
        ))),
    }
}

/// Write an image to a file path in the given format
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    debug!(
        "wrote {} ({:?}, {}x{})",
        path.display(),
        format,
        pix.width(),
        pix.height()
    );
    Ok(())
}

/// Write an image, choosing the format from the path's extension
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for an unknown extension.
pub fn write_image_auto<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match ImageFormat::from_path(path) {
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(format!(
            "cannot infer format from {}",
            path.display()
        ))),
        format => write_image(pix, path, format),
    }
}

/// Encode an image into memory
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        _ => {
            let _ = (pix, writer);
            Err(IoError::UnsupportedFormat(format!(
                "{:?} writing not enabled",
                format
            )))
        }
    }
}

/// Create `path` and all missing parents; an existing directory is fine.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> IoResult<()> {
    std::fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Render `values` as a bar chart and save it as PNG.
///
/// `title` is stored in the PNG `Title` text chunk. Returns the rendered
/// chart.
#[cfg(feature = "png-format")]
pub fn render_bar_chart<P: AsRef<Path>>(values: &[u32], title: &str, path: P) -> IoResult<Pix> {
    let chart = Pix::render_bar_chart(values, &BarChartStyle::default())?;
    let mut chart_mut = chart.to_mut();
    chart_mut.set_text(Some(title.to_string()));
    let chart: Pix = chart_mut.into();
    write_image(&chart, path, ImageFormat::Png)?;
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_image("/nonexistent/dir/none.png");
        assert!(matches!(result, Err(IoError::NotFound { .. })));
    }

    #[test]
    fn test_read_unknown_bytes() {
        assert!(matches!(
            read_image_mem(b"hello world"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[cfg(feature = "pnm")]
    #[test]
    fn test_mem_roundtrip_pnm() {
        let pix = Pix::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        let bytes = write_image_mem(&pix, ImageFormat::Pnm).unwrap();
        assert!(read_image_mem(&bytes).unwrap().equals(&pix));
    }

    #[test]
    fn test_write_unknown_format() {
        let pix = Pix::new(2, 2).unwrap();
        assert!(write_image_mem(&pix, ImageFormat::Unknown).is_err());
        assert!(write_image_auto(&pix, "out.xyz").is_err());
    }
}
