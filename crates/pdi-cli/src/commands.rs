//! Subcommand implementations
//!
//! Each command processes its inputs one after another. A failing input is
//! reported and skipped; the command itself fails afterwards if any input
//! did.

use crate::naming::{base_name, laplacian_name, morph_name, sobel_name};
use crate::{CliError, CliResult};
use pdi_core::Pix;
use pdi_filter::{LaplacianMask, NormalizePolicy, equalize_histogram, laplacian_edge, sobel_edge};
use pdi_io::{ImageFormat, ensure_dir, read_image, render_bar_chart, write_image_auto};
use pdi_morph::{Sel, dilate_gray, erode_gray, gradient_gray};
use std::path::{Path, PathBuf};

/// Side length of the synthesized demo image
pub const DEMO_SIZE: u32 = 200;

/// File name of the synthesized demo image inside the output directory
pub const DEMO_FILE: &str = "test_image.png";

/// Gap between the tiles of the morphology panel
const PANEL_SPACING: u32 = 10;

/// 200x200 black image with a white square covering `50..150`.
pub fn demo_image() -> CliResult<Pix> {
    let lo = DEMO_SIZE / 4;
    let hi = DEMO_SIZE - lo;
    let mut pix = Pix::new(DEMO_SIZE, DEMO_SIZE)?.to_mut();
    for y in lo..hi {
        pix.row_mut(y)[lo as usize..hi as usize].fill(255);
    }
    Ok(pix.into())
}

/// Resolve the list of inputs, writing the demo image when requested.
///
/// The demo image is only created if it does not already exist.
pub fn resolve_inputs(inputs: &[PathBuf], demo: bool, out_dir: &Path) -> CliResult<Vec<PathBuf>> {
    let mut resolved = inputs.to_vec();
    if demo {
        ensure_dir(out_dir)?;
        let path = out_dir.join(DEMO_FILE);
        if !path.exists() {
            write_image_auto(&demo_image()?, &path)?;
            tracing::info!("Created demo image: {}", path.display());
        }
        resolved.push(path);
    }
    if resolved.is_empty() {
        return Err("no input images given; pass one or more paths or --demo".into());
    }
    Ok(resolved)
}

/// Run `process` on every input, logging failures and continuing.
fn run_batch<F>(inputs: &[PathBuf], mut process: F) -> CliResult<()>
where
    F: FnMut(&Path) -> CliResult<()>,
{
    let mut failed = 0usize;
    for input in inputs {
        if let Err(e) = process(input) {
            tracing::error!("{}: {}", input.display(), e);
            failed += 1;
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} inputs failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn load(input: &Path) -> CliResult<Pix> {
    let pix = read_image(input).map_err(|e| -> CliError {
        format!("failed to read image {}: {}", input.display(), e).into()
    })?;
    tracing::info!(
        "Loaded {} ({}x{})",
        input.display(),
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

fn save(pix: &Pix, path: &Path) -> CliResult<()> {
    write_image_auto(pix, path)?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}

/// Sobel magnitude for each input and policy.
pub fn run_sobel(
    inputs: &[PathBuf],
    policies: &[NormalizePolicy],
    out_dir: &Path,
) -> CliResult<()> {
    ensure_dir(out_dir)?;
    run_batch(inputs, |input| {
        let pix = load(input)?;
        let base = base_name(input);
        for &policy in policies {
            let edges = sobel_edge(&pix, policy)?;
            save(&edges, &out_dir.join(sobel_name(&base, policy)))?;
        }
        Ok(())
    })
}

/// Laplacian edges for each input, mask and policy.
///
/// `masks` are already validated ids, so a bad `--mask` fails before any
/// file is touched.
pub fn run_laplacian(
    inputs: &[PathBuf],
    masks: &[LaplacianMask],
    policies: &[NormalizePolicy],
    out_dir: &Path,
) -> CliResult<()> {
    ensure_dir(out_dir)?;
    run_batch(inputs, |input| {
        let pix = load(input)?;
        let base = base_name(input);
        for &mask in masks {
            for &policy in policies {
                let edges = laplacian_edge(&pix, mask, policy)?;
                save(&edges, &out_dir.join(laplacian_name(&base, mask, policy)))?;
            }
        }
        Ok(())
    })
}

/// Histogram equalization with before/after histogram charts.
///
/// A single input writes straight into `out_dir`; with several inputs each
/// one gets its own `out_dir/<base>` subdirectory so results don't collide.
pub fn run_equalize(inputs: &[PathBuf], out_dir: &Path) -> CliResult<()> {
    let nested = inputs.len() > 1;
    run_batch(inputs, |input| {
        let pix = load(input)?;
        let dir = if nested {
            out_dir.join(base_name(input))
        } else {
            out_dir.to_path_buf()
        };
        ensure_dir(&dir)?;

        let eq = equalize_histogram(&pix);
        let jpg = ImageFormat::Jpeg.extension();
        save(&eq.pix, &dir.join(format!("equalized.{}", jpg)))?;
        save(&pix, &dir.join(format!("original.{}", jpg)))?;

        for (hist, title, name) in [
            (&eq.hist_before, "Original Histogram", "histogram_original.png"),
            (&eq.hist_after, "Equalized Histogram", "histogram_equalized.png"),
        ] {
            let path = dir.join(name);
            render_bar_chart(hist, title, &path)?;
            tracing::info!("Saved {}", path.display());
        }
        Ok(())
    })
}

/// Erosion, dilation and gradient with a `size` x `size` brick.
pub fn run_morph(inputs: &[PathBuf], size: u32, out_dir: &Path) -> CliResult<()> {
    let sel = Sel::brick(size, size)?;
    ensure_dir(out_dir)?;
    run_batch(inputs, |input| {
        let pix = load(input)?;
        let base = base_name(input);

        let eroded = erode_gray(&pix, &sel)?;
        let dilated = dilate_gray(&pix, &sel)?;
        let gradient = gradient_gray(&pix, &sel)?;
        save(&eroded, &out_dir.join(morph_name(&base, "erosion")))?;
        save(&dilated, &out_dir.join(morph_name(&base, "dilation")))?;
        save(&gradient, &out_dir.join(morph_name(&base, "gradient")))?;

        let panel = Pix::tile_horizontal(
            &[&pix, &eroded, &dilated, &gradient],
            PANEL_SPACING,
            255,
        )?;
        save(&panel, &out_dir.join(morph_name(&base, "morphology")))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pdi-cli-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_demo_image() {
        let pix = demo_image().unwrap();
        assert_eq!(pix.dimensions(), (200, 200));
        assert_eq!(pix.get_pixel(49, 49), Some(0));
        assert_eq!(pix.get_pixel(50, 50), Some(255));
        assert_eq!(pix.get_pixel(149, 149), Some(255));
        assert_eq!(pix.get_pixel(150, 150), Some(0));
        assert_eq!(pix.gray_histogram()[255], 100 * 100);
    }

    #[test]
    fn test_resolve_inputs() {
        let dir = scratch_dir("resolve");
        assert!(resolve_inputs(&[], false, &dir).is_err());
        let inputs = resolve_inputs(&[], true, &dir).unwrap();
        assert_eq!(inputs, vec![dir.join(DEMO_FILE)]);
        assert!(inputs[0].exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_sobel_and_laplacian_outputs() {
        let dir = scratch_dir("edges");
        let inputs = resolve_inputs(&[], true, &dir).unwrap();
        run_sobel(&inputs, &NormalizePolicy::ALL, &dir).unwrap();
        assert!(dir.join("test_image_sobel_clip0.png").exists());
        assert!(dir.join("test_image_sobel_scale.png").exists());

        run_laplacian(
            &inputs,
            &LaplacianMask::ALL,
            &[NormalizePolicy::Scale],
            &dir,
        )
        .unwrap();
        for id in 1..=4 {
            let name = format!("test_image_laplacian_mask{}_scale.png", id);
            assert!(dir.join(name).exists());
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = scratch_dir("batch");
        let mut inputs = vec![dir.join("missing.png")];
        inputs.extend(resolve_inputs(&[], true, &dir).unwrap());
        let result = run_sobel(&inputs, &[NormalizePolicy::ClipZero], &dir);
        assert!(result.is_err());
        // the good input was still processed
        assert!(dir.join("test_image_sobel_clip0.png").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_equalize_and_morph_outputs() {
        let dir = scratch_dir("eqmorph");
        let inputs = resolve_inputs(&[], true, &dir).unwrap();
        run_equalize(&inputs, &dir).unwrap();
        for name in [
            "equalized.jpg",
            "original.jpg",
            "histogram_original.png",
            "histogram_equalized.png",
        ] {
            assert!(dir.join(name).exists(), "missing {}", name);
        }

        run_morph(&inputs, 5, &dir).unwrap();
        let panel = read_image(dir.join("test_image_morphology.png")).unwrap();
        assert_eq!(panel.dimensions(), (4 * 200 + 3 * PANEL_SPACING, 200));
        assert!(run_morph(&inputs, 0, &dir).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
