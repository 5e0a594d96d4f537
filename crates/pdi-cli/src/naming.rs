//! Output file naming

use pdi_filter::{LaplacianMask, NormalizePolicy};
use std::path::Path;

/// Base name of an input: the file name up to its first `.`.
///
/// Falls back to `"image"` when that leaves nothing (e.g. `.hidden.png`).
pub fn base_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split('.').next() {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => "image".to_string(),
    }
}

pub fn sobel_name(base: &str, policy: NormalizePolicy) -> String {
    format!("{}_sobel_{}.png", base, policy.suffix())
}

pub fn laplacian_name(base: &str, mask: LaplacianMask, policy: NormalizePolicy) -> String {
    format!("{}_laplacian_{}_{}.png", base, mask, policy.suffix())
}

/// `<base>_<op>.png`, op being `erosion`, `dilation`, `gradient` or `morphology`
pub fn morph_name(base: &str, op: &str) -> String {
    format!("{}_{}.png", base, op)
}
