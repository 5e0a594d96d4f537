//! Response normalization
//!
//! Maps a floating-point response map into an 8-bit image.

use crate::{FilterError, FilterResult};
use log::{debug, warn};
use pdi_core::{FPix, Pix};
use std::fmt;
use std::str::FromStr;

/// How out-of-range responses are brought into `[0, 255]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePolicy {
    /// Clamp to `[0, 255]`; negatives become 0
    #[default]
    ClipZero,
    /// Stretch `[min, max]` linearly onto `[0, 255]`
    Scale,
}

impl NormalizePolicy {
    /// Both policies, in a fixed order
    pub const ALL: [NormalizePolicy; 2] = [NormalizePolicy::ClipZero, NormalizePolicy::Scale];

    /// Output file name suffix: `clip0` or `scale`
    pub fn suffix(self) -> &'static str {
        match self {
            NormalizePolicy::ClipZero => "clip0",
            NormalizePolicy::Scale => "scale",
        }
    }
}

impl FromStr for NormalizePolicy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clip_zero" | "clip0" => Ok(NormalizePolicy::ClipZero),
            "scale" => Ok(NormalizePolicy::Scale),
            other => Err(FilterError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for NormalizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NormalizePolicy::ClipZero => "clip_zero",
            NormalizePolicy::Scale => "scale",
        })
    }
}

/// Convert a response map into an 8-bit image
///
/// - `ClipZero`: `round(clamp(v, 0, 255))`
/// - `Scale`: `round((v - min) / (max - min) * 255)`; a flat map
///   (`max == min`) becomes all zeros.
///
/// The output has the dimensions of `response`.
pub fn normalize(response: &FPix, policy: NormalizePolicy) -> FilterResult<Pix> {
    let data: Vec<u8> = match policy {
        NormalizePolicy::ClipZero => response
            .data()
            .iter()
            .map(|&v| v.clamp(0.0, 255.0).round() as u8)
            .collect(),
        NormalizePolicy::Scale => {
            let (min, max) = response.min_max();
            if max == min {
                warn!("normalize: flat response ({}), output is all zero", min);
                vec![0; response.data().len()]
            } else {
                let range = max - min;
                response
                    .data()
                    .iter()
                    .map(|&v| ((v - min) / range * 255.0).round() as u8)
                    .collect()
            }
        }
    };

    debug!(
        "normalize: {}x{} with {}",
        response.width(),
        response.height(),
        policy
    );
    Ok(Pix::from_data(response.width(), response.height(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_tokens() {
        for (token, policy) in [
            ("clip_zero", NormalizePolicy::ClipZero),
            ("clip0", NormalizePolicy::ClipZero),
            ("scale", NormalizePolicy::Scale),
        ] {
            assert_eq!(token.parse::<NormalizePolicy>().unwrap(), policy);
        }
        assert!(matches!(
            "stretch".parse::<NormalizePolicy>(),
            Err(FilterError::InvalidPolicy(t)) if t == "stretch"
        ));
        for policy in NormalizePolicy::ALL {
            let parsed: NormalizePolicy = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn test_suffix() {
        assert_eq!(NormalizePolicy::ClipZero.suffix(), "clip0");
        assert_eq!(NormalizePolicy::Scale.suffix(), "scale");
    }

    #[test]
    fn test_clip_zero() {
        let fpix = FPix::from_rows(&[[-1020.0f32, -0.4, 0.5, 254.6, 255.0, 300.0]]).unwrap();
        let pix = normalize(&fpix, NormalizePolicy::ClipZero).unwrap();
        assert_eq!(pix.row(0), &[0, 0, 1, 255, 255, 255]);
    }

    #[test]
    fn test_scale() {
        let fpix = FPix::from_rows(&[[-100.0f32, 0.0, 100.0]]).unwrap();
        let pix = normalize(&fpix, NormalizePolicy::Scale).unwrap();
        assert_eq!(pix.row(0), &[0, 128, 255]);
    }

    #[test]
    fn test_scale_flat() {
        let fpix = FPix::new_with_value(3, 2, 42.0).unwrap();
        let pix = normalize(&fpix, NormalizePolicy::Scale).unwrap();
        assert!(pix.data().iter().all(|&v| v == 0));
        assert_eq!(pix.dimensions(), (3, 2));
    }
}
