//! Deterministic per-frame pixel transforms.
//!
//! Every transform is a pure function over one owned frame buffer: same
//! dimensions and channel count in and out, no state, no cross-frame
//! dependency. The pipeline applies each configured transform over the full
//! frame sequence before the next one starts.

pub mod alpha;
pub mod color;
pub mod hls;

use crate::foundation::error::{TintError, TintResult};
use crate::frame::pixels::FramePixels;

/// A configured per-frame transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameTransform {
    /// Scale the alpha channel by a constant factor in `[0, 1]`.
    Transparency {
        /// Multiplicative alpha factor.
        factor: f64,
    },
    /// Collapse the image to a single hue and scale saturation, preserving
    /// per-pixel lightness.
    ColorFilter {
        /// Target hue as a fraction of the hue range, nominally `[0, 1]`.
        hue: f64,
        /// Multiplicative saturation factor (no upper bound).
        saturation: f64,
    },
}

/// Result of applying a transform to one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The frame's pixel data was rewritten.
    Applied,
    /// The frame lacks an alpha channel and was left byte-identical.
    /// Recoverable: the pipeline reports the skip and continues.
    SkippedNoAlpha,
}

impl FrameTransform {
    /// Check the transform's parameters before any frame is touched.
    pub fn validate(&self) -> TintResult<()> {
        match *self {
            Self::Transparency { factor } => {
                // NaN fails both comparisons.
                if !(0.0..=1.0).contains(&factor) {
                    return Err(TintError::validation(format!(
                        "transparency factor must be between 0 and 1, got {factor}"
                    )));
                }
            }
            Self::ColorFilter { hue, saturation } => {
                if !hue.is_finite() {
                    return Err(TintError::validation(format!(
                        "color filter hue must be a finite number, got {hue}"
                    )));
                }
                if !saturation.is_finite() {
                    return Err(TintError::validation(format!(
                        "color filter saturation must be a finite number, got {saturation}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Apply the transform to one frame in place.
    ///
    /// Parameters are assumed to have passed [`FrameTransform::validate`].
    pub fn apply(&self, frame: &mut FramePixels) -> TransformOutcome {
        match *self {
            Self::Transparency { factor } => alpha::apply_transparency(factor, frame),
            Self::ColorFilter { hue, saturation } => {
                color::apply_color_filter(hue, saturation, frame);
                TransformOutcome::Applied
            }
        }
    }
}

impl std::fmt::Display for FrameTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Transparency { factor } => write!(f, "transparency factor={factor}"),
            Self::ColorFilter { hue, saturation } => {
                write!(f, "color filter hue={hue} saturation={saturation}")
            }
        }
    }
}

/// Parse a CLI `HUE,SATURATION` argument into a color filter transform.
///
/// Both components must parse as real numbers; anything else is a
/// validation error reported before any frame I/O happens.
pub fn parse_color_filter(arg: &str) -> TintResult<FrameTransform> {
    let (hue, saturation) = arg.split_once(',').ok_or_else(|| {
        TintError::validation(format!(
            "color filter must be 'HUE,SATURATION', got '{arg}'"
        ))
    })?;

    let hue: f64 = hue.trim().parse().map_err(|_| {
        TintError::validation(format!("color filter hue must be a number, got '{hue}'"))
    })?;
    let saturation: f64 = saturation.trim().parse().map_err(|_| {
        TintError::validation(format!(
            "color filter saturation must be a number, got '{saturation}'"
        ))
    })?;

    let transform = FrameTransform::ColorFilter { hue, saturation };
    transform.validate()?;
    Ok(transform)
}

#[cfg(test)]
#[path = "../tests/unit/transform/parse.rs"]
mod tests;
