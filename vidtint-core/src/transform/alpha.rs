use crate::frame::pixels::FramePixels;
use crate::transform::TransformOutcome;

/// Scale a frame's alpha channel by `factor`, in place.
///
/// Every alpha sample `a` becomes `round(a * factor)` clamped to `[0, 255]`;
/// color samples are untouched. Frames without an alpha channel are left
/// byte-identical and reported as [`TransformOutcome::SkippedNoAlpha`].
///
/// Applying `f1` then `f2` is equivalent to applying `f1 * f2` once, up to
/// per-sample rounding.
pub fn apply_transparency(factor: f64, frame: &mut FramePixels) -> TransformOutcome {
    let FramePixels::Rgba(img) = frame else {
        return TransformOutcome::SkippedNoAlpha;
    };

    for px in img.pixels_mut() {
        let a = f64::from(px.0[3]);
        px.0[3] = (a * factor).round().clamp(0.0, 255.0) as u8;
    }
    TransformOutcome::Applied
}

#[cfg(test)]
#[path = "../../tests/unit/transform/alpha.rs"]
mod tests;
