use std::path::Path;

use crate::foundation::error::{TintError, TintResult};

/// An owned, mutable 8-bit raster frame.
///
/// Frames carry either 3 (RGB) or 4 (RGBA) channels; the channel count is
/// fixed per clip because the encoder declares a single pixel format for the
/// whole output. Transforms take frames by exclusive reference, so there is
/// never aliasing between frames of one job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FramePixels {
    /// 3-channel frame without an alpha plane.
    Rgb(image::RgbImage),
    /// 4-channel frame with a straight (non-premultiplied) alpha plane.
    Rgba(image::RgbaImage),
}

impl FramePixels {
    /// Read a PNG frame file, keeping its alpha plane when one is present.
    ///
    /// Sources with other channel layouts (grayscale, 16-bit) are widened to
    /// RGB/RGBA so every frame of a clip ends up with 8-bit samples.
    pub fn load(path: &Path) -> TintResult<Self> {
        let dyn_img = image::open(path).map_err(|e| {
            TintError::frame_io(format!("failed to read frame '{}': {e}", path.display()))
        })?;

        Ok(if dyn_img.color().has_alpha() {
            Self::Rgba(dyn_img.to_rgba8())
        } else {
            Self::Rgb(dyn_img.to_rgb8())
        })
    }

    /// Overwrite the frame file at `path` with this frame's pixel data.
    pub fn save(&self, path: &Path) -> TintResult<()> {
        let result = match self {
            Self::Rgb(img) => img.save_with_format(path, image::ImageFormat::Png),
            Self::Rgba(img) => img.save_with_format(path, image::ImageFormat::Png),
        };
        result.map_err(|e| {
            TintError::frame_io(format!("failed to write frame '{}': {e}", path.display()))
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.width(),
            Self::Rgba(img) => img.width(),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.height(),
            Self::Rgba(img) => img.height(),
        }
    }

    /// `true` when the frame carries a 4th (alpha) channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/pixels.rs"]
mod tests;
