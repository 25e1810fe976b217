use crate::frame::pixels::FramePixels;
use crate::transform::hls::{hls_to_rgb_u8, rgb_to_hls_u8};

/// Recolor a frame to a single hue while preserving per-pixel lightness.
///
/// Every pixel's color channels take the HLS round-trip: hue is replaced by
/// the constant `hue * 179` (truncated and clamped to the 8-bit hue range,
/// irrespective of the pixel's original hue), saturation is multiplied by
/// `saturation` and clamped to `[0, 255]`, lightness passes through. The
/// alpha channel, when present, is preserved byte-for-byte.
pub fn apply_color_filter(hue: f64, saturation: f64, frame: &mut FramePixels) {
    let target_hue = ((hue * 179.0) as i64).clamp(0, 179) as u8;

    match frame {
        FramePixels::Rgb(img) => {
            for px in img.pixels_mut() {
                px.0 = recolor_rgb(px.0, target_hue, saturation);
            }
        }
        FramePixels::Rgba(img) => {
            for px in img.pixels_mut() {
                let [r, g, b, a] = px.0;
                let [r, g, b] = recolor_rgb([r, g, b], target_hue, saturation);
                px.0 = [r, g, b, a];
            }
        }
    }
}

fn recolor_rgb(rgb: [u8; 3], target_hue: u8, saturation: f64) -> [u8; 3] {
    let [_, l, s] = rgb_to_hls_u8(rgb);
    let s = (f64::from(s) * saturation).round().clamp(0.0, 255.0) as u8;
    hls_to_rgb_u8([target_hue, l, s])
}

#[cfg(test)]
#[path = "../../tests/unit/transform/color.rs"]
mod tests;
