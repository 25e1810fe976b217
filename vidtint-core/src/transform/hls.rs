//! 8-bit RGB <-> Hue-Lightness-Saturation conversion.
//!
//! Channel scaling follows the common 8-bit convention: hue is stored as
//! degrees halved (`0..=179` covers the full circle), lightness and
//! saturation span `0..=255`. The round-trip is lossy; intermediate values
//! are quantized back to 8-bit samples.

/// Convert one RGB pixel to `[h, l, s]`.
///
/// Achromatic pixels (saturation 0) report hue 0; their hue is undefined.
pub fn rgb_to_hls_u8(rgb: [u8; 3]) -> [u8; 3] {
    let r = f32::from(rgb[0]) / 255.0;
    let g = f32::from(rgb[1]) / 255.0;
    let b = f32::from(rgb[2]) / 255.0;

    let vmax = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let delta = vmax - vmin;
    let l = (vmax + vmin) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l < 0.5 {
        delta / (vmax + vmin)
    } else {
        delta / (2.0 - vmax - vmin)
    };

    let mut h = if delta == 0.0 {
        0.0
    } else if vmax == r {
        60.0 * (g - b) / delta
    } else if vmax == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }

    [
        // Halved degrees; 360 wraps back onto 0.
        ((h / 2.0).round() as i32).rem_euclid(180) as u8,
        (l * 255.0).round().clamp(0.0, 255.0) as u8,
        (s * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Convert one `[h, l, s]` pixel back to RGB.
pub fn hls_to_rgb_u8(hls: [u8; 3]) -> [u8; 3] {
    let h = f32::from(hls[0]) * 2.0;
    let l = f32::from(hls[1]) / 255.0;
    let s = f32::from(hls[2]) / 255.0;

    if s == 0.0 {
        let v = (l * 255.0).round().clamp(0.0, 255.0) as u8;
        return [v, v, v];
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    [
        channel_from_hue(m1, m2, h + 120.0),
        channel_from_hue(m1, m2, h),
        channel_from_hue(m1, m2, h - 120.0),
    ]
}

fn channel_from_hue(m1: f32, m2: f32, h: f32) -> u8 {
    let h = h.rem_euclid(360.0);
    let v = if h < 60.0 {
        m1 + (m2 - m1) * h / 60.0
    } else if h < 180.0 {
        m2
    } else if h < 240.0 {
        m1 + (m2 - m1) * (240.0 - h) / 60.0
    } else {
        m1
    };
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/transform/hls.rs"]
mod tests;
