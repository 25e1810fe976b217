use std::fmt;

use crate::foundation::error::{TintError, TintResult};

/// Rational frames-per-second value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    /// Numerator, must be > 0.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

/// Frame rate of every encoded output clip.
///
/// The pipeline always re-encodes at 24 fps regardless of the source clip's
/// native rate. Fixed output rate is deliberate, not something to silently
/// correct.
pub const OUTPUT_FPS: Fps = Fps { num: 24, den: 1 };

impl Fps {
    /// Validated constructor.
    pub fn new(num: u32, den: u32) -> TintResult<Self> {
        if num == 0 {
            return Err(TintError::validation("Fps num must be > 0"));
        }
        if den == 0 {
            return Err(TintError::validation("Fps den must be > 0"));
        }
        Ok(Self { num, den })
    }
}

impl fmt::Display for Fps {
    /// Rational form accepted by ffmpeg's `-framerate`, e.g. `24/1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
