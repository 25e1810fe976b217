use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::TintResult;

/// File name of the frame with 1-based sequence index `index`.
///
/// The zero-padded 4-digit scheme (`frame0001.png`, `frame0002.png`, ...)
/// must match [`frame_pattern`] exactly: the decode step writes these names
/// and the encode step reads them back with the same stride.
pub fn frame_file_name(index: u64) -> String {
    format!("frame{index:04}.png")
}

/// The `ffmpeg` image2 sequence pattern for frames inside `dir`.
pub fn frame_pattern(dir: &Path) -> PathBuf {
    dir.join("frame%04d.png")
}

/// Parse the 1-based sequence index out of a frame file name.
///
/// Returns `None` for anything that does not follow the store's naming
/// scheme, so stray files in the working directory are never picked up.
pub fn parse_frame_index(file_name: &str) -> Option<u64> {
    let digits = file_name.strip_prefix("frame")?.strip_suffix(".png")?;
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Enumerate the frame files in `dir`, ordered numerically by sequence index.
///
/// Numeric ordering matters beyond the 4-digit padding guarantee: a clip
/// with 10000+ frames widens the index, and lexical byte order would place
/// `frame10000.png` before `frame9999.png`.
pub fn list_frames(dir: &Path) -> TintResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list working directory '{}'", dir.display()))?;

    let mut frames = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("failed to read working directory entry in '{}'", dir.display())
        })?;
        let name = entry.file_name();
        if let Some(index) = name.to_str().and_then(parse_frame_index) {
            frames.push((index, entry.path()));
        }
    }

    frames.sort_by_key(|(index, _)| *index);
    Ok(frames.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/frame/store.rs"]
mod tests;
