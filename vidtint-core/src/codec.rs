//! External video decode/encode behind a narrow trait seam.

pub mod ffmpeg;
