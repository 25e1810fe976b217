//! Vidtint is a frame-by-frame video transparency and recoloring pipeline.
//!
//! A job turns a source clip into a new clip with an alpha channel in four
//! sequential stages:
//!
//! 1. **Decode**: the system `ffmpeg` splits the input into numbered PNG
//!    frames inside a private temporary directory ([`FfmpegCodec`]).
//! 2. **Transform**: zero or more [`FrameTransform`]s rewrite every frame in
//!    place (alpha scaling first, then the hue/saturation color filter).
//! 3. **Encode**: `ffmpeg` reassembles the frames into a VP9/WebM file with
//!    an alpha plane (`yuva420p`) at a fixed 24 fps.
//! 4. **Cleanup**: the working directory is removed on every exit path.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure per-frame transforms**: each frame is an owned, mutable buffer
//!   ([`FramePixels`]) with no cross-frame dependency, so a transform pass
//!   may optionally run in parallel.
//! - **Narrow codec seam**: the external decode/encode process sits behind
//!   the [`Codec`] trait so transform logic is testable without `ffmpeg`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod foundation;
mod frame;
mod pipeline;
mod transform;

pub use codec::ffmpeg::{
    Codec, FfmpegCodec, SourceInfo, ensure_parent_dir, is_ffmpeg_on_path, probe_source,
};
pub use foundation::core::{Fps, OUTPUT_FPS};
pub use foundation::error::{TintError, TintResult};
pub use frame::pixels::FramePixels;
pub use frame::store::{frame_file_name, frame_pattern, list_frames, parse_frame_index};
pub use pipeline::job::{JobStats, TransformJob, run_job};
pub use transform::alpha::apply_transparency;
pub use transform::color::apply_color_filter;
pub use transform::hls::{hls_to_rgb_u8, rgb_to_hls_u8};
pub use transform::{FrameTransform, TransformOutcome, parse_color_filter};
