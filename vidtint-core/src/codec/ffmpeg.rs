use std::path::Path;
use std::process::Command;

use anyhow::Context as _;

use crate::foundation::core::{Fps, OUTPUT_FPS};
use crate::foundation::error::{TintError, TintResult};
use crate::frame::store;

/// Container decode/encode performed by an external process.
///
/// The seam is deliberately narrow: a directory of numbered PNG frames on
/// one side, a video container on the other. That keeps the transform
/// pipeline testable with a synthetic implementation and no `ffmpeg` install.
pub trait Codec {
    /// Split `input` into numbered PNG frames inside `frames_dir`.
    ///
    /// Returns the number of frames produced. Zero is not an error here;
    /// the orchestrator decides that an empty decode fails the job.
    fn decode(&self, input: &Path, frames_dir: &Path) -> TintResult<u64>;

    /// Assemble the frames in `frames_dir` (in sequence order) into `output`.
    fn encode(&self, frames_dir: &Path, output: &Path) -> TintResult<()>;
}

/// Basic metadata about a source clip, probed through `ffprobe`.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel format reported by the container, when available.
    pub pix_fmt: Option<String>,
}

/// [`Codec`] implementation that spawns the system `ffmpeg` binary.
///
/// Decoding forces the `libvpx` decoder so VP8/VP9 alpha planes survive the
/// split into PNGs; encoding always produces VP9 with `yuva420p` at the
/// fixed [`OUTPUT_FPS`].
#[derive(Clone, Debug)]
pub struct FfmpegCodec {
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
    /// Output frame rate passed to the encoder.
    pub fps: Fps,
}

impl Default for FfmpegCodec {
    fn default() -> Self {
        Self {
            overwrite: true,
            fps: OUTPUT_FPS,
        }
    }
}

impl FfmpegCodec {
    /// Create a codec with default options (overwrite on, 24 fps output).
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for FfmpegCodec {
    fn decode(&self, input: &Path, frames_dir: &Path) -> TintResult<u64> {
        let info = probe_source(input)?;
        tracing::info!(
            width = info.width,
            height = info.height,
            pix_fmt = info.pix_fmt.as_deref().unwrap_or("unknown"),
            "probed source clip"
        );

        let out = Command::new("ffmpeg")
            .args(["-v", "error", "-vcodec", "libvpx", "-i"])
            .arg(input)
            .arg(store::frame_pattern(frames_dir))
            .output()
            .map_err(|e| TintError::decode(format!("failed to run ffmpeg for decode: {e}")))?;

        if !out.status.success() {
            return Err(TintError::decode(format!(
                "ffmpeg decode failed for '{}': {}",
                input.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        Ok(store::list_frames(frames_dir)?.len() as u64)
    }

    fn encode(&self, frames_dir: &Path, output: &Path) -> TintResult<()> {
        ensure_parent_dir(output)?;
        if !self.overwrite && output.exists() {
            return Err(TintError::validation(format!(
                "output file '{}' already exists",
                output.display()
            )));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.args(["-v", "error"]);
        cmd.arg(if self.overwrite { "-y" } else { "-n" });
        cmd.args(["-framerate", &self.fps.to_string()])
            .arg("-i")
            .arg(store::frame_pattern(frames_dir))
            .args(["-c:v", "libvpx-vp9", "-pix_fmt", "yuva420p"])
            .arg(output);

        let out = cmd
            .output()
            .map_err(|e| TintError::encode(format!("failed to run ffmpeg for encode: {e}")))?;

        if !out.status.success() {
            return Err(TintError::encode(format!(
                "ffmpeg encode failed for '{}': {}",
                output.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        Ok(())
    }
}

/// Probe source clip metadata through `ffprobe`.
pub fn probe_source(input: &Path) -> TintResult<SourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        pix_fmt: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
    }

    let out = Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_streams"])
        .arg(input)
        .output()
        .map_err(|e| TintError::decode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(TintError::decode(format!(
            "ffprobe failed for '{}': {}",
            input.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| TintError::decode(format!("ffprobe json parse failed: {e}")))?;
    let video = parsed
        .streams
        .into_iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| TintError::decode("no video stream found"))?;

    Ok(SourceInfo {
        width: video
            .width
            .ok_or_else(|| TintError::decode("missing video width from ffprobe"))?,
        height: video
            .height
            .ok_or_else(|| TintError::decode("missing video height from ffprobe"))?,
        pix_fmt: video.pix_fmt,
    })
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> TintResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when both `ffmpeg` and `ffprobe` can be invoked from `PATH`.
///
/// Decoding probes the source with `ffprobe` before running `ffmpeg`, so a
/// host missing either tool must fail the preflight.
pub fn is_ffmpeg_on_path() -> bool {
    is_tool_on_path("ffmpeg") && is_tool_on_path("ffprobe")
}

fn is_tool_on_path(tool: &str) -> bool {
    Command::new(tool)
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

// No unit tests here: these functions shell out to `ffprobe`/`ffmpeg` and are
// best validated end-to-end where the tools are known to be available.
