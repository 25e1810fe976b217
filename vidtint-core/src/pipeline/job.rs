use std::path::PathBuf;

use anyhow::Context as _;
use rayon::prelude::*;

use crate::codec::ffmpeg::Codec;
use crate::foundation::error::{TintError, TintResult};
use crate::frame::pixels::FramePixels;
use crate::frame::store;
use crate::transform::{FrameTransform, TransformOutcome};

/// One frame-transform job: a source clip, a destination path, and the
/// transforms to run over every frame in between.
#[derive(Clone, Debug)]
pub struct TransformJob {
    /// Source video file.
    pub input: PathBuf,
    /// Destination video file.
    pub output: PathBuf,
    /// Transforms in application order. The caller lists the alpha transform
    /// before the color filter; an empty list is a passthrough re-encode.
    pub transforms: Vec<FrameTransform>,
    /// Run each transform pass across frames in parallel.
    ///
    /// Optional: per-frame transforms have no cross-frame dependency, so
    /// this only changes scheduling, never output bytes.
    pub parallel: bool,
}

/// Aggregated per-job counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JobStats {
    /// Frames produced by the decode step.
    pub frames: u64,
    /// Frame visits skipped by transform passes (frame lacked an alpha
    /// channel). Counted per pass, so one frame can contribute several.
    pub frames_skipped: u64,
}

/// Run one job end to end: decode, sequential transform passes, encode.
///
/// The decoded frames live in a freshly created temporary directory owned
/// exclusively by this call; it is removed on every exit path, including
/// transform and encode failures. Transform parameters are validated before
/// the directory is even created, and each configured transform finishes its
/// full pass over the frame sequence before the next one starts.
///
/// Errors if the decode step produces zero frames; the encode step never
/// runs in that case.
#[tracing::instrument(skip(job, codec), fields(input = %job.input.display()))]
pub fn run_job(job: &TransformJob, codec: &dyn Codec) -> TintResult<JobStats> {
    for transform in &job.transforms {
        transform.validate()?;
    }

    let workdir = tempfile::tempdir().context("failed to create working directory")?;

    let frame_count = codec.decode(&job.input, workdir.path())?;
    if frame_count == 0 {
        return Err(TintError::decode(format!(
            "decode produced no frames for '{}'",
            job.input.display()
        )));
    }
    tracing::info!(frames = frame_count, "decoded clip");

    let frames = store::list_frames(workdir.path())?;
    let mut stats = JobStats {
        frames: frame_count,
        frames_skipped: 0,
    };

    for transform in &job.transforms {
        tracing::info!(%transform, "applying transform");
        stats.frames_skipped += apply_pass(transform, &frames, job.parallel)?;
    }

    codec.encode(workdir.path(), &job.output)?;
    tracing::info!(output = %job.output.display(), "encoded output clip");

    workdir
        .close()
        .context("failed to remove working directory")?;
    Ok(stats)
}

/// Apply one transform over the full frame sequence, in place.
///
/// Returns the number of skipped frames. Frame read/write failures are
/// fatal and abort the pass.
fn apply_pass(transform: &FrameTransform, frames: &[PathBuf], parallel: bool) -> TintResult<u64> {
    let process_one = |path: &PathBuf| -> TintResult<u64> {
        let mut frame = FramePixels::load(path)?;
        match transform.apply(&mut frame) {
            TransformOutcome::Applied => {
                frame.save(path)?;
                Ok(0)
            }
            TransformOutcome::SkippedNoAlpha => {
                tracing::warn!(frame = %path.display(), "frame has no alpha channel, skipping");
                Ok(1)
            }
        }
    };

    let skips: Vec<u64> = if parallel {
        frames.par_iter().map(process_one).collect::<TintResult<_>>()?
    } else {
        frames.iter().map(process_one).collect::<TintResult<_>>()?
    };
    Ok(skips.into_iter().sum())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/job.rs"]
mod tests;
