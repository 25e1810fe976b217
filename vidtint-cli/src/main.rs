use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vidtint", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-encode a clip with optional per-frame transforms (requires
    /// `ffmpeg` on PATH).
    Transform(TransformArgs),
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// The input video file.
    input_file: PathBuf,

    /// The output video file (VP9/WebM with alpha, 24 fps).
    output_file: PathBuf,

    /// Scale the video's alpha channel by a factor in [0, 1].
    #[arg(long)]
    transparency: Option<f64>,

    /// Recolor the video to one hue, preserving lightness.
    #[arg(long = "color-filter", value_name = "HUE,SATURATION")]
    color_filter: Option<String>,

    /// Process frames of each transform pass in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vidtint=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Transform(args) => cmd_transform(args),
    }
}

fn cmd_transform(args: TransformArgs) -> anyhow::Result<()> {
    // Validation order follows the pipeline contract: reject bad transform
    // parameters before any external process runs or any file is created.
    let mut transforms = Vec::new();
    if let Some(factor) = args.transparency {
        let transform = vidtint::FrameTransform::Transparency { factor };
        transform.validate()?;
        transforms.push(transform);
    }
    if let Some(arg) = args.color_filter.as_deref() {
        transforms.push(vidtint::parse_color_filter(arg)?);
    }

    if !vidtint::is_ffmpeg_on_path() {
        bail!("ffmpeg and ffprobe are required for decoding and encoding, but were not found on PATH");
    }

    let job = vidtint::TransformJob {
        input: args.input_file,
        output: args.output_file.clone(),
        transforms,
        parallel: args.parallel,
    };
    let stats = vidtint::run_job(&job, &vidtint::FfmpegCodec::new())?;

    if stats.frames_skipped > 0 {
        eprintln!(
            "warning: {} frame visit(s) skipped (no alpha channel)",
            stats.frames_skipped
        );
    }
    eprintln!("wrote {} ({} frames)", args.output_file.display(), stats.frames);
    Ok(())
}
