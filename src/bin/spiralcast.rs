use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "spiralcast",
    version,
    about = "Render an animated spiral to MP4 or GIF"
)]
struct Cli {
    /// Output file path.
    output: PathBuf,

    /// Output format: `mp4` (requires `ffmpeg` on PATH) or `gif`.
    format: String,

    /// Animation length in seconds. Omit both DURATION and FPS for the legacy 60-frame schedule.
    #[arg(requires = "fps")]
    duration: Option<f64>,

    /// Frames per second.
    fps: Option<u32>,

    /// JSON parameter file merged over the preset.
    #[arg(long, default_value = "spiral_params.json")]
    params: PathBuf,

    /// Color convention and defaults the parameter file is merged over.
    #[arg(long, value_enum, default_value_t = PresetChoice::Byte)]
    preset: PresetChoice,

    /// Worker threads (defaults to available hardware parallelism).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per render round when streaming MP4.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    /// Channels in 0..=255, violet spiral.
    Byte,
    /// Channels in 0..=1, green spiral.
    Unit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = match cli.preset {
        PresetChoice::Byte => spiralcast::RenderParameters::byte_preset(),
        PresetChoice::Unit => spiralcast::RenderParameters::unit_preset(),
    };
    let params = spiralcast::load_parameters(&cli.params, base)
        .with_context(|| format!("load parameters '{}'", cli.params.display()))?;

    let schedule = match (cli.duration, cli.fps) {
        (Some(duration), Some(fps)) => spiralcast::SampleSchedule::timed(duration, fps),
        _ => spiralcast::SampleSchedule::Legacy,
    };
    let threading = spiralcast::RenderThreading {
        threads: cli.threads,
        chunk_size: cli.chunk_size,
    };

    let record =
        spiralcast::animate_to_file(&params, &cli.output, &cli.format, &schedule, &threading)
            .with_context(|| format!("render '{}'", cli.output.display()))?;

    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}
