use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use rayon::prelude::*;

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::gif::save_gif;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SpiralError, SpiralResult};
use crate::params::model::RenderParameters;
use crate::render::backend::{FrameRGB, FrameRenderer};
use crate::render::synth::SpiralSynth;
use crate::schedule::SampleSchedule;

/// Output container, selected by the `mp4` / `gif` format flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// H.264 MP4, streamed through `ffmpeg`.
    Mp4,
    /// Animated GIF, saved in one batch call.
    Gif,
}

impl FromStr for OutputFormat {
    type Err = SpiralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp4" => Ok(Self::Mp4),
            "gif" => Ok(Self::Gif),
            other => Err(SpiralError::configuration(format!(
                "unsupported format '{other}', choose 'mp4' or 'gif'"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
/// Worker pool and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Worker thread count; `None` uses the available hardware parallelism.
    pub threads: Option<usize>,
    /// Frames rendered per scatter/gather round when streaming into a sink.
    pub chunk_size: usize,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            threads: None,
            chunk_size: 64,
        }
    }
}

/// Single structured record emitted when a run completes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusRecord {
    /// Always `"complete"`.
    pub status: String,
    /// Path the animation was written to.
    pub output_file: String,
}

impl StatusRecord {
    /// Success record for `path`.
    pub fn complete(path: &Path) -> Self {
        Self {
            status: "complete".to_owned(),
            output_file: path.display().to_string(),
        }
    }
}

/// Render every sample time on a worker pool and return frames in schedule order.
///
/// Blocks until all frames are back. If any frame fails, the error of the earliest failing sample
/// is returned and no frames are.
#[tracing::instrument(skip(renderer, times), fields(frames = times.len()))]
pub fn render_frames(
    renderer: &dyn FrameRenderer,
    times: &[f64],
    threading: &RenderThreading,
) -> SpiralResult<Vec<FrameRGB>> {
    let pool = build_thread_pool(threading.threads)?;
    render_indexed(renderer, times, &pool)
}

/// Stream `schedule` into `sink`, rendering `chunk_size` frames per pool round.
///
/// Chunks are rendered one pool round at a time; frames reach the sink strictly in schedule order.
#[tracing::instrument(skip(renderer, sink))]
pub fn render_to_sink(
    renderer: &dyn FrameRenderer,
    schedule: &SampleSchedule,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> SpiralResult<u64> {
    let times = schedule.times()?;
    let fps = schedule.encode_fps()?;
    let pool = build_thread_pool(threading.threads)?;
    let (width, height) = renderer.dimensions();

    sink.begin(SinkConfig { width, height, fps })?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut next = 0u64;
    for chunk in times.chunks(chunk_size) {
        let frames = render_indexed(renderer, chunk, &pool)?;
        for frame in &frames {
            sink.push_frame(FrameIndex(next), frame)?;
            next += 1;
        }
        tracing::debug!(encoded = next, total = times.len(), "chunk encoded");
    }

    sink.end()?;
    Ok(next)
}

/// Render `schedule` with `renderer` and write it to `out_path` as `format`.
///
/// The format and schedule are checked before any frame is synthesized.
#[tracing::instrument(skip(renderer, out_path), fields(out = %out_path.display()))]
pub fn render_animation(
    renderer: &dyn FrameRenderer,
    out_path: &Path,
    format: &str,
    schedule: &SampleSchedule,
    threading: &RenderThreading,
) -> SpiralResult<StatusRecord> {
    let format = OutputFormat::from_str(format)?;
    let times = schedule.times()?;
    let fps = schedule.encode_fps()?;

    let started = Instant::now();
    tracing::info!(frames = times.len(), ?format, "rendering animation");

    match format {
        OutputFormat::Mp4 => {
            let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(out_path));
            render_to_sink(renderer, schedule, threading, &mut sink)?;
        }
        OutputFormat::Gif => {
            let frames = render_frames(renderer, &times, threading)?;
            save_gif(out_path, &frames, fps)?;
        }
    }

    tracing::info!(
        frames = times.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "animation complete"
    );
    Ok(StatusRecord::complete(out_path))
}

/// Validate `params`, build the spiral synthesizer and render it to `out_path`.
pub fn animate_to_file(
    params: &RenderParameters,
    out_path: &Path,
    format: &str,
    schedule: &SampleSchedule,
    threading: &RenderThreading,
) -> SpiralResult<StatusRecord> {
    let synth = SpiralSynth::new(params.clone())?;
    render_animation(&synth, out_path, format, schedule, threading)
}

fn render_indexed(
    renderer: &dyn FrameRenderer,
    times: &[f64],
    pool: &rayon::ThreadPool,
) -> SpiralResult<Vec<FrameRGB>> {
    let rendered = pool.install(|| {
        times
            .par_iter()
            .enumerate()
            .map(|(idx, &t)| (idx, renderer.render_at(t)))
            .collect::<Vec<_>>()
    });

    // Completion order is arbitrary; place every frame by its schedule index.
    let mut slots: Vec<Option<SpiralResult<FrameRGB>>> = (0..times.len()).map(|_| None).collect();
    for (idx, res) in rendered {
        let slot = slots.get_mut(idx).ok_or_else(|| {
            SpiralError::render(format!("internal error: frame index {idx} out of range"))
        })?;
        if slot.replace(res).is_some() {
            return Err(SpiralError::render(format!(
                "internal error: frame {idx} rendered twice"
            )));
        }
    }

    let mut out = Vec::with_capacity(times.len());
    for (idx, slot) in slots.into_iter().enumerate() {
        let frame = slot.ok_or_else(|| {
            SpiralError::render(format!("internal error: frame {idx} missing after gather"))
        })??;
        out.push(frame);
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> SpiralResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpiralError::configuration(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SpiralError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
