//! spiralcast renders a procedural, time-animated spiral and encodes it as MP4 or GIF.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: preset + JSON parameter file -> validated [`RenderParameters`]
//! 2. **Schedule**: `(duration, fps)` or the fixed legacy policy -> ordered sample times
//! 3. **Synthesize**: each sample time -> [`FrameRGB`] on a rayon worker pool
//! 4. **Encode**: ordered frames -> `ffmpeg` (MP4, streamed) or [`save_gif`] (GIF, batch)
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a frame is a pure function of `(time, RenderParameters)`.
//! - **Order-preserving**: frames reach the encoder in schedule order no matter which worker
//!   finishes first.
//! - **Fail whole**: any configuration, render or encoding error aborts the run; frames are never
//!   dropped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod params;
mod render;
mod schedule;

pub use encode::ensure_parent_dir;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path, validate_sink_config};
pub use encode::gif::save_gif;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, Fps, FrameIndex};
pub use foundation::error::{SpiralError, SpiralResult};
pub use params::model::{ColorRange, RenderParameters};
pub use params::source::{ParamOverrides, load_parameters};
pub use render::backend::{FrameRGB, FrameRenderer};
pub use render::pipeline::{
    OutputFormat, RenderThreading, StatusRecord, animate_to_file, render_animation,
    render_frames, render_to_sink,
};
pub use render::surface::{Argb32Surface, ChannelLayout, Surface, frame_from_native};
pub use render::synth::{
    MASK_SHARPNESS, PixelSample, SPIN_RATE, SpiralField, SpiralSynth, WINDING, blend,
    mask_from_shape, throb_exponent,
};
pub use schedule::{
    LEGACY_ENCODE_FPS, LEGACY_FRAME_COUNT, LEGACY_TIME_STEP, MAX_FRAME_COUNT, SampleSchedule,
};
