//! Sample schedules: the ordered time values that drive one frame each.

use crate::foundation::core::Fps;
use crate::foundation::error::{SpiralError, SpiralResult};

/// Frame count of [`SampleSchedule::Legacy`].
pub const LEGACY_FRAME_COUNT: usize = 60;
/// Time step between [`SampleSchedule::Legacy`] samples.
pub const LEGACY_TIME_STEP: f64 = 0.1;
/// Encode rate used for [`SampleSchedule::Legacy`].
pub const LEGACY_ENCODE_FPS: u32 = 30;
/// Largest schedule accepted by [`SampleSchedule::Timed`] (about 92 hours at 30 fps).
pub const MAX_FRAME_COUNT: usize = 10_000_000;

/// Time-axis policy for one run. A run uses exactly one policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleSchedule {
    /// `t_i = i / fps` for `i in 0..floor(duration_secs * fps)`.
    Timed {
        /// Animation length in seconds.
        duration_secs: f64,
        /// Samples (and encoded frames) per second.
        fps: u32,
    },
    /// Fixed 60 samples at `t_i = i * 0.1`, independent of the encode rate.
    Legacy,
}

impl SampleSchedule {
    /// Timed schedule from `(duration, fps)`.
    pub fn timed(duration_secs: f64, fps: u32) -> Self {
        Self::Timed { duration_secs, fps }
    }

    /// Number of samples, after validation.
    pub fn frame_count(&self) -> SpiralResult<usize> {
        let n = match *self {
            Self::Timed { duration_secs, fps } => {
                if fps == 0 {
                    return Err(SpiralError::configuration("fps must be > 0"));
                }
                if !duration_secs.is_finite() || duration_secs < 0.0 {
                    return Err(SpiralError::configuration(format!(
                        "duration must be a finite non-negative number of seconds, got {duration_secs}"
                    )));
                }
                let frames = (duration_secs * f64::from(fps)).floor();
                if !frames.is_finite() || frames > MAX_FRAME_COUNT as f64 {
                    return Err(SpiralError::configuration(format!(
                        "duration {duration_secs}s at {fps} fps exceeds {MAX_FRAME_COUNT} frames"
                    )));
                }
                frames as usize
            }
            Self::Legacy => LEGACY_FRAME_COUNT,
        };
        if n == 0 {
            return Err(SpiralError::configuration(
                "sample schedule is empty (duration * fps < 1)",
            ));
        }
        Ok(n)
    }

    /// Materialize every sample time, in order.
    pub fn times(&self) -> SpiralResult<Vec<f64>> {
        let n = self.frame_count()?;
        Ok(match *self {
            Self::Timed { fps, .. } => {
                let fps = f64::from(fps);
                (0..n).map(|i| i as f64 / fps).collect()
            }
            Self::Legacy => (0..n).map(|i| i as f64 * LEGACY_TIME_STEP).collect(),
        })
    }

    /// Frame rate handed to the encoder.
    pub fn encode_fps(&self) -> SpiralResult<Fps> {
        match *self {
            Self::Timed { fps, .. } => Fps::integer(fps),
            Self::Legacy => Fps::integer(LEGACY_ENCODE_FPS),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/schedule.rs"]
mod tests;
