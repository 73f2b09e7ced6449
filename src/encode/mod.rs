//! Encoders that turn an ordered frame sequence into an output file.
//!
//! MP4 output streams frames into a [`sink::FrameSink`]; GIF output is a single batch call.

/// `ffmpeg`-based streaming MP4 writer.
pub mod ffmpeg;
/// Batch animated GIF saver.
pub mod gif;
/// Streaming sink trait and built-in sinks.
pub mod sink;

use std::path::Path;

use crate::foundation::error::{SpiralError, SpiralResult};

/// Ensure the parent directory of `path` exists.
///
/// An output location that cannot be created is an encoding failure.
pub fn ensure_parent_dir(path: &Path) -> SpiralResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SpiralError::encoding(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/mod.rs"]
mod tests;
