use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::ensure_parent_dir;
use crate::foundation::core::Fps;
use crate::foundation::error::{SpiralError, SpiralResult};
use crate::render::backend::FrameRGB;

/// Save `frames` as an infinitely looping animated GIF in one call.
///
/// Each frame is shown for `1 / fps` seconds (GIF delays have 10 ms resolution).
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn save_gif(path: &Path, frames: &[FrameRGB], fps: Fps) -> SpiralResult<()> {
    if frames.is_empty() {
        return Err(SpiralError::encoding("refusing to write a GIF with no frames"));
    }
    let (w, h) = (frames[0].width, frames[0].height);
    if let Some(bad) = frames.iter().find(|f| f.width != w || f.height != h) {
        return Err(SpiralError::encoding(format!(
            "frame size mismatch: got {}x{}, expected {w}x{h}",
            bad.width, bad.height
        )));
    }

    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| {
        SpiralError::encoding(format!("cannot create '{}': {e}", path.display()))
    })?;

    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| SpiralError::encoding(format!("gif repeat setup failed: {e}")))?;

    let delay = Delay::from_numer_denom_ms(1000 * fps.den, fps.num);
    encoder
        .encode_frames(
            frames
                .iter()
                .map(|f| Frame::from_parts(f.to_rgba_image(), 0, 0, delay)),
        )
        .map_err(|e| {
            SpiralError::encoding(format!("failed to write GIF '{}': {e}", path.display()))
        })?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
