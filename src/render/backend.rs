use crate::foundation::error::{SpiralError, SpiralResult};

/// A rendered frame as tightly packed RGB8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes in `R, G, B` order.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Wrap an RGB8 buffer, checking its length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> SpiralResult<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(SpiralError::render(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height} RGB8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGB triple at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        self.data.get(i..i + 3).map(|p| [p[0], p[1], p[2]])
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixel(x, y).unwrap_or([0, 0, 0])
    }

    /// Copy into an `image` RGB buffer.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.rgb_at(x, y)))
    }

    /// Copy into an opaque `image` RGBA buffer (GIF frames are RGBA).
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b] = self.rgb_at(x, y);
            image::Rgba([r, g, b, 255])
        })
    }
}

/// Anything that can produce one frame per sample time.
///
/// Implementations must be pure with respect to `time`: the pipeline calls `render_at` from many
/// worker threads at once and in arbitrary order.
pub trait FrameRenderer: Sync {
    /// Output size as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Render the frame for `time`.
    fn render_at(&self, time: f64) -> SpiralResult<FrameRGB>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
