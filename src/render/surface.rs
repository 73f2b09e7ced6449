use crate::foundation::error::{SpiralError, SpiralResult};
use crate::render::backend::FrameRGB;

/// Byte order of one 4-byte pixel in a surface's native buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    /// `B, G, R, A`: ARGB32 stored little-endian.
    Bgra8,
    /// `R, G, B, A`.
    Rgba8,
}

impl ChannelLayout {
    /// Byte offsets of red, green and blue within one pixel.
    pub fn rgb_offsets(self) -> [usize; 3] {
        match self {
            Self::Bgra8 => [2, 1, 0],
            Self::Rgba8 => [0, 1, 2],
        }
    }
}

/// Minimal 2D drawing surface: solid paints and axis-aligned rectangle fills.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Set the current source color; channels are clamped to `[0, 1]`.
    fn set_source_rgb(&mut self, r: f64, g: f64, b: f64);
    /// Fill the whole surface with the current source.
    fn paint(&mut self);
    /// Fill `[x, x+w) x [y, y+h)` with the current source, clipped to the surface.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32);
    /// Layout of [`Surface::data`].
    fn layout(&self) -> ChannelLayout;
    /// Raw native pixel buffer, 4 bytes per pixel, row-major, no padding.
    fn data(&self) -> &[u8];

    /// Read the surface back as an RGB frame.
    fn to_frame(&self) -> SpiralResult<FrameRGB> {
        frame_from_native(self.width(), self.height(), self.data(), self.layout())
    }
}

/// Reorder a native 4-channel buffer into RGB8, dropping alpha.
pub fn frame_from_native(
    width: u32,
    height: u32,
    data: &[u8],
    layout: ChannelLayout,
) -> SpiralResult<FrameRGB> {
    let px = (width as usize) * (height as usize);
    if data.len() != px * 4 {
        return Err(SpiralError::render(format!(
            "native buffer is {} bytes, expected {} for {width}x{height}",
            data.len(),
            px * 4
        )));
    }

    let [ro, go, bo] = layout.rgb_offsets();
    let mut rgb = Vec::with_capacity(px * 3);
    for p in data.chunks_exact(4) {
        rgb.extend_from_slice(&[p[ro], p[go], p[bo]]);
    }
    FrameRGB::new(width, height, rgb)
}

/// Opaque ARGB32 raster surface, bytes stored `B, G, R, A`.
#[derive(Clone, Debug)]
pub struct Argb32Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    source: [u8; 4],
}

impl Argb32Surface {
    /// Create a transparent-black surface.
    pub fn new(width: u32, height: u32) -> SpiralResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpiralError::configuration(format!(
                "surface width/height must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
            source: [0, 0, 0, 255],
        })
    }

    /// Wrap an existing native buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> SpiralResult<Self> {
        let mut s = Self::new(width, height)?;
        if data.len() != s.data.len() {
            return Err(SpiralError::configuration(format!(
                "raw ARGB32 buffer is {} bytes, expected {}",
                data.len(),
                s.data.len()
            )));
        }
        s.data = data;
        Ok(s)
    }
}

fn unit_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Surface for Argb32Surface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_source_rgb(&mut self, r: f64, g: f64, b: f64) {
        self.source = [unit_to_u8(b), unit_to_u8(g), unit_to_u8(r), 255];
    }

    fn paint(&mut self) {
        let src = self.source;
        for p in self.data.chunks_exact_mut(4) {
            p.copy_from_slice(&src);
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        if x >= x1 || y >= y1 {
            return;
        }
        let src = self.source;
        let row_bytes = (self.width as usize) * 4;
        for row in y..y1 {
            let start = (row as usize) * row_bytes + (x as usize) * 4;
            let end = (row as usize) * row_bytes + (x1 as usize) * 4;
            for p in self.data[start..end].chunks_exact_mut(4) {
                p.copy_from_slice(&src);
            }
        }
    }

    fn layout(&self) -> ChannelLayout {
        ChannelLayout::Bgra8
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
