//! Closed-form spiral synthesizer.
//!
//! Every pixel is a pure function of its position, the sample time and the render parameters:
//!
//! 1. map `(x, y)` to centered coordinates (`[-1, 1)` horizontally, aspect-corrected vertically)
//! 2. take the polar `angle` and `radius`, and raise the radius to a time-varying exponent
//! 3. sharpen `sin(angle + dist*40*zoom - time*5*spin)` into thin bands with a power of 50
//! 4. blend spiral and background colors by the clamped mask
//!
//! Non-square canvases produce an elliptical spiral.

use crate::foundation::error::{SpiralError, SpiralResult};
use crate::params::model::RenderParameters;
use crate::render::backend::{FrameRGB, FrameRenderer};
use crate::render::surface::{Argb32Surface, Surface};

/// Exponent that turns the shape sine into narrow bands.
pub const MASK_SHARPNESS: f64 = 50.0;
/// Radial winding factor, scaled by `zoom`.
pub const WINDING: f64 = 40.0;
/// Angular rotation per time unit, scaled by `spin_speed`.
pub const SPIN_RATE: f64 = 5.0;

/// Radial exponent at `time`: a slow beat-modulated pulsation around `0.4`.
pub fn throb_exponent(time: f64, throb_speed: f64) -> f64 {
    0.4 + ((time + (time * 0.05).cos() * 0.1) * throb_speed).sin() * 0.2
}

/// Blend factor in `[0, 1]` from the shape sine.
pub fn mask_from_shape(shape: f64) -> f64 {
    (shape + 1.0).powf(MASK_SHARPNESS).clamp(0.0, 1.0)
}

/// Linear blend: `spiral` where `mask == 0`, `background` where `mask == 1`.
pub fn blend(spiral: [f64; 3], background: [f64; 3], mask: f64) -> [f64; 3] {
    [0, 1, 2].map(|i| spiral[i] * (1.0 - mask) + background[i] * mask)
}

/// Intermediate values for one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSample {
    /// `atan2(py, px)`, in `(-pi, pi]`.
    pub angle: f64,
    /// `radius ^ exponent`.
    pub dist: f64,
    /// Unsharpened shape value, `sin(...)`.
    pub shape: f64,
    /// Clamped blend factor.
    pub mask: f64,
}

/// Per-time constants of the field; sampling it is pure per pixel.
#[derive(Clone, Copy, Debug)]
pub struct SpiralField {
    width: f64,
    height: f64,
    exponent: f64,
    phase: f64,
    winding: f64,
}

impl SpiralField {
    /// Precompute everything that only depends on `time`.
    pub fn at(params: &RenderParameters, time: f64) -> Self {
        Self {
            width: f64::from(params.canvas.width),
            height: f64::from(params.canvas.height),
            exponent: throb_exponent(time, params.throb_speed),
            phase: time * SPIN_RATE * params.spin_speed,
            winding: WINDING * params.zoom,
        }
    }

    /// Radial exponent in effect for this time.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Evaluate the field at pixel `(x, y)`.
    pub fn sample(&self, x: u32, y: u32) -> PixelSample {
        let px = (f64::from(x) / self.width - 0.5) * 2.0;
        let py = (f64::from(y) / self.height - 0.5) * 2.0 * (self.height / self.width);

        // atan2(0, 0) == 0, so the center pixel is well defined.
        let angle = py.atan2(px);
        let radius = (px * px + py * py).sqrt();
        let dist = radius.powf(self.exponent);

        let shape = (angle + dist * self.winding - self.phase).sin();
        PixelSample {
            angle,
            dist,
            shape,
            mask: mask_from_shape(shape),
        }
    }
}

/// Renders spiral frames for a fixed, validated parameter set.
#[derive(Clone, Debug)]
pub struct SpiralSynth {
    params: RenderParameters,
}

impl SpiralSynth {
    /// Validate `params` and build a synthesizer.
    pub fn new(params: RenderParameters) -> SpiralResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters this synthesizer renders with.
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Render one frame. Same `time` always yields the same bytes.
    pub fn render(&self, time: f64) -> SpiralResult<FrameRGB> {
        if !time.is_finite() {
            return Err(SpiralError::render(format!(
                "sample time must be finite, got {time}"
            )));
        }

        let canvas = self.params.canvas;
        let background = self.params.background_unit();
        let spiral = self.params.spiral_unit();
        let field = SpiralField::at(&self.params, time);

        let mut surface = Argb32Surface::new(canvas.width, canvas.height)?;
        surface.set_source_rgb(background[0], background[1], background[2]);
        surface.paint();

        for x in 0..canvas.width {
            for y in 0..canvas.height {
                let s = field.sample(x, y);
                if !s.mask.is_finite() {
                    return Err(SpiralError::render(format!(
                        "non-finite mask at ({x}, {y}) for t={time}"
                    )));
                }
                let [r, g, b] = blend(spiral, background, s.mask);
                surface.set_source_rgb(r, g, b);
                surface.fill_rect(x, y, 1, 1);
            }
        }

        surface.to_frame()
    }
}

impl FrameRenderer for SpiralSynth {
    fn dimensions(&self) -> (u32, u32) {
        (self.params.canvas.width, self.params.canvas.height)
    }

    fn render_at(&self, time: f64) -> SpiralResult<FrameRGB> {
        self.render(time)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;
