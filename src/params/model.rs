use crate::foundation::core::Canvas;
use crate::foundation::error::{SpiralError, SpiralResult};

/// Value convention for the color channels of a [`RenderParameters`].
///
/// Both colors of one parameter set share the same range, so the two conventions can never be
/// mixed within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRange {
    /// Channels in `[0, 255]`.
    Byte,
    /// Channels in `[0, 1]`.
    Unit,
}

impl ColorRange {
    /// Largest legal channel value; also the divisor that maps a channel into `[0, 1]`.
    pub fn scale(self) -> f64 {
        match self {
            Self::Byte => 255.0,
            Self::Unit => 1.0,
        }
    }

    /// Map a channel value into `[0, 1]`.
    pub fn normalize(self, v: f64) -> f64 {
        v / self.scale()
    }
}

/// Immutable configuration for one render run.
///
/// Built once (preset, then parameter file overrides) and validated before any synthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParameters {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Convention used by `background` and `spiral`.
    pub color_range: ColorRange,
    /// Color painted where the spiral mask is 1.
    pub background: [f64; 3],
    /// Color painted where the spiral mask is 0.
    pub spiral: [f64; 3],
    /// Rotation rate of the arms.
    pub spin_speed: f64,
    /// Rate of the radial exponent pulsation.
    pub throb_speed: f64,
    /// Carried for configuration compatibility; the color formula does not read it.
    pub throb_strength: f64,
    /// Winding density of the arms.
    pub zoom: f64,
}

impl RenderParameters {
    /// 0..255 preset: 512x512 violet spiral on black.
    pub fn byte_preset() -> Self {
        Self {
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            color_range: ColorRange::Byte,
            background: [0.0, 0.0, 0.0],
            spiral: [191.0, 0.0, 251.0],
            spin_speed: 1.0,
            throb_speed: 1.0,
            throb_strength: 1.0,
            zoom: 1.0,
        }
    }

    /// 0..1 preset: 512x512 green spiral on black.
    pub fn unit_preset() -> Self {
        Self {
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            color_range: ColorRange::Unit,
            background: [0.0, 0.0, 0.0],
            spiral: [0.0, 1.0, 0.0],
            spin_speed: 1.0,
            throb_speed: 1.0,
            throb_strength: 1.0,
            zoom: 1.0,
        }
    }

    /// Preset for a given color convention.
    pub fn preset(range: ColorRange) -> Self {
        match range {
            ColorRange::Byte => Self::byte_preset(),
            ColorRange::Unit => Self::unit_preset(),
        }
    }

    /// Check dimensions, color channels and scalar tunings.
    pub fn validate(&self) -> SpiralResult<()> {
        self.canvas.validate()?;

        let max = self.color_range.scale();
        for (name, color) in [("background", self.background), ("spiral", self.spiral)] {
            for c in color {
                if !c.is_finite() || !(0.0..=max).contains(&c) {
                    return Err(SpiralError::configuration(format!(
                        "{name} color channel {c} is outside [0, {max}] for {:?} range",
                        self.color_range
                    )));
                }
            }
        }

        for (name, v) in [
            ("spin_speed", self.spin_speed),
            ("throb_speed", self.throb_speed),
            ("throb_strength", self.throb_strength),
            ("zoom", self.zoom),
        ] {
            if !v.is_finite() {
                return Err(SpiralError::configuration(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Background color mapped into `[0, 1]`.
    pub fn background_unit(&self) -> [f64; 3] {
        self.background.map(|c| self.color_range.normalize(c))
    }

    /// Spiral color mapped into `[0, 1]`.
    pub fn spiral_unit(&self) -> [f64; 3] {
        self.spiral.map(|c| self.color_range.normalize(c))
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::byte_preset()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
