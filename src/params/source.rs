use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{SpiralError, SpiralResult};
use crate::params::model::RenderParameters;

/// Recognized keys of a persisted parameter file.
///
/// Every key is optional; keys that are present replace the matching field of the base
/// parameters, keys that are absent keep the base value. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParamOverrides {
    /// Canvas width in pixels.
    #[serde(rename = "WIDTH", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height in pixels.
    #[serde(rename = "HEIGHT", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Spiral color in the base range.
    #[serde(rename = "SPIRAL_COLOR", skip_serializing_if = "Option::is_none")]
    pub spiral_color: Option<[f64; 3]>,
    /// Background color in the base range.
    #[serde(rename = "BG_COLOR", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<[f64; 3]>,
    /// Arm rotation rate.
    #[serde(rename = "SPIN_SPEED", skip_serializing_if = "Option::is_none")]
    pub spin_speed: Option<f64>,
    /// Exponent pulsation rate.
    #[serde(rename = "THROB_SPEED", skip_serializing_if = "Option::is_none")]
    pub throb_speed: Option<f64>,
    /// Carried through unchanged.
    #[serde(rename = "THROB_STRENGTH", skip_serializing_if = "Option::is_none")]
    pub throb_strength: Option<f64>,
    /// Arm winding density.
    #[serde(rename = "ZOOM", skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

impl ParamOverrides {
    /// Parse overrides from a JSON object.
    pub fn from_json_str(s: &str) -> SpiralResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SpiralError::configuration(format!("malformed parameter JSON: {e}")))
    }

    /// Load overrides from a JSON file. A missing file is a configuration error.
    pub fn from_path(path: &Path) -> SpiralResult<Self> {
        let f = File::open(path).map_err(|e| {
            SpiralError::configuration(format!(
                "cannot open parameter file '{}': {e}",
                path.display()
            ))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            SpiralError::configuration(format!(
                "malformed parameter file '{}': {e}",
                path.display()
            ))
        })
    }

    /// Merge onto `base`, returning a validated parameter set.
    pub fn apply(&self, base: RenderParameters) -> SpiralResult<RenderParameters> {
        let mut p = base;
        if let Some(v) = self.width {
            p.canvas.width = v;
        }
        if let Some(v) = self.height {
            p.canvas.height = v;
        }
        if let Some(v) = self.spiral_color {
            p.spiral = v;
        }
        if let Some(v) = self.bg_color {
            p.background = v;
        }
        if let Some(v) = self.spin_speed {
            p.spin_speed = v;
        }
        if let Some(v) = self.throb_speed {
            p.throb_speed = v;
        }
        if let Some(v) = self.throb_strength {
            p.throb_strength = v;
        }
        if let Some(v) = self.zoom {
            p.zoom = v;
        }
        p.validate()?;
        Ok(p)
    }
}

/// Load `path` and merge it over `base`.
#[tracing::instrument(skip(base))]
pub fn load_parameters(path: &Path, base: RenderParameters) -> SpiralResult<RenderParameters> {
    let overrides = ParamOverrides::from_path(path)?;
    let params = overrides.apply(base)?;
    tracing::debug!(
        width = params.canvas.width,
        height = params.canvas.height,
        "loaded render parameters"
    );
    Ok(params)
}

#[cfg(test)]
#[path = "../../tests/unit/params/source.rs"]
mod tests;
