//! Style parameters that drive the transform pipeline
//!
//! Every transform has its own amount and is off when that amount is zero.
//! Nothing here is coupled: raising the twist never changes how corners are
//! rounded.

use crate::error::SumiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How open stroke ends are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Round,
    Butt,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
            LineCap::Square => "square",
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineCap {
    type Err = SumiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "round" => Ok(LineCap::Round),
            "butt" => Ok(LineCap::Butt),
            "square" => Ok(LineCap::Square),
            other => Err(SumiError::Config(format!(
                "Unknown line cap '{other}' (expected round, butt or square)"
            ))),
        }
    }
}

/// The full set of knobs for one render pass
///
/// Loads from JSON presets with camelCase keys; missing keys keep their
/// defaults.
///
/// ```
/// use sumi_core::StyleParameters;
///
/// let params: StyleParameters =
///     serde_json::from_str(r#"{ "cornerRadius": 3, "twistAmount": 12 }"#).unwrap();
/// assert_eq!(params.corner_radius, 3.0);
/// assert_eq!(params.stroke_width, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleParameters {
    /// Subdivision passes, each doubling the segment count
    pub add_points: u32,
    /// Samples per curve when linearizing, 0 disables
    pub linearize_segments: u32,
    /// Douglas-Peucker tolerance, 0 disables
    pub simplify_tolerance: f64,
    /// Fillet radius for line-line corners, 0 disables
    pub corner_radius: f64,
    /// Per-point jitter, 0 disables
    pub twist_amount: f64,
    /// Resampled jaggedness, 0 disables
    pub roughen_amount: f64,
    /// Calligraphic pen anisotropy; positive favors vertical strokes
    pub contrast: f64,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            add_points: 0,
            linearize_segments: 0,
            simplify_tolerance: 0.0,
            corner_radius: 0.0,
            twist_amount: 0.0,
            roughen_amount: 0.0,
            contrast: 0.0,
            stroke_width: 2.0,
            line_cap: LineCap::Round,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl StyleParameters {
    /// Pull every field into the range the interactive controls allow
    ///
    /// NaN fields fall back to their defaults.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            add_points: self.add_points.min(6),
            linearize_segments: self.linearize_segments.min(64),
            simplify_tolerance: clamp(self.simplify_tolerance, 0.0, 30.0, 0.0),
            corner_radius: clamp(self.corner_radius, 0.0, 40.0, 0.0),
            twist_amount: clamp(self.twist_amount, 0.0, 80.0, 0.0),
            roughen_amount: clamp(self.roughen_amount, 0.0, 50.0, 0.0),
            contrast: clamp(self.contrast, -5.0, 5.0, defaults.contrast),
            stroke_width: clamp(self.stroke_width, 0.1, 10.0, defaults.stroke_width),
            line_cap: self.line_cap,
            scale_x: clamp(self.scale_x, 0.1, 4.0, defaults.scale_x),
            scale_y: clamp(self.scale_y, 0.1, 4.0, defaults.scale_y),
        }
    }

    /// Are all path transforms switched off?
    pub fn is_identity(&self) -> bool {
        self.add_points == 0
            && self.linearize_segments == 0
            && !is_enabled(self.simplify_tolerance)
            && !is_enabled(self.corner_radius)
            && !is_enabled(self.twist_amount)
            && !is_enabled(self.roughen_amount)
    }
}

/// A float amount switches its stage on only when strictly positive
///
/// Negative and NaN amounts count as disabled.
pub fn is_enabled(amount: f64) -> bool {
    amount > 0.0
}

fn clamp(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
