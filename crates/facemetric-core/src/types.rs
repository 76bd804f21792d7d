use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A normalized facial landmark as reported by the detector.
///
/// `x` and `y` are fractions of the image width and height. `z` is relative
/// depth; it is carried through but ignored by all ratio math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Categorical face outline.
///
/// `Unknown` only ever comes from malformed or insufficient input, never
/// from classifying valid measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Diamond,
    Heart,
    Oblong,
    Unknown,
}

impl FaceShape {
    pub const ALL: [FaceShape; 7] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Diamond,
        FaceShape::Heart,
        FaceShape::Oblong,
        FaceShape::Unknown,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "OVAL",
            FaceShape::Round => "ROUND",
            FaceShape::Square => "SQUARE",
            FaceShape::Diamond => "DIAMOND",
            FaceShape::Heart => "HEART",
            FaceShape::Oblong => "OBLONG",
            FaceShape::Unknown => "UNKNOWN",
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, FaceShape::Unknown)
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown face shape: {0:?}")]
pub struct ParseFaceShapeError(pub String);

impl FromStr for FaceShape {
    type Err = ParseFaceShapeError;

    /// Case-insensitive match on the shape name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FaceShape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFaceShapeError(s.to_string()))
    }
}

/// The three aesthetic ratios behind a golden-ratio score.
///
/// A value of `0` means "not available" (insufficient input or a manual
/// measurement that never collected it), not a perfect or minimal ratio.
///
/// JSON has no encoding for non-finite numbers, so serde_json writes a
/// degenerate ratio as `null`; reading `null` back yields `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratios {
    /// Face length / face width.
    #[serde(deserialize_with = "null_as_zero")]
    pub face_ratio: f64,
    /// Outer eye distance / nose width.
    #[serde(deserialize_with = "null_as_zero")]
    pub nose_eye_ratio: f64,
    /// Mouth width / nose width.
    #[serde(deserialize_with = "null_as_zero")]
    pub lips_nose_ratio: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Golden-ratio score (0–100) with the ratios it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GoldenRatioResult {
    pub score: u8,
    pub ratios: Ratios,
}

/// Output of one analysis: shape plus golden-ratio result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub shape: FaceShape,
    pub ratio: GoldenRatioResult,
}

/// Coarse rating used when presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 90 {
            ScoreBand::Excellent
        } else if score >= 70 {
            ScoreBand::Good
        } else {
            ScoreBand::Fair
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
