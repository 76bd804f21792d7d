//! Manual measurement path: shape and a simplified score from four
//! user-entered lengths, without landmarks.

use crate::golden::{component_score, round_score, PHI};
use crate::shape::FaceDimensions;
use crate::types::{AnalysisData, FaceShape, GoldenRatioResult, Ratios};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be a positive length, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Four validated, positive, finite lengths in a shared unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualMeasurements {
    dimensions: FaceDimensions,
}

impl ManualMeasurements {
    pub fn new(
        face_length: f64,
        cheek_width: f64,
        jaw_width: f64,
        forehead_width: f64,
    ) -> Result<Self, MeasurementError> {
        Ok(Self {
            dimensions: FaceDimensions::new(
                check("face length", face_length)?,
                check("cheek width", cheek_width)?,
                check("jaw width", jaw_width)?,
                check("forehead width", forehead_width)?,
            ),
        })
    }

    /// Parse raw form input. Any empty or non-numeric field refuses the
    /// whole measurement set.
    pub fn parse(
        face_length: &str,
        cheek_width: &str,
        jaw_width: &str,
        forehead_width: &str,
    ) -> Result<Self, MeasurementError> {
        Self::new(
            parse_field("face length", face_length)?,
            parse_field("cheek width", cheek_width)?,
            parse_field("jaw width", jaw_width)?,
            parse_field("forehead width", forehead_width)?,
        )
    }

    pub fn dimensions(&self) -> FaceDimensions {
        self.dimensions
    }

    pub fn face_shape(&self) -> FaceShape {
        self.dimensions.classify()
    }

    pub fn score(&self) -> u8 {
        compute_manual_score(self.dimensions.face_length, self.dimensions.cheek_width)
    }

    /// Shape plus simplified score. Ratios are all zero: they are not
    /// measured on this path.
    pub fn analyze(&self) -> AnalysisData {
        AnalysisData {
            shape: self.face_shape(),
            ratio: GoldenRatioResult {
                score: self.score(),
                ratios: Ratios::default(),
            },
        }
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, MeasurementError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MeasurementError::Missing { field });
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| MeasurementError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

fn check(field: &'static str, value: f64) -> Result<f64, MeasurementError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeasurementError::OutOfRange { field, value })
    }
}

/// Score face length/cheek width against φ.
pub fn compute_manual_score(face_length: f64, cheek_width: f64) -> u8 {
    round_score(component_score(face_length / cheek_width, PHI))
}
