//! Ingestion of face-mesh detector output.
//!
//! The detector reports zero or more faces per invocation as
//! `{"multiFaceLandmarks": [[{"x":..,"y":..,"z":..}, ...], ...]}`.
//! Only the first face is analyzed.

use crate::golden::compute_golden_ratio;
use crate::shape::classify_from_landmarks;
use crate::types::{AnalysisData, Landmark};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("invalid detection result: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One detector invocation's output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Absent or `null` when no face was found.
    #[serde(rename = "multiFaceLandmarks", default)]
    pub multi_face_landmarks: Option<Vec<Vec<Landmark>>>,
}

impl DetectionResult {
    pub fn from_json(json: &str) -> Result<Self, DetectionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_faces(faces: Vec<Vec<Landmark>>) -> Self {
        Self {
            multi_face_landmarks: Some(faces),
        }
    }

    pub fn face_count(&self) -> usize {
        self.multi_face_landmarks.as_ref().map_or(0, Vec::len)
    }

    /// Landmarks of the first detected face.
    pub fn primary_face(&self) -> Option<&[Landmark]> {
        self.multi_face_landmarks
            .as_ref()
            .and_then(|faces| faces.first())
            .map(Vec::as_slice)
    }
}

/// Analyze the primary face of a detection result.
///
/// Returns `None` when no face was detected. A face with too few landmarks
/// still produces a result, carrying the `UNKNOWN` shape and a zero score.
pub fn analyze_detection(result: &DetectionResult) -> Option<AnalysisData> {
    let faces = result.face_count();
    let Some(landmarks) = result.primary_face() else {
        tracing::debug!("no face in detection result");
        return None;
    };

    if faces > 1 {
        tracing::debug!(faces, "multiple faces detected; analyzing the first");
    }

    let data = AnalysisData {
        shape: classify_from_landmarks(landmarks),
        ratio: compute_golden_ratio(landmarks),
    };

    tracing::debug!(
        landmarks = landmarks.len(),
        shape = %data.shape,
        score = data.ratio.score,
        "face analyzed"
    );

    Some(data)
}
