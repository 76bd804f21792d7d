//! Reference points on the 468-point face mesh and a validated view over it.

use crate::geometry::distance;
use crate::types::{AnalysisData, FaceShape, GoldenRatioResult, Landmark};
use crate::{golden, shape::FaceDimensions};
use thiserror::Error;

/// Number of landmarks in one face mesh.
pub const MESH_LANDMARKS: usize = 468;

/// Face mesh indices used as measurement anchors.
pub mod index {
    pub const TOP_HEAD: usize = 10;
    pub const CHIN: usize = 152;
    pub const LEFT_CHEEK: usize = 234;
    pub const RIGHT_CHEEK: usize = 454;
    // Approximate jaw corners.
    pub const LEFT_JAW: usize = 58;
    pub const RIGHT_JAW: usize = 288;
    pub const LEFT_FOREHEAD: usize = 103;
    pub const RIGHT_FOREHEAD: usize = 332;
    pub const LEFT_EYE_OUTER: usize = 33;
    pub const RIGHT_EYE_OUTER: usize = 263;
    // Alar base.
    pub const NOSE_LEFT: usize = 129;
    pub const NOSE_RIGHT: usize = 358;
    pub const MOUTH_LEFT: usize = 61;
    pub const MOUTH_RIGHT: usize = 291;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("insufficient landmarks: need {MESH_LANDMARKS}, got {found}")]
    InsufficientLandmarks { found: usize },
}

/// A landmark slice known to hold at least [`MESH_LANDMARKS`] points.
///
/// Longer slices (e.g. iris-refined meshes with 478 points) are accepted;
/// only the first 468 indices are ever read.
#[derive(Debug, Clone, Copy)]
pub struct FaceMesh<'a> {
    points: &'a [Landmark],
}

impl<'a> FaceMesh<'a> {
    pub fn new(points: &'a [Landmark]) -> Result<Self, AnalysisError> {
        if points.len() < MESH_LANDMARKS {
            return Err(AnalysisError::InsufficientLandmarks {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &'a [Landmark] {
        self.points
    }

    /// Planar distance between two mesh indices. Indices come from [`index`].
    pub(crate) fn span(&self, a: usize, b: usize) -> f64 {
        distance(&self.points[a], &self.points[b])
    }

    /// Length and the three widths the shape classifier works on.
    pub fn dimensions(&self) -> FaceDimensions {
        FaceDimensions {
            face_length: self.span(index::TOP_HEAD, index::CHIN),
            cheek_width: self.span(index::LEFT_CHEEK, index::RIGHT_CHEEK),
            jaw_width: self.span(index::LEFT_JAW, index::RIGHT_JAW),
            forehead_width: self.span(index::LEFT_FOREHEAD, index::RIGHT_FOREHEAD),
        }
    }

    pub fn face_shape(&self) -> FaceShape {
        self.dimensions().classify()
    }

    pub fn golden_ratio(&self) -> GoldenRatioResult {
        golden::score_mesh(self)
    }

    pub fn analyze(&self) -> AnalysisData {
        AnalysisData {
            shape: self.face_shape(),
            ratio: self.golden_ratio(),
        }
    }
}

impl<'a> TryFrom<&'a [Landmark]> for FaceMesh<'a> {
    type Error = AnalysisError;

    fn try_from(points: &'a [Landmark]) -> Result<Self, Self::Error> {
        FaceMesh::new(points)
    }
}
