//! Rule-based face shape classification.
//!
//! Four measurements (face length, cheek, jaw and forehead widths) are
//! reduced to a handful of ratio predicates, then checked in a fixed order.
//! The first matching rule decides the shape, so rule order is part of the
//! contract.

use crate::landmarks::FaceMesh;
use crate::types::{FaceShape, Landmark};
use serde::{Deserialize, Serialize};

// --- Thresholds ---
/// Length/width above this reads as elongated.
const LONG_RATIO: f64 = 1.45;
/// Length/width below this reads as wide.
const WIDE_RATIO: f64 = 1.15;
/// Jaw or forehead at least this fraction of cheek width is "prominent".
const PROMINENT_FRACTION: f64 = 0.9;
/// Jaw narrower than this fraction of cheek width reads as a pointed chin.
const POINTED_CHIN_FRACTION: f64 = 0.75;

/// The four measurements a shape is derived from. Units are arbitrary but
/// must be shared by all four.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceDimensions {
    pub face_length: f64,
    pub cheek_width: f64,
    pub jaw_width: f64,
    pub forehead_width: f64,
}

/// Intermediate predicates evaluated by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTraits {
    pub length_to_width_ratio: f64,
    pub is_long: bool,
    pub is_wide: bool,
    pub is_jaw_prominent: bool,
    /// Not consulted by any rule yet.
    pub is_forehead_prominent: bool,
    pub is_chin_pointy: bool,
}

impl FaceDimensions {
    pub const fn new(
        face_length: f64,
        cheek_width: f64,
        jaw_width: f64,
        forehead_width: f64,
    ) -> Self {
        Self {
            face_length,
            cheek_width,
            jaw_width,
            forehead_width,
        }
    }

    /// Evaluate the classifier predicates.
    ///
    /// The length/width division is unguarded: a zero cheek width yields an
    /// infinite ratio, which makes the face "long".
    pub fn traits(&self) -> ShapeTraits {
        let length_to_width_ratio = self.face_length / self.cheek_width;
        ShapeTraits {
            length_to_width_ratio,
            is_long: length_to_width_ratio > LONG_RATIO,
            is_wide: length_to_width_ratio < WIDE_RATIO,
            is_jaw_prominent: self.jaw_width >= self.cheek_width * PROMINENT_FRACTION,
            is_forehead_prominent: self.forehead_width >= self.cheek_width * PROMINENT_FRACTION,
            is_chin_pointy: self.jaw_width < self.cheek_width * POINTED_CHIN_FRACTION,
        }
    }

    pub fn classify(&self) -> FaceShape {
        let t = self.traits();

        if t.is_long {
            return FaceShape::Oblong;
        }

        if t.is_wide {
            return if t.is_jaw_prominent {
                FaceShape::Square
            } else {
                FaceShape::Round
            };
        }

        // Cheekbones widest, narrow forehead and chin.
        if self.cheek_width > self.forehead_width
            && self.cheek_width > self.jaw_width
            && t.is_chin_pointy
        {
            return FaceShape::Diamond;
        }

        // Wide forehead tapering to a narrow chin.
        if self.forehead_width > self.jaw_width && t.is_chin_pointy {
            return FaceShape::Heart;
        }

        if t.is_jaw_prominent {
            return FaceShape::Square;
        }

        FaceShape::Oval
    }
}

/// Classify a face from four raw measurements.
pub fn classify_from_dimensions(
    face_length: f64,
    cheek_width: f64,
    jaw_width: f64,
    forehead_width: f64,
) -> FaceShape {
    FaceDimensions::new(face_length, cheek_width, jaw_width, forehead_width).classify()
}

/// Classify a face from a detector landmark list.
///
/// Returns [`FaceShape::Unknown`] when fewer than 468 landmarks are given.
pub fn classify_from_landmarks(landmarks: &[Landmark]) -> FaceShape {
    FaceMesh::new(landmarks)
        .map(|mesh| mesh.face_shape())
        .unwrap_or(FaceShape::Unknown)
}
