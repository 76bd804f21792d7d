//! facemetric-core — Face shape and golden-ratio analysis.
//!
//! Turns a 468-point normalized face mesh (or four hand-taken lengths) into
//! a categorical face shape and a 0–100 golden-ratio score. The analysis is
//! pure and synchronous; only detection ingestion logs.

pub mod detection;
pub mod geometry;
pub mod golden;
pub mod landmarks;
pub mod manual;
pub mod shape;
pub mod tips;
pub mod types;

pub use detection::{analyze_detection, DetectionError, DetectionResult};
pub use golden::{compute_golden_ratio, PHI};
pub use landmarks::{AnalysisError, FaceMesh, MESH_LANDMARKS};
pub use manual::{compute_manual_score, ManualMeasurements, MeasurementError};
pub use shape::{classify_from_dimensions, classify_from_landmarks, FaceDimensions, ShapeTraits};
pub use tips::{styling_tips, StylingTips};
pub use types::{
    AnalysisData, FaceShape, GoldenRatioResult, Landmark, ParseFaceShapeError, Ratios, ScoreBand,
};
