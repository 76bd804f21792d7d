//! Golden-ratio scoring.
//!
//! Three ratios are measured on the mesh. Face length/width and mouth/nose
//! width are each scored by their relative deviation from φ, then blended
//! 60/40 into a 0–100 score. The eye/nose ratio is reported but does not
//! contribute to the score.

use crate::geometry::ratio;
use crate::landmarks::{index, FaceMesh};
use crate::types::{GoldenRatioResult, Landmark, Ratios};

/// The golden ratio φ.
pub const PHI: f64 = 1.61803398875;

const FACE_RATIO_WEIGHT: f64 = 0.6;
const LIPS_NOSE_WEIGHT: f64 = 0.4;

/// Score a single ratio against `target`: 100 at zero deviation, falling
/// linearly to 0 at 100% relative deviation, never below 0.
///
/// Non-finite values (from a zero-length denominator upstream) score 0.
pub fn component_score(value: f64, target: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let relative_error = (value - target).abs() / target;
    (100.0 * (1.0 - relative_error)).max(0.0)
}

/// Blend the face and lips/nose components into the final score.
pub fn weighted_score(ratios: &Ratios) -> u8 {
    let face = component_score(ratios.face_ratio, PHI);
    let lips = component_score(ratios.lips_nose_ratio, PHI);
    round_score(face * FACE_RATIO_WEIGHT + lips * LIPS_NOSE_WEIGHT)
}

/// Round a 0–100 score to an integer.
pub(crate) fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// How close `value` is to φ as a percentage, capped at 100. Zero when the
/// ratio is unavailable or non-finite.
pub fn phi_progress(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (ratio(value, PHI) * 100.0).clamp(0.0, 100.0)
}

pub(crate) fn score_mesh(mesh: &FaceMesh<'_>) -> GoldenRatioResult {
    let face_length = mesh.span(index::TOP_HEAD, index::CHIN);
    let face_width = mesh.span(index::LEFT_CHEEK, index::RIGHT_CHEEK);
    let eye_distance = mesh.span(index::LEFT_EYE_OUTER, index::RIGHT_EYE_OUTER);
    let nose_width = mesh.span(index::NOSE_LEFT, index::NOSE_RIGHT);
    let lips_width = mesh.span(index::MOUTH_LEFT, index::MOUTH_RIGHT);

    // Divisions are unguarded; non-finite ratios are reported as-is and
    // score zero in `component_score`.
    let ratios = Ratios {
        face_ratio: face_length / face_width,
        nose_eye_ratio: eye_distance / nose_width,
        lips_nose_ratio: lips_width / nose_width,
    };

    GoldenRatioResult {
        score: weighted_score(&ratios),
        ratios,
    }
}

/// Compute the golden-ratio score for a detector landmark list.
///
/// Fewer than 468 landmarks yields score 0 with all ratios 0.
pub fn compute_golden_ratio(landmarks: &[Landmark]) -> GoldenRatioResult {
    FaceMesh::new(landmarks)
        .map(|mesh| score_mesh(&mesh))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::MESH_LANDMARKS;

    /// Mesh with face length/width = `face`, eye/nose = `eye_nose`,
    /// mouth/nose = `lips_nose`. Nose width is fixed at 0.1.
    fn mesh_with_ratios(face: f64, eye_nose: f64, lips_nose: f64) -> Vec<Landmark> {
        let mut points = vec![Landmark::default(); MESH_LANDMARKS];
        let width = 0.5;
        let nose = 0.1;
        points[index::TOP_HEAD] = Landmark::new(0.5, 0.0, 0.0);
        points[index::CHIN] = Landmark::new(0.5, face * width, 0.0);
        points[index::LEFT_CHEEK] = Landmark::new(0.25, 0.5, 0.0);
        points[index::RIGHT_CHEEK] = Landmark::new(0.25 + width, 0.5, 0.0);
        points[index::NOSE_LEFT] = Landmark::new(0.45, 0.6, 0.0);
        points[index::NOSE_RIGHT] = Landmark::new(0.45 + nose, 0.6, 0.0);
        points[index::LEFT_EYE_OUTER] = Landmark::new(0.2, 0.4, 0.0);
        points[index::RIGHT_EYE_OUTER] = Landmark::new(0.2 + eye_nose * nose, 0.4, 0.0);
        points[index::MOUTH_LEFT] = Landmark::new(0.4, 0.75, 0.0);
        points[index::MOUTH_RIGHT] = Landmark::new(0.4 + lips_nose * nose, 0.75, 0.0);
        points
    }

    #[test]
    fn test_component_score_at_target() {
        assert_eq!(component_score(PHI, PHI), 100.0);
    }

    #[test]
    fn test_component_score_linear_falloff() {
        assert!((component_score(PHI * 1.5, PHI) - 50.0).abs() < 1e-9);
        assert!((component_score(PHI * 0.75, PHI) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_component_score_clamped_at_zero() {
        assert_eq!(component_score(PHI * 2.0, PHI), 0.0);
        assert_eq!(component_score(PHI * 10.0, PHI), 0.0);
        assert_eq!(component_score(0.0, PHI), 0.0);
    }

    #[test]
    fn test_component_score_non_finite_is_zero() {
        assert_eq!(component_score(f64::INFINITY, PHI), 0.0);
        assert_eq!(component_score(f64::NEG_INFINITY, PHI), 0.0);
        assert_eq!(component_score(f64::NAN, PHI), 0.0);
    }

    #[test]
    fn test_weighted_score_perfect() {
        let ratios = Ratios {
            face_ratio: PHI,
            nose_eye_ratio: 3.0,
            lips_nose_ratio: PHI,
        };
        assert_eq!(weighted_score(&ratios), 100);
    }

    #[test]
    fn test_weighted_score_weights() {
        // Face component 100, lips component 0 → 60.
        let face_only = Ratios {
            face_ratio: PHI,
            nose_eye_ratio: 0.0,
            lips_nose_ratio: PHI * 3.0,
        };
        assert_eq!(weighted_score(&face_only), 60);

        // Face component 0, lips component 100 → 40.
        let lips_only = Ratios {
            face_ratio: 0.0,
            nose_eye_ratio: 0.0,
            lips_nose_ratio: PHI,
        };
        assert_eq!(weighted_score(&lips_only), 40);
    }

    #[test]
    fn test_nose_eye_ratio_excluded_from_score() {
        let a = compute_golden_ratio(&mesh_with_ratios(1.5, 1.0, 1.4));
        let b = compute_golden_ratio(&mesh_with_ratios(1.5, 4.0, 1.4));
        assert_eq!(a.score, b.score);
        assert!((a.ratios.nose_eye_ratio - 1.0).abs() < 1e-9);
        assert!((b.ratios.nose_eye_ratio - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_mesh_at_phi_scores_100() {
        let result = compute_golden_ratio(&mesh_with_ratios(PHI, 2.5, PHI));
        assert_eq!(result.score, 100);
        assert!((result.ratios.face_ratio - PHI).abs() < 1e-9);
        assert!((result.ratios.lips_nose_ratio - PHI).abs() < 1e-9);
    }

    #[test]
    fn test_mesh_known_score() {
        // face 1.3 → 100 * (1 - 0.3180/1.6180) ≈ 80.34
        // lips 1.2 → 100 * (1 - 0.4180/1.6180) ≈ 74.16
        // 0.6 * 80.34 + 0.4 * 74.16 ≈ 77.87 → 78
        let result = compute_golden_ratio(&mesh_with_ratios(1.3, 2.0, 1.2));
        assert_eq!(result.score, 78);
    }

    #[test]
    fn test_short_landmarks_sentinel() {
        let result = compute_golden_ratio(&[]);
        assert_eq!(result, GoldenRatioResult::default());
        let points = vec![Landmark::default(); MESH_LANDMARKS - 1];
        assert_eq!(compute_golden_ratio(&points), GoldenRatioResult::default());
    }

    #[test]
    fn test_zero_nose_width_scores_face_only() {
        let mut points = mesh_with_ratios(PHI, 2.0, PHI);
        points[index::NOSE_RIGHT] = points[index::NOSE_LEFT];
        let result = compute_golden_ratio(&points);
        assert!(result.ratios.nose_eye_ratio.is_infinite());
        assert!(result.ratios.lips_nose_ratio.is_infinite());
        assert_eq!(result.score, 60);
    }

    #[test]
    fn test_degenerate_mesh_scores_zero() {
        // Every landmark at the origin: all ratios are 0/0.
        let points = vec![Landmark::default(); MESH_LANDMARKS];
        let result = compute_golden_ratio(&points);
        assert!(result.ratios.face_ratio.is_nan());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_zero_nose_width_json_reads_back() {
        let mut points = mesh_with_ratios(PHI, 2.0, PHI);
        points[index::NOSE_RIGHT] = points[index::NOSE_LEFT];
        let result = compute_golden_ratio(&points);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""noseEyeRatio":null"#));
        let back: GoldenRatioResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 60);
        assert!((back.ratios.face_ratio - PHI).abs() < 1e-9);
        assert_eq!(back.ratios.nose_eye_ratio, 0.0);
        assert_eq!(back.ratios.lips_nose_ratio, 0.0);
    }

    #[test]
    fn test_degenerate_analysis_json_reads_back() {
        let points = vec![Landmark::default(); MESH_LANDMARKS];
        let data = FaceMesh::new(&points).unwrap().analyze();
        let json = serde_json::to_string(&data).unwrap();
        let back: crate::types::AnalysisData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shape, data.shape);
        assert_eq!(back.ratio.score, 0);
        assert_eq!(back.ratio.ratios, Ratios::default());
    }

    #[test]
    fn test_phi_progress() {
        assert!((phi_progress(PHI) - 100.0).abs() < 1e-9);
        assert!((phi_progress(PHI / 2.0) - 50.0).abs() < 1e-9);
        assert_eq!(phi_progress(PHI * 2.0), 100.0);
        assert_eq!(phi_progress(0.0), 0.0);
        assert_eq!(phi_progress(f64::INFINITY), 0.0);
        assert_eq!(phi_progress(f64::NAN), 0.0);
    }
}
