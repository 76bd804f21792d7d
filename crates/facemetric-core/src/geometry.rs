//! Planar distance and ratio helpers over normalized landmarks.

use crate::types::Landmark;

/// Euclidean distance between two landmarks in the image plane.
///
/// Depth (`z`) is ignored: the shape and ratio thresholds are calibrated on
/// frontal 2D proportions, and detector depth is noisy.
pub fn distance(p1: &Landmark, p2: &Landmark) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// `a / b`, or `0.0` when `b` is zero.
///
/// Callers read `0.0` as "ratio unavailable".
pub fn ratio(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}
