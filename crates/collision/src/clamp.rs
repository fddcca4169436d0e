//! Scalar and vector clamps which accept their bounds in either order.
use crate::*;

/// Clamp a scalar between two bounds. The bounds do not have to be ordered:
/// the value is clamped into `[min(b1, b2), max(b1, b2)]`.
pub(crate) fn clamp_scalar(a: f64, b1: f64, b2: f64) -> f64 {
    if b1 < b2 {
        a.min(b2).max(b1)
    } else {
        a.min(b1).max(b2)
    }
}

/// Clamp a vector between two bound vectors, independently per axis. Each
/// axis tolerates its bounds being swapped, as happens when a rect's raw
/// corners are passed without normalizing first.
pub(crate) fn clamp_v2(a: &V2, b1: &V2, b2: &V2) -> V2 {
    V2::new(
        clamp_scalar(a.x, b1.x, b2.x),
        clamp_scalar(a.y, b1.y, b2.y),
    )
}
