//! Test whether a point is inside a circle.
use crate::*;

/// True iff the point is strictly inside the circle. A point exactly on the
/// circumference is not inside; contrast with [`point_rect_test`], which
/// includes its boundary.
pub fn point_circle_test(point: &V2, circle: &Circle) -> bool {
    // Compare squared distances, square roots are slow.
    circle.get_center().distance_squared(point) < circle.get_radius().powi(2)
}
