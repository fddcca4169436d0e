//! Test collision between a circle and a rect.
use crate::*;

/// True iff the circle strictly overlaps the rect, i.e. the rect's nearest
/// point to the circle's center lies strictly inside the circle. Exclusive at
/// the boundary, like the other circle tests: a circle exactly tangent to an
/// edge is not colliding.
///
/// The rect's raw corners feed the clamp directly, with no normalization
/// pass; the clamp itself tolerates corners in either order.
pub fn circle_rect_test(circle: &Circle, rect: &Rect) -> bool {
    rect.distance_to_point_squared(circle.get_center()) < circle.get_radius().powi(2)
}
