//! Test whether a point is inside a rect.
use crate::*;

/// True iff the point lies within the rect, boundary included. A point
/// exactly on an edge or corner is inside; contrast with
/// [`point_circle_test`], which excludes its boundary.
pub fn point_rect_test(point: &V2, rect: &Rect) -> bool {
    let rect = rect.normalized();
    let min = rect.origin;
    let max = rect.origin + rect.extent;

    if point.x < min.x {
        return false;
    }
    if point.x > max.x {
        return false;
    }
    if point.y < min.y {
        return false;
    }
    if point.y > max.y {
        return false;
    }

    true
}
