//! Test collision between two rects.
use crate::*;

/// True iff the rects overlap, shared boundary included: two rects which
/// exactly share an edge or corner count as colliding. This is the opposite
/// boundary convention from the circle tests.
pub fn rect_rect_test(a: &Rect, b: &Rect) -> bool {
    // Make sure both rects have non-negative extents.
    let a = a.normalized();
    let b = b.normalized();

    let amin = a.origin;
    let amax = a.origin + a.extent;
    let bmin = b.origin;
    let bmax = b.origin + b.extent;

    // a is to the left of b
    if amax.x < bmin.x {
        return false;
    }
    // b is to the left of a
    if bmax.x < amin.x {
        return false;
    }
    // a is below b
    if amax.y < bmin.y {
        return false;
    }
    // b is below a
    if bmax.y < amin.y {
        return false;
    }

    // No separating axis, so they're colliding.
    true
}
