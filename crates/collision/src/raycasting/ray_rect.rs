//! Cast a ray against a rect, using the slab method.
use crate::*;

/// Cast `ray` against `rect`, returning the fraction of the segment
/// `[origin, origin + direction]` at which the ray first touches the rect,
/// or `f64::INFINITY` if it never does.
///
/// The rect is treated as the intersection of an x slab and a y slab; the
/// ray hits iff its crossing intervals for the two slabs overlap within
/// `[0, 1]`. The same endpoint-inside shortcut as [`ray_circle_test`]
/// applies: a segment ending inside the rect reports 0.
pub fn ray_rect_test(ray: &Ray, rect: &Rect) -> f64 {
    // Shortcuts, mirroring the circle cast. The containment test is
    // inclusive, so an origin exactly on the boundary hits at 0.
    if point_rect_test(&ray.origin, rect) {
        return 0.0;
    }
    if ray.direction.is_zero() {
        return f64::INFINITY;
    }
    if point_rect_test(&ray.endpoint(), rect) {
        return 0.0;
    }

    let rect = rect.normalized();
    let bmin = rect.origin;
    let bmax = rect.origin + rect.extent;

    // Lambdas at which the ray crosses the left and right edge lines. A zero
    // x component makes these signed infinities, or NaN when the origin sits
    // exactly on an edge line (0 * inf). f64::min/max suppress NaN exactly
    // like C's fmin/fmax, so both cases fall through the interval math as
    // "no constraint on this axis" or "no hit". Don't guard against them.
    let inv_dx = 1.0 / ray.direction.x;
    let hx1 = (bmin.x - ray.origin.x) * inv_dx;
    let hx2 = (bmax.x - ray.origin.x) * inv_dx;
    let mut hmin = hx1.min(hx2);
    let mut hmax = hx1.max(hx2);

    // Exit early if there's already no intersection.
    if hmax < hmin {
        return f64::INFINITY;
    }

    // Narrow by the crossings of the bottom and top edge lines: the running
    // interval is the overlap of both axes' intervals.
    let inv_dy = 1.0 / ray.direction.y;
    let hy1 = (bmin.y - ray.origin.y) * inv_dy;
    let hy2 = (bmax.y - ray.origin.y) * inv_dy;
    hmin = hmin.max(hy1.min(hy2));
    hmax = hmax.min(hy1.max(hy2));

    if hmax < hmin {
        return f64::INFINITY;
    }

    // hmin is the entry crossing. If it's behind the origin the origin is
    // already past entry on the composite slab, and the exit crossing is the
    // candidate instead.
    let h = if hmin < 0.0 { hmax } else { hmin };
    if (0.0..=1.0).contains(&h) {
        h
    } else {
        f64::INFINITY
    }
}
