//! Test collision between two circles.
use crate::*;

/// True iff the circles strictly overlap. Two circles which exactly touch at
/// a single point are not colliding, matching the exclusive boundary of
/// [`point_circle_test`].
pub fn circle_circle_test(c1: &Circle, c2: &Circle) -> bool {
    // The distance the two centers need to be within to collide. Compare
    // squares, square roots are slow.
    let touching_dist_squared = (c1.get_radius() + c2.get_radius()).powi(2);
    c1.get_center().distance_squared(c2.get_center()) < touching_dist_squared
}
