use crate::*;

/// A ray covering the segment from `origin` to `origin + direction`.
///
/// The direction is not normalized: its magnitude is the ray's length, and
/// the raycasting functions report hits as fractions of it. A zero direction
/// is a valid degenerate ray covering a single point.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub origin: V2,
    pub direction: V2,
}

impl Ray {
    pub const fn new(origin: V2, direction: V2) -> Ray {
        Ray { origin, direction }
    }

    /// Build a ray from a source point and a destination point.
    pub fn from_points(source: V2, target: V2) -> Ray {
        Ray::new(source, target - source)
    }

    pub fn from_angle(origin: V2, length: f64, theta: f64) -> Ray {
        Ray::new(origin, V2::new(theta.cos(), theta.sin()) * length)
    }

    pub fn endpoint(&self) -> V2 {
        self.origin + self.direction
    }

    /// Evaluate the ray at a given `lambda`, where 0 is the origin and 1 the
    /// endpoint.
    pub fn evaluate(&self, lambda: f64) -> V2 {
        self.origin + self.direction * lambda
    }

    pub fn bounding_rect(&self) -> Rect {
        let end = self.endpoint();
        let p1 = V2::new(self.origin.x.min(end.x), self.origin.y.min(end.y));
        let p2 = V2::new(self.origin.x.max(end.x), self.origin.y.max(end.y));
        Rect::from_points(p1, p2)
    }
}
