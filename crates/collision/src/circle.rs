//! A simple circle.
use crate::errors::CircleError;
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Circle {
    center: V2,
    radius: f64,
}

impl Circle {
    /// Create a circle. The radius must be non-negative; a zero radius is a
    /// valid degenerate circle which contains nothing.
    pub fn new(center: V2, radius: f64) -> Result<Circle, CircleError> {
        if radius < 0.0 {
            return Err(CircleError::NegativeRadius);
        }
        Ok(Circle { center, radius })
    }

    pub fn get_center(&self) -> &V2 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// The tightest rect enclosing this circle.
    pub fn bounding_rect(&self) -> Rect {
        let p1 = V2::new(self.center.x - self.radius, self.center.y - self.radius);
        Rect::new(p1, V2::new(self.radius * 2.0, self.radius * 2.0))
    }
}
