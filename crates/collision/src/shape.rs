//! A shape is one of the concrete shape types behind an enum for collision
//! detection.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
}

impl Shape {
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Circle(ref c) => c.bounding_rect(),
            Shape::Rect(ref r) => r.normalized(),
        }
    }

    /// Test if this shape contains a point, with each variant's own boundary
    /// convention: exclusive for circles, inclusive for rects.
    pub fn contains_point(&self, point: &V2) -> bool {
        match self {
            Shape::Circle(ref c) => point_circle_test(point, c),
            Shape::Rect(ref r) => point_rect_test(point, r),
        }
    }

    /// Test if this shape collides with another.
    pub fn collides_with(&self, other: &Shape) -> bool {
        use Shape::*;

        match (self, other) {
            (Circle(ref a), Circle(ref b)) => circle_circle_test(a, b),
            (Rect(ref a), Rect(ref b)) => rect_rect_test(a, b),
            (Circle(ref c), Rect(ref r)) | (Rect(ref r), Circle(ref c)) => circle_rect_test(c, r),
        }
    }

    /// Cast a ray against this shape, with the raycasting module's lambda
    /// and infinity conventions.
    pub fn raycast(&self, ray: &Ray) -> f64 {
        match self {
            Shape::Circle(ref c) => ray_circle_test(ray, c),
            Shape::Rect(ref r) => ray_rect_test(ray, r),
        }
    }
}

impl From<Circle> for Shape {
    fn from(other: Circle) -> Shape {
        Shape::Circle(other)
    }
}

impl From<Rect> for Shape {
    fn from(other: Rect) -> Shape {
        Shape::Rect(other)
    }
}
