//! An axis-aligned rectangle.
use crate::clamp::clamp_v2;
use crate::*;

/// An axis-aligned rectangle specified by an origin corner and a
/// width/height extent.
///
/// Either extent component may be negative, meaning the rect was authored
/// backwards from the opposite corner. Operations which need an ordered
/// min/max corner pair run [`Rect::normalized`] first; the covered area is
/// the same either way.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rect {
    pub origin: V2,
    pub extent: V2,
}

impl Rect {
    pub const fn new(origin: V2, extent: V2) -> Rect {
        Rect { origin, extent }
    }

    /// Build a rect from two opposite corners, in any order.
    pub fn from_points(p1: V2, p2: V2) -> Rect {
        Rect {
            origin: p1,
            extent: p2 - p1,
        }
    }

    /// Flip any negative extent component, shifting the origin on that axis
    /// so that the covered area is unchanged. Each axis is handled
    /// independently; a rect that is only backwards on x is only corrected
    /// on x. Idempotent.
    #[must_use = "This doesn't mutate the Rect in place"]
    pub fn normalized(self) -> Rect {
        let mut r = self;
        if r.extent.x < 0.0 {
            r.origin.x += r.extent.x;
            r.extent.x = -r.extent.x;
        }
        if r.extent.y < 0.0 {
            r.origin.y += r.extent.y;
            r.extent.y = -r.extent.y;
        }
        r
    }

    /// Lower left corner of the normalized equivalent.
    pub fn min_corner(&self) -> V2 {
        self.normalized().origin
    }

    /// Upper right corner of the normalized equivalent.
    pub fn max_corner(&self) -> V2 {
        let r = self.normalized();
        r.origin + r.extent
    }

    pub fn get_width(&self) -> f64 {
        self.extent.x.abs()
    }

    pub fn get_height(&self) -> f64 {
        self.extent.y.abs()
    }

    pub fn get_center(&self) -> V2 {
        self.origin + self.extent * 0.5
    }

    /// get the squared distance to a specific point.
    pub fn distance_to_point_squared(&self, point: &V2) -> f64 {
        // The closest point on a rect to a point is the clamped value of the
        // point itself. The clamp accepts its bounds in either order, so the
        // raw corners work even when the extent is negative.
        let nearest = clamp_v2(point, &self.origin, &(self.origin + self.extent));
        nearest.distance_squared(point)
    }

    pub fn distance_to_point(&self, point: &V2) -> f64 {
        self.distance_to_point_squared(point).sqrt()
    }
}
