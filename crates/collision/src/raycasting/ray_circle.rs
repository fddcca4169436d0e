//! Cast a ray against a circle.
use crate::*;

/// Cast `ray` against `circle`, returning the fraction of the segment
/// `[origin, origin + direction]` at which the ray first touches the circle,
/// or `f64::INFINITY` if it never does.
///
/// A segment whose far endpoint is inside the circle reports a hit at 0
/// rather than the true entry fraction. That shortcut is intentional and
/// kept; callers that care about exact entry points must keep their segment
/// endpoints outside the target.
pub fn ray_circle_test(ray: &Ray, circle: &Circle) -> f64 {
    // Starting inside is an immediate hit. This runs before the zero-length
    // check so that a degenerate ray sitting inside the circle still hits.
    if point_circle_test(&ray.origin, circle) {
        return 0.0;
    }
    // A zero-length ray outside the circle can't progress to it.
    if ray.direction.is_zero() {
        return f64::INFINITY;
    }
    if point_circle_test(&ray.endpoint(), circle) {
        return 0.0;
    }

    // Translate the circle's center into the ray's frame.
    let center = *circle.get_center() - ray.origin;

    // Needed a few times below; direction is non-zero past the guard above.
    let mag = ray.direction.length();
    let inv_mag = 1.0 / mag;

    // Project the center onto the ray. This is an actual distance along the
    // direction, not a lambda value, and it is clamped to the segment.
    let proj = (center.dot(&ray.direction) * inv_mag).clamp(0.0, mag);

    // Squared distance from the center to the projected point on the ray.
    let dist_squared = (center - ray.direction * (proj * inv_mag)).length_squared();
    let rad_squared = circle.get_radius().powi(2);
    if dist_squared >= rad_squared {
        return f64::INFINITY;
    }

    // The center-to-contact distance is the radius and the
    // center-to-projection distance is sqrt(dist_squared), so Pythagoras
    // gives how far the contact point sits before the projection. Dividing
    // by the length turns the distance back into a lambda.
    let h = (proj - (rad_squared - dist_squared).sqrt()) * inv_mag;
    if (0.0..=1.0).contains(&h) {
        h
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn unit_circle() -> Circle {
        Circle::new(V2::new(0.0, 0.0), 1.0).expect("Should succeed")
    }

    #[test]
    fn test_hits_at_entry_point() {
        // Enters the unit circle at (-1, 0), a third of the way along.
        let ray = Ray::new(V2::new(-3.0, 0.0), V2::new(6.0, 0.0));
        assert_relative_eq!(ray_circle_test(&ray, &unit_circle()), 1.0 / 3.0);
    }

    #[test]
    fn test_origin_inside_hits_at_zero() {
        let c = unit_circle();
        for dir in [
            V2::new(1.0, 0.0),
            V2::new(-5.0, 2.0),
            V2::new(0.0, 0.0),
        ] {
            let ray = Ray::new(V2::new(0.5, 0.0), dir);
            assert_eq!(ray_circle_test(&ray, &c), 0.0);
        }
    }

    #[test]
    fn test_zero_length_ray_outside_misses() {
        let ray = Ray::new(V2::new(5.0, 0.0), V2::new(0.0, 0.0));
        assert_eq!(ray_circle_test(&ray, &unit_circle()), f64::INFINITY);
    }

    #[test]
    fn test_endpoint_inside_shortcut() {
        // The segment ends inside the circle; the reported hit is 0, not the
        // true entry fraction of 2/3.
        let ray = Ray::new(V2::new(-3.0, 0.0), V2::new(3.0, 0.0));
        assert_eq!(ray_circle_test(&ray, &unit_circle()), 0.0);
    }

    #[test]
    fn test_tangent_ray_misses() {
        // Grazes the circle at exactly radius distance.
        let ray = Ray::new(V2::new(-3.0, 1.0), V2::new(6.0, 0.0));
        assert_eq!(ray_circle_test(&ray, &unit_circle()), f64::INFINITY);
    }

    #[test]
    fn test_short_ray_misses() {
        // Pointed at the circle but stops well before it.
        let ray = Ray::new(V2::new(-5.0, 0.0), V2::new(2.0, 0.0));
        assert_eq!(ray_circle_test(&ray, &unit_circle()), f64::INFINITY);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let ray = Ray::new(V2::new(3.0, 0.0), V2::new(6.0, 0.0));
        assert_eq!(ray_circle_test(&ray, &unit_circle()), f64::INFINITY);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]
        #[test]
        fn fuzz_overshooting_rays_hit_the_rim(
            x in -100.0..=100.0f64,
            y in -100.0..=100.0f64,
            radius in 1.0..=10.0f64,
            center_dist in 1.0..=50.0f64,
            center_ang in 0.0..=100.0f64,
            overshoot in 1.0..=10.0f64,
        ) {
            // A circle some distance from the ray origin, and a ray fired
            // straight through its center, long enough that the endpoint
            // comes out the far side. That dodges the endpoint-inside
            // shortcut, so the projection path must produce the entry point.
            let dist = radius + center_dist;
            let dir = V2::new(center_ang.cos(), center_ang.sin());
            let center = V2::new(x + dir.x * dist, y + dir.y * dist);
            let circle = Circle::new(center, radius).expect("Should succeed");

            let length = dist + radius + overshoot;
            let ray = Ray::new(V2::new(x, y), dir * length);
            let h = ray_circle_test(&ray, &circle);
            prop_assert!(h.is_finite(), "{:?} {:?}", ray, circle);
            prop_assert!((0.0..=1.0).contains(&h), "{}", h);
            // The contact point sits on the rim.
            let contact_dist = ray.evaluate(h).distance(&center);
            prop_assert!((contact_dist - radius).abs() < 0.01, "{}", contact_dist);

            // Fired the other way, the circle is behind the ray.
            let away = Ray::new(V2::new(x, y), -dir * length);
            prop_assert_eq!(ray_circle_test(&away, &circle), f64::INFINITY);
        }
    }

    // Randomized consistency check: any finite result is a valid lambda, and
    // any miss means no sampled point of the segment is inside the circle.
    #[test]
    fn test_random_consistency() {
        let mut rng = SmallRng::seed_from_u64(0x636f6c6c69646532);
        for _ in 0..10000 {
            let ray = Ray::new(
                V2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0)),
                V2::new(rng.gen_range(-40.0..40.0), rng.gen_range(-40.0..40.0)),
            );
            let circle = Circle::new(
                V2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0)),
                rng.gen_range(0.0..10.0),
            )
            .expect("Should succeed");

            let h = ray_circle_test(&ray, &circle);
            if h.is_finite() {
                assert!((0.0..=1.0).contains(&h), "{} {:?} {:?}", h, ray, circle);
            } else {
                for i in 0..=32 {
                    let p = ray.evaluate(f64::from(i) / 32.0);
                    assert!(
                        !point_circle_test(&p, &circle),
                        "missed ray passes through the circle: {:?} {:?}",
                        ray,
                        circle
                    );
                }
            }
        }
    }
}
