//! Geometry helpers for pointer hit areas.
//!
//! Thin wrappers over `kurbo` so pointers and game objects agree on what
//! "overlapping" means.

use kurbo::{Circle, Point};

/// Default radius of the circle a pointer covers.
pub const DEFAULT_HIT_RADIUS: f64 = 1.0;

/// A circle of `radius` centered on the origin.
pub fn origin_circle(radius: f64) -> Circle {
    Circle::new(Point::ORIGIN, radius)
}

/// Whether two circles touch or intersect.
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// Whether `p` lies inside or on the edge of `circle`.
pub fn circle_contains(circle: &Circle, p: Point) -> bool {
    circle.center.distance(p) <= circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_circles_overlap() {
        let a = Circle::new((0.0, 0.0), 1.0);
        let b = Circle::new((2.0, 0.0), 1.0);
        assert!(circles_overlap(&a, &b));
    }

    #[test]
    fn distant_circles_do_not_overlap() {
        let a = Circle::new((0.0, 0.0), 1.0);
        let b = Circle::new((10.0, 10.0), 2.0);
        assert!(!circles_overlap(&a, &b));
    }

    #[test]
    fn contains_edge_point() {
        let c = origin_circle(5.0);
        assert!(circle_contains(&c, Point::new(3.0, 4.0)));
        assert!(!circle_contains(&c, Point::new(4.0, 4.0)));
    }
}
