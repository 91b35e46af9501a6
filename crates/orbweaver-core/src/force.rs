//! Pure force functions of the Fruchterman-Reingold model.
//!
//! Both functions operate on a pair of points and the ideal spring length
//! `l`. Repulsion acts between every pair of nodes, attraction only along
//! edges; the layout engine combines them and applies temperature clamping.

use crate::geometry::Point;

/// Floor for the distance between two points.
///
/// Keeps the force magnitude finite when two nodes coincide.
pub const EPSILON: f32 = 0.001;

/// Calculate the repulsive force between two points.
///
/// The magnitude is `l² / dist` and the direction is the unit vector from
/// `p2` toward `p1`, so the returned vector pushes `p1` away from `p2`.
pub fn repulsive(p1: Point, p2: Point, l: f32) -> Point {
    let dist = p1.distance(p2).max(EPSILON);

    // unit vector from p2 to p1
    let unit = p1.sub_point(p2).scale(1.0 / dist);

    unit.scale((l * l) / dist)
}

/// Calculate the attractive force between two points.
///
/// The magnitude is `dist² / l` and the direction is the unit vector from
/// `p1` toward `p2`, so the returned vector pulls `p1` toward `p2`.
pub fn attractive(p1: Point, p2: Point, l: f32) -> Point {
    let dist = p1.distance(p2).max(EPSILON);

    // unit vector from p1 to p2
    let unit = p2.sub_point(p1).scale(1.0 / dist);

    unit.scale((dist * dist) / l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn repulsive_pushes_apart_along_axis() {
        let p1 = Point::new(10.0, 0.0);
        let p2 = Point::new(0.0, 0.0);

        let force = repulsive(p1, p2, 5.0);

        // dist = 10, magnitude = 25 / 10 = 2.5, direction +x
        assert!(approx_eq!(f32, force.x(), 2.5, ulps = 2));
        assert!(approx_eq!(f32, force.y(), 0.0, ulps = 2));
    }

    #[test]
    fn attractive_pulls_together_along_axis() {
        let p1 = Point::new(10.0, 0.0);
        let p2 = Point::new(0.0, 0.0);

        let force = attractive(p1, p2, 5.0);

        // dist = 10, magnitude = 100 / 5 = 20, direction -x (toward p2)
        assert!(approx_eq!(f32, force.x(), -20.0, ulps = 2));
        assert!(approx_eq!(f32, force.y(), 0.0, ulps = 2));
    }

    #[test]
    fn repulsion_grows_as_nodes_get_closer() {
        let origin = Point::new(0.0, 0.0);
        let near = repulsive(Point::new(1.0, 0.0), origin, 5.0).hypot();
        let far = repulsive(Point::new(10.0, 0.0), origin, 5.0).hypot();
        assert!(near > far);
    }

    #[test]
    fn attraction_grows_with_distance() {
        let origin = Point::new(0.0, 0.0);
        let near = attractive(Point::new(1.0, 0.0), origin, 5.0).hypot();
        let far = attractive(Point::new(10.0, 0.0), origin, 5.0).hypot();
        assert!(far > near);
    }

    #[test]
    fn coincident_points_produce_finite_forces() {
        let p = Point::new(3.0, 7.0);

        let rep = repulsive(p, p, 50.0);
        assert!(rep.x().is_finite() && rep.y().is_finite());

        let attr = attractive(p, p, 50.0);
        assert!(attr.x().is_finite() && attr.y().is_finite());
        // Coincident points have no direction to pull along.
        assert!(attr.hypot() < 1.0);
    }

    proptest! {
        #[test]
        fn forces_are_always_finite(
            x1 in -2000.0f32..2000.0,
            y1 in -2000.0f32..2000.0,
            x2 in -2000.0f32..2000.0,
            y2 in -2000.0f32..2000.0,
            l in 0.1f32..1000.0,
        ) {
            let p1 = Point::new(x1, y1);
            let p2 = Point::new(x2, y2);

            let rep = repulsive(p1, p2, l);
            prop_assert!(rep.x().is_finite());
            prop_assert!(rep.y().is_finite());

            let attr = attractive(p1, p2, l);
            prop_assert!(attr.x().is_finite());
            prop_assert!(attr.y().is_finite());
        }

        #[test]
        fn repulsion_is_antisymmetric(
            x1 in -100.0f32..100.0,
            y1 in -100.0f32..100.0,
            x2 in -100.0f32..100.0,
            y2 in -100.0f32..100.0,
        ) {
            let p1 = Point::new(x1, y1);
            let p2 = Point::new(x2, y2);

            let ab = repulsive(p1, p2, 10.0);
            let ba = repulsive(p2, p1, 10.0);

            prop_assert!((ab.x() + ba.x()).abs() < 1e-3);
            prop_assert!((ab.y() + ba.y()).abs() < 1e-3);
        }
    }
}
