//! Boundary ordering for hull vertices (presentation layer).
//!
//! The engine returns vertices in discovery order. Plotting and polygon
//! measures need boundary order, obtained here by sorting on the polar angle
//! around the vertex centroid. Angles are computed in `f64` regardless of the
//! coordinate kind; for vertices in convex position the centroid is interior
//! and the angular order is the boundary order.

use nalgebra::Point2;

use crate::geom2::Coord;

/// Traversal direction with the usual y-up axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Arithmetic mean of the vertices in `f64`; `None` if empty.
pub fn vertex_centroid<T: Coord>(vertices: &[Point2<T>]) -> Option<Point2<f64>> {
    if vertices.is_empty() {
        return None;
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x.to_f64(), sy + p.y.to_f64()));
    Some(Point2::new(sx / n, sy / n))
}

/// Sort `vertices` by polar angle around their centroid.
pub fn order_around_centroid<T: Coord>(vertices: &[Point2<T>], winding: Winding) -> Vec<Point2<T>> {
    let Some(c) = vertex_centroid(vertices) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Point2<T>)> = vertices
        .iter()
        .map(|p| ((p.y.to_f64() - c.y).atan2(p.x.to_f64() - c.x), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    if winding == Winding::Clockwise {
        keyed.reverse();
    }
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Clockwise boundary order (y-up): descending centroid angle.
///
/// An ascending atan2 sort walks counterclockwise; use
/// [`Winding::CounterClockwise`] for that order.
pub fn order_clockwise<T: Coord>(vertices: &[Point2<T>]) -> Vec<Point2<T>> {
    order_around_centroid(vertices, Winding::Clockwise)
}

/// Shoelace signed area of a closed ring; positive for counterclockwise rings.
pub fn signed_area<T: Coord>(ring: &[Point2<T>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        acc += p.x.to_f64() * q.y.to_f64() - q.x.to_f64() * p.y.to_f64();
    }
    0.5 * acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2<i32>> {
        // Scrambled corners.
        vec![
            Point2::new(10, 10),
            Point2::new(0, 0),
            Point2::new(0, 10),
            Point2::new(10, 0),
        ]
    }

    #[test]
    fn counterclockwise_has_positive_area() {
        let ring = order_around_centroid(&square(), Winding::CounterClockwise);
        assert_eq!(ring.len(), 4);
        assert!((signed_area(&ring) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn clockwise_has_negative_area() {
        let ring = order_clockwise(&square());
        assert!((signed_area(&ring) + 100.0).abs() < 1e-12);
        // atan2 starts at -π: the bottom-left corner (angle -3π/4) comes first counterclockwise,
        // so it is last clockwise.
        assert_eq!(ring.last(), Some(&Point2::new(0, 0)));
    }

    #[test]
    fn centroid_and_empty_input() {
        let c = vertex_centroid(&square()).unwrap();
        assert_eq!(c, Point2::new(5.0, 5.0));
        assert!(vertex_centroid::<f64>(&[]).is_none());
        assert!(order_clockwise::<f64>(&[]).is_empty());
        assert_eq!(signed_area::<f64>(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]), 0.0);
    }
}
