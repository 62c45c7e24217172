//! Hull result type and engine errors.

use std::fmt;

use nalgebra::{Point2, Scalar};

use super::order::{order_around_centroid, Winding};
use crate::geom2::{lex_cmp, side_of, Coord, Side};

/// Errors surfaced by the hull engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Input point `index` has a NaN or infinite coordinate.
    NonFiniteCoordinate { index: usize },
    /// Input point `index` is outside the coordinate kind's supported range.
    CoordinateRangeExceeded { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            HullError::CoordinateRangeExceeded { index } => write!(
                f,
                "point {index} exceeds the supported coordinate range (cross product would overflow)"
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Hull vertices in discovery order.
///
/// For inputs with at least three points the order is
/// `A, <vertices right of A→B>, B, <vertices right of B→A>`, where `A`/`B` are
/// the lexicographically smallest/largest input points. This is a traversal
/// order, not a boundary order; use [`Hull::ordered`] for the latter.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull<T: Scalar> {
    pub vertices: Vec<Point2<T>>,
}

impl<T: Coord> Hull<T> {
    pub fn from_vertices(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2<T>> {
        self.vertices.iter()
    }

    pub fn into_vertices(self) -> Vec<Point2<T>> {
        self.vertices
    }

    pub fn contains_vertex(&self, p: &Point2<T>) -> bool {
        self.vertices.iter().any(|v| v == p)
    }

    /// Vertices sorted and deduplicated by (x, y).
    pub fn distinct_vertices(&self) -> Vec<Point2<T>> {
        let mut v = self.vertices.clone();
        v.sort_by(lex_cmp);
        v.dedup();
        v
    }

    /// Same vertices as `other`, ignoring order and multiplicity.
    pub fn same_vertex_set(&self, other: &Hull<T>) -> bool {
        self.distinct_vertices() == other.distinct_vertices()
    }

    /// Vertices in boundary order around their centroid.
    pub fn ordered(&self, winding: Winding) -> Vec<Point2<T>> {
        order_around_centroid(&self.vertices, winding)
    }

    /// `p` lies inside or on the boundary of the hull polygon.
    ///
    /// Assumes the vertices are in convex position (as produced by the engine).
    /// Degenerate hulls are handled as a point or a closed segment.
    pub fn encloses(&self, p: &Point2<T>) -> bool {
        let verts = self.distinct_vertices();
        match verts.len() {
            0 => false,
            1 => verts[0] == *p,
            2 => {
                let (a, b) = (&verts[0], &verts[1]);
                // Collinear and between the endpoints in (x, y) order.
                side_of(a, b, p) == Side::OnLine && lex_cmp(a, p).is_le() && lex_cmp(p, b).is_le()
            }
            _ => {
                let ring = order_around_centroid(&verts, Winding::CounterClockwise);
                let next = ring.iter().cycle().skip(1);
                ring.iter().zip(next).all(|(u, v)| side_of(u, v, p) != Side::Right)
            }
        }
    }
}
