//! Extreme-point search between two known hull vertices.
//!
//! Given candidates strictly right of `A→B`, the farthest candidate `C` is a hull
//! vertex; the search continues on the candidates right of `A→C` and right of
//! `C→B`. Points on either sub-edge line, and points inside triangle `ACB`,
//! are dropped.
//!
//! Output is the pre-order `[C] ++ grow(A, C) ++ grow(C, B)`. Both entry points
//! produce exactly this sequence:
//! - `grow_hull`: plain recursion, each call returns its own list.
//! - `grow_hull_stack`: explicit LIFO work stack, bounded call depth.
//!
//! Tie-break: the first maximum in scan order wins. Candidates keep the (x, y)
//! order of the engine's sorted input, so among tied points the lexicographically
//! smallest one is chosen.

use nalgebra::Point2;

use crate::geom2::{perpendicular_magnitude, side_of, Coord, Side};

/// Candidates strictly right of `a→b`, in their original order.
pub fn right_of<T: Coord>(points: &[Point2<T>], a: &Point2<T>, b: &Point2<T>) -> Vec<Point2<T>> {
    points
        .iter()
        .filter(|p| side_of(a, b, p) == Side::Right)
        .copied()
        .collect()
}

/// First candidate with maximal distance from line `ab`; `None` if empty.
pub fn farthest_from_line<'p, T: Coord>(
    candidates: &'p [Point2<T>],
    a: &Point2<T>,
    b: &Point2<T>,
) -> Option<&'p Point2<T>> {
    let mut best: Option<(&Point2<T>, T::Wide)> = None;
    for p in candidates {
        let d = perpendicular_magnitude(a, b, p);
        match best {
            Some((_, best_d)) if d <= best_d => {}
            _ => best = Some((p, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Hull vertices strictly between `a` and `b` (recursive form).
pub fn grow_hull<T: Coord>(candidates: &[Point2<T>], a: Point2<T>, b: Point2<T>) -> Vec<Point2<T>> {
    let Some(&c) = farthest_from_line(candidates, &a, &b) else {
        return Vec::new();
    };
    let s1 = right_of(candidates, &a, &c);
    let s2 = right_of(candidates, &c, &b);
    let mut out = vec![c];
    out.extend(grow_hull(&s1, a, c));
    out.extend(grow_hull(&s2, c, b));
    out
}

struct Frame<T: Coord> {
    candidates: Vec<Point2<T>>,
    a: Point2<T>,
    b: Point2<T>,
}

/// Hull vertices strictly between `a` and `b` (explicit-stack form).
///
/// Same output as [`grow_hull`]; the `(C, B)` frame is pushed before the
/// `(A, C)` frame so the latter is processed first.
pub fn grow_hull_stack<T: Coord>(candidates: Vec<Point2<T>>, a: Point2<T>, b: Point2<T>) -> Vec<Point2<T>> {
    let mut out = Vec::new();
    let mut stack = vec![Frame { candidates, a, b }];
    while let Some(Frame { candidates, a, b }) = stack.pop() {
        let Some(&c) = farthest_from_line(&candidates, &a, &b) else {
            continue;
        };
        out.push(c);
        let s1 = right_of(&candidates, &a, &c);
        let s2 = right_of(&candidates, &c, &b);
        if !s2.is_empty() {
            stack.push(Frame { candidates: s2, a: c, b });
        }
        if !s1.is_empty() {
            stack.push(Frame { candidates: s1, a, b: c });
        }
    }
    out
}
