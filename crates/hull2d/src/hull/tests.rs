use super::{compute_hull, Hull, HullCfg, HullEngine, HullError, Strategy, Winding};
use crate::geom2::cfg::I64_COORD_MAX;
use crate::geom2::rand::{uniform_box_points, uniform_grid_points, ReplayToken};
use crate::geom2::{cross, lex_cmp};
use nalgebra::Point2;
use proptest::prelude::{prop, prop_assert, prop_assert_eq, prop_assume, proptest};
use proptest::strategy::Strategy as PropStrategy;

fn pts(raw: &[(i32, i32)]) -> Vec<Point2<i32>> {
    raw.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

/// Andrew's monotone chain (strict: drops collinear boundary points). Oracle for vertex sets.
fn monotone_chain(points: &[Point2<i32>]) -> Vec<Point2<i32>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(lex_cmp);
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }
    let mut lower: Vec<Point2<i32>> = Vec::with_capacity(sorted.len());
    for p in &sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2<i32>> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[test]
fn collinear_input_keeps_only_extremes() {
    let hull = compute_hull(&pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])).unwrap();
    assert_eq!(hull.vertices, pts(&[(0, 0), (3, 3)]));
}

#[test]
fn square_drops_interior_point() {
    let hull = compute_hull(&pts(&[(0, 0), (0, 10), (10, 0), (10, 10), (5, 5)])).unwrap();
    // A, right of A→B, B, right of B→A.
    assert_eq!(hull.vertices, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    assert!(!hull.contains_vertex(&Point2::new(5, 5)));
}

#[test]
fn triangle_is_its_own_hull() {
    let hull = compute_hull(&pts(&[(0, 0), (4, 0), (2, 3)])).unwrap();
    assert_eq!(hull.vertices, pts(&[(0, 0), (4, 0), (2, 3)]));
}

#[test]
fn duplicates_do_not_repeat_or_crash() {
    let hull = compute_hull(&pts(&[(0, 0), (0, 0), (5, 5), (5, 0), (0, 5)])).unwrap();
    assert_eq!(hull.vertices, pts(&[(0, 0), (5, 0), (5, 5), (0, 5)]));
}

#[test]
fn small_inputs_pass_through_unchanged() {
    let empty: Vec<Point2<i32>> = Vec::new();
    assert!(compute_hull(&empty).unwrap().is_empty());
    let one = pts(&[(7, -1)]);
    assert_eq!(compute_hull(&one).unwrap().vertices, one);
    // Order is preserved, not sorted.
    let two = pts(&[(3, 1), (0, 0)]);
    assert_eq!(compute_hull(&two).unwrap().vertices, two);
    // No coordinate checks below three points.
    let nan = vec![Point2::new(f64::NAN, 0.0)];
    assert_eq!(compute_hull(&nan).unwrap().len(), 1);
}

#[test]
fn identical_points_collapse_to_segment_endpoints() {
    let hull = compute_hull(&pts(&[(2, 2), (2, 2), (2, 2), (2, 2)])).unwrap();
    assert_eq!(hull.vertices, pts(&[(2, 2), (2, 2)]));
    assert_eq!(hull.distinct_vertices(), pts(&[(2, 2)]));
}

#[test]
fn ties_pick_lexicographically_smallest() {
    let hull = compute_hull(&pts(&[(10, 0), (7, -5), (5, 2), (3, -5), (0, 0)])).unwrap();
    assert_eq!(hull.vertices, pts(&[(0, 0), (3, -5), (7, -5), (10, 0), (5, 2)]));
}

#[test]
fn x_ties_choose_extremes_by_y() {
    // Two points share the minimal x; the lower one is A.
    let hull = compute_hull(&pts(&[(0, 4), (0, 1), (3, 2), (6, 2)])).unwrap();
    assert_eq!(hull.vertices[0], Point2::new(0, 1));
    assert!(hull.contains_vertex(&Point2::new(6, 2)));
    assert!(hull.contains_vertex(&Point2::new(0, 4)));
    assert!(!hull.contains_vertex(&Point2::new(3, 2)));
}

#[test]
fn negative_zero_does_not_split_an_edge() {
    // (-0.0, 3) lies on the edge from (0, 1) to (0, 5); it must not become A.
    let signed = vec![
        Point2::new(0.0, 1.0),
        Point2::new(-0.0, 3.0),
        Point2::new(0.0, 5.0),
        Point2::new(10.0, 3.0),
    ];
    let plain: Vec<Point2<f64>> = signed.iter().map(|p| Point2::new(p.x + 0.0, p.y)).collect();
    let hull = compute_hull(&signed).unwrap();
    assert_eq!(hull.len(), 3);
    assert_eq!(hull.vertices, compute_hull(&plain).unwrap().vertices);
    assert_eq!(hull.vertices[0], Point2::new(0.0, 1.0));
}

#[test]
fn float_square_matches_integer_result() {
    let input = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 10.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(5.0, 5.0),
        Point2::new(2.5, 7.5),
    ];
    let hull = compute_hull(&input).unwrap();
    assert_eq!(
        hull.vertices,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    );
}

#[test]
fn invalid_coordinates_report_index() {
    let nan = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.5, f64::NAN),
    ];
    assert_eq!(compute_hull(&nan), Err(HullError::NonFiniteCoordinate { index: 2 }));

    let huge = vec![Point2::new(0.0, 0.0), Point2::new(1e200, 0.0), Point2::new(0.0, 1.0)];
    assert_eq!(compute_hull(&huge), Err(HullError::CoordinateRangeExceeded { index: 1 }));

    let wide = vec![Point2::new(0i64, 0), Point2::new(1, 1), Point2::new(I64_COORD_MAX + 1, 0)];
    let err = compute_hull(&wide).unwrap_err();
    assert_eq!(err, HullError::CoordinateRangeExceeded { index: 2 });
    assert!(err.to_string().contains("point 2"));
}

#[test]
fn i64_range_limit_square() {
    let m = I64_COORD_MAX;
    let input = vec![
        Point2::new(-m, -m),
        Point2::new(m, -m),
        Point2::new(m, m),
        Point2::new(-m, m),
        Point2::new(0, 0),
    ];
    let hull = compute_hull(&input).unwrap();
    assert_eq!(hull.len(), 4);
    assert!(!hull.contains_vertex(&Point2::new(0, 0)));
}

#[test]
fn parabola_points_are_all_vertices() {
    // Strictly convex chain: every point is a hull vertex and all lie right of A→B.
    let input: Vec<Point2<i32>> = (0..4000).map(|x| Point2::new(x, x * x)).collect();
    for strategy in [Strategy::Recursive, Strategy::ExplicitStack] {
        let hull = HullEngine::new(HullCfg { strategy }).compute_hull(&input).unwrap();
        assert_eq!(hull.len(), input.len());
        assert_eq!(hull.vertices[0], Point2::new(0, 0));
        assert_eq!(hull.vertices[hull.len() - 1], Point2::new(3999, 3999 * 3999));
    }
}

#[test]
fn strategies_agree_on_random_clouds() {
    let rec = HullEngine::with_strategy(Strategy::Recursive);
    let stack = HullEngine::with_strategy(Strategy::ExplicitStack);
    let mut tok = ReplayToken::new(2024, 0);
    for _ in 0..20 {
        let grid = uniform_grid_points(2_000, 0, 1000, tok).unwrap();
        assert_eq!(rec.compute_hull(&grid).unwrap(), stack.compute_hull(&grid).unwrap());
        let cloud = uniform_box_points(2_000, -1.0, 1.0, tok).unwrap();
        let h = stack.compute_hull(&cloud).unwrap();
        assert_eq!(rec.compute_hull(&cloud).unwrap(), h);
        assert!(h.iter().all(|v| cloud.contains(v)));
        tok = tok.next();
    }
}

#[test]
fn default_engine_uses_explicit_stack() {
    assert_eq!(HullEngine::default().cfg().strategy, Strategy::ExplicitStack);
}

#[test]
fn hull_encloses_and_orders() {
    let hull = compute_hull(&pts(&[(0, 0), (0, 10), (10, 0), (10, 10), (5, 5)])).unwrap();
    assert!(hull.encloses(&Point2::new(5, 5)));
    assert!(hull.encloses(&Point2::new(10, 5)));
    assert!(hull.encloses(&Point2::new(0, 0)));
    assert!(!hull.encloses(&Point2::new(11, 5)));
    let ring = hull.ordered(Winding::CounterClockwise);
    assert_eq!(ring.len(), 4);
    assert!(super::signed_area(&ring) > 0.0);

    let segment = Hull::from_vertices(pts(&[(0, 0), (4, 4)]));
    assert!(segment.encloses(&Point2::new(2, 2)));
    assert!(!segment.encloses(&Point2::new(5, 5)));
    assert!(!segment.encloses(&Point2::new(2, 3)));
    assert!(!Hull::<i32>::from_vertices(Vec::new()).encloses(&Point2::new(0, 0)));
}

#[test]
fn same_vertex_set_ignores_order_and_multiplicity() {
    let a = Hull::from_vertices(pts(&[(0, 0), (1, 0), (0, 1)]));
    let b = Hull::from_vertices(pts(&[(0, 1), (0, 0), (1, 0), (0, 0)]));
    let c = Hull::from_vertices(pts(&[(0, 1), (0, 0)]));
    assert!(a.same_vertex_set(&b));
    assert!(!a.same_vertex_set(&c));
}

fn point_sets(span: i32, max_len: usize) -> impl PropStrategy<Value = Vec<Point2<i32>>> {
    prop::collection::vec((-span..=span, -span..=span), 0..max_len)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Point2::new(x, y)).collect())
}

proptest! {
    #[test]
    fn prop_vertices_come_from_input(input in point_sets(1000, 120)) {
        let hull = compute_hull(&input).unwrap();
        for v in hull.iter() {
            prop_assert!(input.contains(v));
        }
    }

    #[test]
    fn prop_no_point_outside(input in point_sets(1000, 120)) {
        prop_assume!(input.len() >= 3);
        let hull = compute_hull(&input).unwrap();
        for p in &input {
            prop_assert!(hull.encloses(p), "point {:?} outside hull {:?}", p, hull.vertices);
        }
    }

    #[test]
    fn prop_small_inputs_unchanged(input in point_sets(50, 3)) {
        let hull = compute_hull(&input).unwrap();
        prop_assert_eq!(hull.vertices, input);
    }

    #[test]
    fn prop_idempotent_vertex_set(input in point_sets(20, 80)) {
        let once = compute_hull(&input).unwrap();
        let twice = compute_hull(&once.vertices).unwrap();
        prop_assert!(once.same_vertex_set(&twice));
    }

    #[test]
    fn prop_matches_monotone_chain(input in point_sets(20, 80)) {
        prop_assume!(input.len() >= 3);
        let hull = compute_hull(&input).unwrap();
        prop_assert_eq!(hull.distinct_vertices(), Hull::from_vertices(monotone_chain(&input)).distinct_vertices());
    }

    #[test]
    fn prop_extremes_lead_and_split(input in point_sets(1000, 120)) {
        prop_assume!(input.len() >= 3);
        let hull = compute_hull(&input).unwrap();
        let mut sorted = input.clone();
        sorted.sort_by(lex_cmp);
        let a = sorted[0];
        let b = sorted[sorted.len() - 1];
        prop_assert_eq!(hull.vertices[0], a);
        prop_assert!(hull.contains_vertex(&b));
        // Everything before B is strictly right of A→B, everything after strictly left.
        let bi = hull.vertices.iter().rposition(|v| *v == b).unwrap_or(0);
        for v in &hull.vertices[1..bi] {
            prop_assert!(cross(&a, &b, v) < 0);
        }
        for v in &hull.vertices[bi + 1..] {
            prop_assert!(cross(&a, &b, v) > 0);
        }
    }

    #[test]
    fn prop_strategies_identical(input in point_sets(1000, 120)) {
        let rec = HullEngine::with_strategy(Strategy::Recursive).compute_hull(&input).unwrap();
        let stack = HullEngine::with_strategy(Strategy::ExplicitStack).compute_hull(&input).unwrap();
        prop_assert_eq!(rec, stack);
    }
}
