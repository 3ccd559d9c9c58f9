use crate::geom::{
    CurveError, DEFAULT_SUBDIVISIONS, Point2, Point3, Tolerance, bezier_cubic, bezier_cubic_chain,
    bezier_quadratic, bezier_quadratic_chain, linear_cut, smooth_path, synthesize_control_points,
};

fn assert_f64_slice(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn linear_cut_scalar_sequence() {
    let out = linear_cut(&[0.0, 1.0, 5.0], 2).expect("linear cut");
    assert_f64_slice(&out, &[0.0, 0.5, 1.0, 3.0, 5.0]);
}

#[test]
fn linear_cut_planar_edge() {
    let path = [Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
    let out = linear_cut(&path, 2).expect("linear cut");
    assert_eq!(
        out,
        vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0), Point2::new(10.0, 0.0)]
    );
}

#[test]
fn linear_cut_output_length() {
    let path: Vec<Point3> = (0..4).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
    let out = linear_cut(&path, DEFAULT_SUBDIVISIONS).expect("linear cut");
    assert_eq!(out.len(), DEFAULT_SUBDIVISIONS * 3 + 1);
    assert_eq!(out.first(), path.first());
    assert_eq!(out.last(), path.last());
}

#[test]
fn linear_cut_single_point_passes_through() {
    let out = linear_cut(&[7.0], 4).expect("single point");
    assert_f64_slice(&out, &[7.0]);
}

#[test]
fn linear_cut_rejects_bad_input() {
    assert_eq!(
        linear_cut::<f64>(&[], 2),
        Err(CurveError::NotEnoughPoints { min: 1, count: 0 })
    );
    assert_eq!(
        linear_cut(&[0.0, 1.0], 0),
        Err(CurveError::InvalidSegmentCount { segments: 0 })
    );
}

#[test]
fn bezier_endpoints_are_exact() {
    let p0 = Point3::new(0.1, 0.2, 0.3);
    let p1 = Point3::new(7.0, -3.0, 2.0);
    let p2 = Point3::new(-1.0, 4.0, 9.0);
    let p3 = Point3::new(3.3, 3.3, -0.7);

    assert_eq!(bezier_quadratic(p0, p1, p2, 0.0), p0);
    assert_eq!(bezier_quadratic(p0, p1, p2, 1.0), p2);
    assert_eq!(bezier_cubic(p0, p1, p2, p3, 0.0), p0);
    assert_eq!(bezier_cubic(p0, p1, p2, p3, 1.0), p3);
}

#[test]
fn bezier_midpoints_follow_bernstein_weights() {
    let q = bezier_quadratic(0.0, 4.0, 0.0, 0.5);
    assert!((q - 2.0).abs() < 1e-12);

    let c = bezier_cubic(0.0, 1.0, 2.0, 3.0, 0.5);
    assert!((c - 1.5).abs() < 1e-12);
}

#[test]
fn quadratic_chain_shares_piece_ends() {
    let path = [0.0, 1.0, 2.0, 3.0, 4.0];
    let out = bezier_quadratic_chain(&path, 4).expect("chain");
    assert_eq!(out.len(), 4 * 2 + 1);
    assert!((out[4] - 2.0).abs() < 1e-12);
    assert!((out[8] - 4.0).abs() < 1e-12);
}

#[test]
fn cubic_chain_ignores_incomplete_tail() {
    // Seven points form two cubic pieces; the eighth has no piece.
    let path = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 99.0];
    let out = bezier_cubic_chain(&path, 3).expect("chain");
    assert_eq!(out.len(), 3 * 2 + 1);
    assert!((out[out.len() - 1] - 6.0).abs() < 1e-12);
}

#[test]
fn chain_requires_one_full_piece() {
    assert_eq!(
        bezier_cubic_chain(&[0.0, 1.0, 2.0], 4),
        Err(CurveError::NotEnoughPoints { min: 4, count: 3 })
    );
}

#[test]
fn synthesized_controls_follow_local_chord() {
    let controls = synthesize_control_points(&[0.0, 1.0, 3.0], 1.0).expect("controls");
    assert_f64_slice(&controls, &[0.0, 0.0, -0.5, 1.0, 2.5, 3.0, 3.0]);
}

#[test]
fn synthesized_controls_reject_non_finite_weight() {
    assert_eq!(
        synthesize_control_points(&[0.0, 1.0], f64::NAN),
        Err(CurveError::NonFiniteWeight)
    );
}

#[test]
fn smooth_path_interpolates_input_points() {
    let path = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(10.0, 10.0, 0.0),
        Point3::new(0.0, 10.0, 5.0),
    ];
    let segments = 6;
    let out = smooth_path(&path, 0.5, segments).expect("smooth path");
    assert_eq!(out.len(), segments * (path.len() - 1) + 1);
    for (i, p) in path.iter().enumerate() {
        assert!(
            Tolerance::DEFAULT.approx_eq_point3(out[i * segments], *p),
            "point {i}: expected {p:?}, got {:?}",
            out[i * segments]
        );
    }
}

#[test]
fn smooth_path_with_zero_weight_stays_on_polyline() {
    let path = [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(4.0, 4.0)];
    let out = smooth_path(&path, 0.0, 4).expect("smooth path");
    for p in &out[..=4] {
        assert!(p.y.abs() < 1e-12, "{p:?} left the first edge");
    }
    for p in &out[4..] {
        assert!((p.x - 4.0).abs() < 1e-12, "{p:?} left the second edge");
    }
}
