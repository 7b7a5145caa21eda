// File: crates/chart-geometry/tests/spline.rs
// Purpose: Spline control points, carried slope and degenerate spans.

use chart_geometry::surface::PathCommand;
use chart_geometry::{
    line_path, ChartError, ChartScale, CurveType, DataPoint, DegeneratePolicy, KeySet, LineSeries,
    Orientation, Point, Size, SplineCarry, SplineOptions,
};

fn close(p: Point, x: f32, y: f32) -> bool {
    (p.x - x).abs() < 1e-2 && (p.y - y).abs() < 1e-2
}

fn chain() -> [Point; 5] {
    [
        Point::new(0.0, 601.0),
        Point::new(134.57143, 563.4375),
        Point::new(269.14285, 338.0625),
        Point::new(403.7143, 413.1875),
        Point::new(538.2857, 450.75),
    ]
}

#[test]
fn carried_slope_propagates_along_the_chain() {
    let pts = chain();
    let opts = SplineOptions::default();
    let mut carry = SplineCarry::new();

    let first = carry.control_points(pts[0], pts[1], pts[2], true, &opts).unwrap();
    assert!(close(first.first, 0.0, 601.0), "{:?}", first.first);
    assert!(close(first.second, 94.2, 602.8781), "{:?}", first.second);

    let second = carry.control_points(pts[1], pts[2], pts[3], false, &opts).unwrap();
    assert!(close(second.first, 174.94286, 523.9969), "{:?}", second.first);
    assert!(close(second.second, 228.77142, 360.6), "{:?}", second.second);

    let third = carry.control_points(pts[2], pts[3], pts[4], false, &opts).unwrap();
    assert!(close(third.first, 309.51428, 315.525), "{:?}", third.first);
    assert!(close(third.second, 363.34286, 396.28436), "{:?}", third.second);
}

#[test]
fn first_point_resets_the_carry() {
    let pts = chain();
    let opts = SplineOptions::default();
    let mut carry = SplineCarry::new();
    let fresh = carry.control_points(pts[0], pts[1], pts[2], true, &opts).unwrap();
    carry.control_points(pts[1], pts[2], pts[3], false, &opts).unwrap();
    let again = carry.control_points(pts[0], pts[1], pts[2], true, &opts).unwrap();
    assert_eq!(fresh, again);
}

#[test]
fn zero_width_span_flattens_by_default() {
    let mut carry = SplineCarry::new();
    let p0 = Point::new(10.0, 50.0);
    let p1 = Point::new(20.0, 10.0);
    let p2 = Point::new(10.0, 90.0);
    let cp = carry.control_points(p0, p1, p2, true, &SplineOptions::default()).unwrap();
    assert_eq!(cp.second.y, p1.y);
    assert!(cp.first.is_finite() && cp.second.is_finite());
}

#[test]
fn zero_width_span_can_be_rejected() {
    let opts = SplineOptions { degenerate: DegeneratePolicy::Reject, ..SplineOptions::default() };
    let mut carry = SplineCarry::new();
    let p = Point::new(10.0, 50.0);
    let err = carry.control_points(p, Point::new(20.0, 10.0), p, true, &opts).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateGeometry(_)));
}

#[test]
fn non_finite_input_never_reaches_the_path() {
    let mut carry = SplineCarry::new();
    let res = carry.control_points(
        Point::new(0.0, 0.0),
        Point::new(f32::NAN, 1.0),
        Point::new(2.0, 2.0),
        true,
        &SplineOptions::default(),
    );
    assert!(matches!(res, Err(ChartError::DegenerateGeometry(_))));
}

#[test]
fn smooth_series_path_matches_the_chain() {
    // 942 / 7 keys = 134.57143 px per key; values scale against 800 over 601 px.
    let values = [50.0, 350.0, 250.0, 200.0, 800.0, 600.0, 400.0];
    let data: Vec<DataPoint<usize>> = values.iter().enumerate().map(|(i, v)| DataPoint::new(i, *v)).collect();
    let series = LineSeries::new(data, "spend").with_curve(CurveType::Smooth);
    let keys = KeySet::merged(std::slice::from_ref(&series));
    let scale = ChartScale::new(Size::new(942.0, 601.0), Orientation::Vertical, keys.len(), 7, 800.0, 0.0).unwrap();

    let geom = line_path(0, &series, &scale, &keys, &SplineOptions::default()).unwrap();
    let cmds = geom.stroke.commands();
    assert_eq!(cmds.len(), 8);
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(0.0, 601.0)));
    match cmds[1] {
        PathCommand::CubicTo(c1, c2, end) => {
            assert!(close(c1, 0.0, 601.0));
            assert!(close(c2, 94.2, 602.8781));
            assert!(close(end, 134.57143, 563.4375));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
    match cmds[2] {
        PathCommand::CubicTo(c1, c2, _) => {
            assert!(close(c1, 174.94286, 523.9969));
            assert!(close(c2, 228.77142, 360.6));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
}
