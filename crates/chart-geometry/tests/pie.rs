// File: crates/chart-geometry/tests/pie.rs
// Purpose: Sweep angle partitioning and pie/doughnut drawing order.

use chart_geometry::pie::layout_pie;
use chart_geometry::style::FontStyle;
use chart_geometry::{
    draw_pie_chart, sweep_angles, ChartError, Color, DataPoint, PieSeries, PieStyle, Point, Primitive, Recorder, Size,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn budget() -> Vec<PieSeries<&'static str>> {
    [("rent", 1050.0), ("food", 500.0), ("travel", 2050.0), ("misc", 800.0)]
        .into_iter()
        .map(|(k, v)| PieSeries::new(DataPoint::new(k, v), k).with_color(Color::from_rgb(10, 20, 30)))
        .collect()
}

#[test]
fn sweeps_are_proportional() {
    let got = sweep_angles(&[1050.0, 500.0, 2050.0, 800.0]).unwrap();
    let want = [85.90909, 40.909092, 167.72728, 65.454544];
    for (g, w) in got.iter().zip(want) {
        assert!(approx(*g, w), "{g} vs {w}");
    }
    assert!(approx(got.iter().sum(), 360.0));
}

#[test]
fn sweep_preconditions() {
    assert!(matches!(sweep_angles(&[]), Err(ChartError::InvalidRange(_))));
    assert!(matches!(sweep_angles(&[0.0, 0.0]), Err(ChartError::InvalidRange(_))));
    assert!(matches!(sweep_angles(&[10.0, -4.0]), Err(ChartError::InvalidRange(_))));
    assert!(matches!(sweep_angles(&[10.0, f32::NAN]), Err(ChartError::InvalidRange(_))));
    assert!(matches!(sweep_angles(&[f32::INFINITY]), Err(ChartError::InvalidRange(_))));
    // Zero slices are fine as long as something is positive.
    assert_eq!(sweep_angles(&[0.0, 5.0]).unwrap(), vec![0.0, 360.0]);
}

#[test]
fn slices_start_where_the_previous_ended() {
    let slices = layout_pie(&budget()).unwrap();
    assert_eq!(slices[0].start_angle, 0.0);
    for pair in slices.windows(2) {
        assert!(approx(pair[1].start_angle, pair[0].start_angle + pair[0].sweep_angle));
    }
}

#[test]
fn doughnut_punches_hole_after_arcs() {
    let hole = Color::WHITE;
    let mut rec = Recorder::new();
    draw_pie_chart(&mut rec, &budget(), Size::new(400.0, 400.0), PieStyle::Doughnut { hole }, None).unwrap();

    assert_eq!(rec.primitives.len(), 5);
    assert!(rec.primitives[..4].iter().all(|p| matches!(p, Primitive::Arc { filled: true, .. })));
    assert_eq!(
        rec.primitives[4],
        Primitive::Oval { top_left: Point::new(100.0, 100.0), size: Size::new(200.0, 200.0), color: hole }
    );
}

#[test]
fn empty_pie_is_a_no_op() {
    let mut rec = Recorder::new();
    let none: Vec<PieSeries<&str>> = Vec::new();
    draw_pie_chart(&mut rec, &none, Size::new(400.0, 400.0), PieStyle::Pie, None).unwrap();
    assert!(rec.primitives.is_empty());
}

#[test]
fn labels_sit_on_the_mid_angle() {
    let series = vec![PieSeries::new(DataPoint::new("all", 42.0), "all")];
    let mut rec = Recorder::new();
    let font = FontStyle::new(20.0);
    draw_pie_chart(&mut rec, &series, Size::new(200.0, 200.0), PieStyle::Pie, Some(&font)).unwrap();
    match &rec.primitives[1] {
        Primitive::Text { text, position, .. } => {
            assert_eq!(text, "42");
            // Mid-angle 180 degrees: left of center at 0.6 of the radius.
            assert!(approx(position.x, 40.0), "{position:?}");
            assert!(approx(position.y, 110.0), "{position:?}");
        }
        other => panic!("expected label, got {other:?}"),
    }
}
