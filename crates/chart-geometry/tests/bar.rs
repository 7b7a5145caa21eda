// File: crates/chart-geometry/tests/bar.rs
// Purpose: Grouped offsets, stacking accumulation, corner rounding and degenerate bar charts.

use chart_geometry::bar::{bar_scale, group_offset};
use chart_geometry::{
    draw_bar_chart, layout_bars, AxisStyle, BarLayout, BarSeries, BarShape, BarStyle, ChartError, DataPoint, GridStyle, KeySet,
    Orientation,
    PaintStyle, Point, Primitive, Recorder, Size,
};

const SIZE: Size = Size::new(600.0, 400.0);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn series(points: &[(&'static str, f32)]) -> BarSeries<&'static str> {
    let data = points.iter().map(|(k, v)| DataPoint::new(*k, *v)).collect();
    BarSeries::new(data, "s").with_width(20.0)
}

fn stacked_three() -> Vec<BarSeries<&'static str>> {
    vec![
        series(&[("a", 10.0), ("b", 20.0), ("c", 30.0)]).with_radius(8.0),
        series(&[("a", 5.0), ("b", 50.0)]).with_radius(8.0),
        series(&[("a", 20.0), ("c", 10.0)]).with_radius(8.0),
    ]
}

fn layout(series: &[BarSeries<&'static str>], layout: BarLayout) -> Vec<BarShape> {
    let keys = KeySet::merged(series);
    let scale = bar_scale(series, layout, SIZE, &keys).unwrap();
    layout_bars(series, layout, &scale, &keys)
}

#[test]
fn group_offsets_center_the_group() {
    assert_eq!(group_offset(0, 1, 20.0), -10.0);
    assert_eq!(group_offset(0, 2, 20.0), -20.0);
    assert_eq!(group_offset(1, 2, 20.0), 0.0);
    assert_eq!(group_offset(0, 3, 20.0), -30.0);
    assert_eq!(group_offset(1, 3, 20.0), -10.0);
    assert_eq!(group_offset(2, 3, 20.0), 10.0);
}

#[test]
fn stacked_heights_sum_to_key_totals() {
    let s = stacked_three();
    let shapes = layout(&s, BarLayout::VerticalStacked);
    // maxVal is the sum of per-series maxima: 30 + 50 + 20.
    let max_val = 100.0;
    for (ki, total) in [35.0f32, 70.0, 40.0].into_iter().enumerate() {
        let sum: f32 = shapes.iter().filter(|b| b.key_index == ki).map(|b| b.length(Orientation::Vertical)).sum();
        assert!(approx(sum, total / max_val * SIZE.height), "key {ki}: {sum}");
    }
}

#[test]
fn stacked_segments_are_contiguous() {
    let s = stacked_three();
    let shapes = layout(&s, BarLayout::VerticalStacked);
    let at_a: Vec<&BarShape> = shapes.iter().filter(|b| b.key_index == 0).collect();
    assert_eq!(at_a.len(), 3);
    assert_eq!(at_a[0].rect.bottom, SIZE.height);
    assert!(approx(at_a[1].rect.bottom, at_a[0].rect.top));
    assert!(approx(at_a[2].rect.bottom, at_a[1].rect.top));
}

#[test]
fn stacked_rounding_only_on_outer_ends() {
    let s = stacked_three();
    let shapes = layout(&s, BarLayout::VerticalStacked);
    let at_a: Vec<&BarShape> = shapes.iter().filter(|b| b.key_index == 0).collect();

    assert_eq!(at_a[0].corners.bottom_left, 8.0);
    assert_eq!(at_a[0].corners.bottom_right, 8.0);
    assert_eq!(at_a[0].corners.top_left, 0.0);
    assert!(at_a[1].corners.is_square());
    assert_eq!(at_a[2].corners.top_left, 8.0);
    assert_eq!(at_a[2].corners.top_right, 8.0);
    assert_eq!(at_a[2].corners.bottom_left, 0.0);
}

#[test]
fn grouped_bars_sit_side_by_side() {
    let s = vec![series(&[("a", 10.0)]), series(&[("a", 20.0)])];
    let shapes = layout(&s, BarLayout::Vertical);
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].rect.right, shapes[1].rect.left);
    // Grouped charts scale to the largest value.
    assert_eq!(shapes[1].rect.top, 0.0);
    assert!(approx(shapes[0].rect.height(), 200.0));
}

#[test]
fn grouped_bars_round_top_corners_only() {
    let s = vec![series(&[("a", 10.0), ("b", 0.1)]).with_radius(50.0)];
    let shapes = layout(&s, BarLayout::Vertical);
    // Radius is capped at half the bar width.
    assert_eq!(shapes[0].corners.top_left, 10.0);
    assert_eq!(shapes[0].corners.bottom_left, 0.0);
    // And at the bar length for short bars.
    assert!(approx(shapes[1].corners.top_right, 4.0));
}

#[test]
fn single_point_renders_one_full_bar() {
    let s = vec![series(&[("only", 7.0)])];
    let mut rec = Recorder::new();
    draw_bar_chart(&mut rec, &s, BarLayout::Vertical, SIZE, &AxisStyle::default(), &GridStyle::default()).unwrap();

    let rects: Vec<&Primitive> = rec.primitives.iter().filter(|p| matches!(p, Primitive::Rect { .. })).collect();
    assert_eq!(rects.len(), 1);
    // One key: gap = 600 - 20 px of padding.
    assert_eq!(
        *rects[0],
        Primitive::Rect {
            top_left: Point::new(570.0, 0.0),
            size: Size::new(20.0, 400.0),
            color: s[0].colors[0],
            style: PaintStyle::Fill,
        }
    );
}

#[test]
fn horizontal_bars_grow_from_the_left_edge() {
    let s = vec![series(&[("a", 50.0), ("b", 100.0)]).with_radius(6.0)];
    let shapes = layout(&s, BarLayout::Horizontal);
    let a = &shapes[0];
    assert_eq!(a.rect.left, 0.0);
    assert!(approx(a.rect.right, 300.0));
    // (400 - 20) / 2 per key, key 0 nearest the X axis.
    assert!(approx(a.rect.top, 200.0));
    assert!(approx(a.rect.bottom, 220.0));
    assert_eq!(a.corners.top_right, 6.0);
    assert_eq!(a.corners.bottom_right, 6.0);
    assert_eq!(a.corners.top_left, 0.0);
    assert!(shapes[1].rect.top < a.rect.top);
}

#[test]
fn horizontal_stacked_segments_chain_rightward() {
    let s = stacked_three();
    let shapes = layout(&s, BarLayout::HorizontalStacked);
    let at_a: Vec<&BarShape> = shapes.iter().filter(|b| b.key_index == 0).collect();
    assert_eq!(at_a[0].rect.left, 0.0);
    assert!(approx(at_a[1].rect.left, at_a[0].rect.right));
    assert!(approx(at_a[2].rect.right, 35.0 / 100.0 * SIZE.width));
    assert_eq!(at_a[0].corners.top_left, 8.0);
    assert_eq!(at_a[2].corners.top_right, 8.0);
}

#[test]
fn outlined_bars_stroke() {
    let s = vec![series(&[("a", 1.0)]).with_style(BarStyle::Stroke { width: 2.0 })];
    let mut rec = Recorder::new();
    draw_bar_chart(&mut rec, &s, BarLayout::Vertical, SIZE, &AxisStyle::hidden(), &GridStyle::hidden()).unwrap();
    assert!(matches!(rec.primitives[..], [Primitive::Rect { style: PaintStyle::Stroke(w), .. }] if w == 2.0));
}

#[test]
fn degenerate_inputs_do_not_fail() {
    let mut rec = Recorder::new();
    let empty: Vec<BarSeries<&str>> = Vec::new();
    draw_bar_chart(&mut rec, &empty, BarLayout::VerticalStacked, SIZE, &AxisStyle::default(), &GridStyle::default())
        .unwrap();
    assert!(rec.primitives.is_empty());

    let zeros = vec![series(&[("a", 0.0), ("b", 0.0)])];
    draw_bar_chart(&mut rec, &zeros, BarLayout::Vertical, SIZE, &AxisStyle::default(), &GridStyle::default())
        .unwrap();
    assert!(!rec.primitives.is_empty());
}

#[test]
fn horizontal_grouped_bars_stack_along_y() {
    let s = vec![series(&[("a", 10.0)]), series(&[("a", 20.0)]), series(&[("a", 30.0)])];
    let shapes = layout(&s, BarLayout::Horizontal);
    assert_eq!(shapes.len(), 3);
    // Three columns pad (3 / 2 + 1) * 20 = 40 px, so the lone row centers at 400 - 360.
    let tops: Vec<f32> = shapes.iter().map(|b| b.rect.top).collect();
    assert_eq!(tops, vec![10.0, 30.0, 50.0]);
    assert_eq!(shapes[0].rect.bottom, shapes[1].rect.top);
    assert_eq!(shapes[1].rect.bottom, shapes[2].rect.top);
    for (b, want) in shapes.iter().zip([200.0, 400.0, 600.0]) {
        assert_eq!(b.rect.left, 0.0);
        assert!(approx(b.rect.right, want), "{:?}", b.rect);
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "outside the merged key set")]
fn key_missing_from_key_set_asserts() {
    let known = vec![series(&[("a", 1.0)])];
    let keys = KeySet::merged(&known);
    let stray = vec![series(&[("a", 1.0), ("zzz", 2.0)])];
    let scale = bar_scale(&stray, BarLayout::Vertical, SIZE, &keys).unwrap();
    layout_bars(&stray, BarLayout::Vertical, &scale, &keys);
}

#[test]
fn bad_values_are_rejected() {
    for bad in [f32::NAN, f32::INFINITY, -5.0] {
        for layout in [BarLayout::Vertical, BarLayout::HorizontalStacked] {
            let s = vec![series(&[("a", 10.0), ("b", bad)])];
            let mut rec = Recorder::new();
            let err = draw_bar_chart(&mut rec, &s, layout, SIZE, &AxisStyle::default(), &GridStyle::default());
            assert!(matches!(err, Err(ChartError::InvalidRange(_))), "{bad} {layout:?}: {err:?}");
            assert!(rec.primitives.is_empty());
        }
    }
}
