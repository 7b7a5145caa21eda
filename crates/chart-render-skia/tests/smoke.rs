// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNGs for every chart kind.

use chart_geometry::{
    BarLayout, BarSeries, Chart, ChartConfig, Color, CurveType, DataPoint, LegendPosition, LineSeries, PieSeries,
    PieStyle,
};
use chart_render_skia::{RenderExt, RenderOptions};

fn points() -> Vec<DataPoint<&'static str>> {
    vec![DataPoint::new("a", 3.0), DataPoint::new("b", 7.0), DataPoint::new("c", 5.0)]
}

#[test]
fn render_smoke_png() {
    let chart = Chart::line(vec![LineSeries::new(points(), "line")
        .with_curve(CurveType::Area { smooth: true })
        .with_colors(vec![Color::from_rgb(255, 0, 0), Color::from_rgb(0, 0, 255)])
        .with_markers(None)])
    .with_config(ChartConfig::default().with_title("Smoke").with_legend(LegendPosition::TopRight));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn bar_and_pie_render() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    for layout in [BarLayout::Vertical, BarLayout::VerticalStacked, BarLayout::Horizontal, BarLayout::HorizontalStacked] {
        let chart = Chart::bar(
            vec![
                BarSeries::new(points(), "x").with_radius(5.0),
                BarSeries::new(points(), "y").with_color(Color::GREEN),
            ],
            layout,
        );
        let bytes = chart.render_to_png_bytes(&opts).expect("bar render");
        assert!(bytes.starts_with(&[137, 80, 78, 71]));
    }

    let pie = Chart::pie(
        points().into_iter().map(|p| PieSeries::new(p, "slice")).collect(),
        PieStyle::Doughnut { hole: Color::WHITE },
    );
    assert!(pie.render_to_png_bytes(&opts).is_ok());
}

#[test]
fn layout_errors_surface_as_render_errors() {
    let pie = Chart::pie(vec![PieSeries::new(DataPoint::new("zero", 0.0), "zero")], PieStyle::Pie);
    let err = pie.render_to_png_bytes(&RenderOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("sum"), "{err:#}");
}
