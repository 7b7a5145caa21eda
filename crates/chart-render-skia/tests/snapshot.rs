// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_geometry::{BarLayout, BarSeries, Chart, Color, CurveType, DataPoint, LineSeries};
use chart_render_skia::{RenderExt, RenderOptions};

fn opts() -> RenderOptions {
    // avoid text nondeterminism across platforms
    RenderOptions { width: 480, height: 320, draw_labels: false, ..RenderOptions::default() }
}

fn stacked_bytes() -> Vec<u8> {
    let keys = ["q1", "q2", "q3", "q4"];
    let mk = |vals: [f32; 4], color| {
        BarSeries::new(keys.iter().zip(vals).map(|(k, v)| DataPoint::new(*k, v)).collect(), "s")
            .with_color(color)
            .with_width(30.0)
            .with_radius(8.0)
    };
    Chart::bar(
        vec![
            mk([3.0, 5.0, 2.0, 6.0], Color::from_rgb(200, 60, 60)),
            mk([2.0, 1.0, 4.0, 2.0], Color::from_rgb(60, 120, 200)),
        ],
        BarLayout::VerticalStacked,
    )
    .render_to_png_bytes(&opts())
    .expect("render stacked bars")
}

fn smooth_line_bytes() -> Vec<u8> {
    let data = [50.0, 350.0, 250.0, 200.0, 800.0, 600.0, 400.0]
        .into_iter()
        .enumerate()
        .map(|(i, v)| DataPoint::new(i, v))
        .collect();
    Chart::line(vec![LineSeries::new(data, "l").with_curve(CurveType::Smooth).with_markers(None)])
        .render_to_png_bytes(&opts())
        .expect("render smooth line")
}

fn check(name: &str, bytes: Vec<u8>) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_stacked_bars() {
    check("stacked_bars.png", stacked_bytes());
}

#[test]
fn golden_smooth_line() {
    check("smooth_line.png", smooth_line_bytes());
}
