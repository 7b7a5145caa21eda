// File: crates/demo/src/main.rs
// Summary: Demo loads daily spend/budget CSV (or built-in sample data) and renders bar, line, pie and doughnut charts to PNGs.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_geometry::{
    BarLayout, BarSeries, Chart, ChartConfig, CurveType, DataPoint, LegendPosition, LegendShape, Legend, LineSeries,
    PieSeries, PieStyle, Theme,
};
use chart_geometry::style::FontStyle;
use chart_render_skia::{RenderExt, RenderOptions};
use chrono::{Duration, NaiveDate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Calendar day shown as "Jan 05" on the key axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Day(NaiveDate);

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%b %d"))
    }
}

#[derive(Clone, Debug)]
struct Row {
    day: Day,
    category: String,
    spent: f32,
    budget: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let rows = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            tracing::info!("no CSV given, using built-in sample data");
            sample_rows()?
        }
    };
    if rows.is_empty() {
        anyhow::bail!("no rows loaded; expected columns date,category,spent,budget");
    }
    tracing::info!(rows = rows.len(), "loaded data");

    let theme = Theme::light();
    let opts = RenderOptions { background: theme.background, ..RenderOptions::default() };
    let out_dir = PathBuf::from("target/out");

    let spent: Vec<DataPoint<Day>> = rows.iter().map(|r| DataPoint::new(r.day, r.spent)).collect();
    let budget: Vec<DataPoint<Day>> = rows.iter().map(|r| DataPoint::new(r.day, r.budget)).collect();

    // 1) Bars in every layout
    for (layout, name) in [
        (BarLayout::Vertical, "bars_vertical"),
        (BarLayout::VerticalStacked, "bars_vertical_stacked"),
        (BarLayout::Horizontal, "bars_horizontal"),
        (BarLayout::HorizontalStacked, "bars_horizontal_stacked"),
    ] {
        let series = vec![
            BarSeries::new(spent.clone(), Legend::new("Spent").with_shape(LegendShape::Rectangle))
                .with_color(theme.series_color(0))
                .with_radius(8.0),
            BarSeries::new(budget.clone(), Legend::new("Budget").with_shape(LegendShape::Rectangle))
                .with_color(theme.series_color(1))
                .with_radius(8.0),
        ];
        let config = ChartConfig::themed(&theme)
            .with_title("Daily spending")
            .with_axis_names("Day", "Amount")
            .with_legend(LegendPosition::Bottom);
        write(&Chart::bar(series, layout).with_config(config), &opts, &out_dir, name)?;
    }

    // 2) Lines in every curve type
    for (curve, name) in [
        (CurveType::Straight, "line_straight"),
        (CurveType::Smooth, "line_smooth"),
        (CurveType::Area { smooth: false }, "area"),
        (CurveType::Area { smooth: true }, "area_smooth"),
    ] {
        let series = vec![
            LineSeries::new(spent.clone(), "Spent")
                .with_curve(curve)
                .with_colors(vec![theme.series_color(0), theme.series_color(2)])
                .with_markers(None),
            LineSeries::new(budget.clone(), "Budget").with_curve(curve).with_color(theme.series_color(1)),
        ];
        let config = ChartConfig::themed(&theme).with_title("Spent vs budget").with_legend(LegendPosition::TopRight);
        write(&Chart::line(series).with_config(config), &opts, &out_dir, name)?;
    }

    // 3) Spending share per category
    let totals = category_totals(&rows);
    for (style, name) in [(PieStyle::Pie, "pie"), (PieStyle::Doughnut { hole: theme.background }, "doughnut")] {
        let series: Vec<PieSeries<String>> = totals
            .iter()
            .enumerate()
            .map(|(i, (cat, total))| {
                PieSeries::new(DataPoint::new(cat.clone(), *total), cat.as_str()).with_color(theme.series_color(i))
            })
            .collect();
        let mut config = ChartConfig::themed(&theme).with_title("Where it went").with_legend(LegendPosition::Right);
        config.pie_labels = Some(FontStyle::new(22.0).with_color(theme.axis_label).bold());
        write(&Chart::pie(series, style).with_config(config), &opts, &out_dir, name)?;
    }

    Ok(())
}

fn write<K>(chart: &Chart<K>, opts: &RenderOptions, dir: &Path, name: &str) -> Result<()>
where
    K: PartialEq + Clone + fmt::Display,
{
    let out = dir.join(format!("chart_{name}.png"));
    chart.render_to_png(opts, &out).with_context(|| format!("rendering {name}"))?;
    tracing::info!(path = %out.display(), "wrote chart");
    Ok(())
}

/// Load `date,category,spent,budget` rows; dates are `YYYY-MM-DD`.
fn load_csv(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing column '{name}'"))
    };
    let (i_date, i_cat, i_spent, i_budget) = (column("date")?, column("category")?, column("spent")?, column("budget")?);

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or_default();
        let day = NaiveDate::parse_from_str(field(i_date), "%Y-%m-%d");
        let (spent, budget) = (field(i_spent).parse::<f32>(), field(i_budget).parse::<f32>());
        match (day, spent, budget) {
            (Ok(day), Ok(spent), Ok(budget)) => out.push(Row {
                day: Day(day),
                category: field(i_cat).to_string(),
                spent: spent.max(0.0),
                budget: budget.max(0.0),
            }),
            _ => tracing::warn!(line = line + 2, "skipping malformed row"),
        }
    }
    Ok(out)
}

fn sample_rows() -> Result<Vec<Row>> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).context("invalid sample start date")?;
    let spent = [50.0, 350.0, 250.0, 200.0, 800.0, 600.0, 400.0];
    let categories = ["food", "rent", "travel", "food", "travel", "misc", "food"];
    Ok(spent
        .iter()
        .zip(categories)
        .enumerate()
        .map(|(i, (s, c))| Row {
            day: Day(start + Duration::days(i as i64)),
            category: c.to_string(),
            spent: *s,
            budget: 400.0,
        })
        .collect())
}

/// Spent per category, in first-seen order.
fn category_totals(rows: &[Row]) -> Vec<(String, f32)> {
    let mut totals: Vec<(String, f32)> = Vec::new();
    for r in rows {
        match totals.iter_mut().find(|(c, _)| *c == r.category) {
            Some((_, t)) => *t += r.spent,
            None => totals.push((r.category.clone(), r.spent)),
        }
    }
    totals
}
