// File: crates/chart-geometry/src/spline.rs
// Summary: Cubic Bezier control points for smooth lines, carrying slope along one path.

use crate::error::{ChartError, Result};
use crate::types::Point;

/// Default curve smoothness.
pub const DEFAULT_SMOOTHNESS: f32 = 0.3;

/// Control points of one cubic Bezier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    pub first: Point,
    pub second: Point,
}

/// What to do when the neighbours of a point share an X coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Treat the slope as zero (flat tangent).
    #[default]
    Flatten,
    /// Fail with `ChartError::DegenerateGeometry`.
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineOptions {
    pub smoothness: f32,
    pub degenerate: DegeneratePolicy,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self { smoothness: DEFAULT_SMOOTHNESS, degenerate: DegeneratePolicy::Flatten }
    }
}

/// Running state for one path. Create one per series; pass `is_first = true` on the
/// first point to reset it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplineCarry {
    last_dx: f32,
    last_dy: f32,
}

impl SplineCarry {
    pub fn new() -> Self { Self::default() }

    /// Control points for the segment `p0 -> p1`, with `p2` the point after `p1`
    /// (or `p1` again when `p1` is last).
    pub fn control_points(
        &mut self,
        p0: Point,
        p1: Point,
        p2: Point,
        is_first: bool,
        opts: &SplineOptions,
    ) -> Result<ControlPoints> {
        if is_first {
            *self = Self::default();
        }

        let run = p2.x - p0.x;
        let slope = if run == 0.0 {
            match opts.degenerate {
                DegeneratePolicy::Flatten => {
                    tracing::debug!(x = p0.x, "zero-width spline span, flattening tangent");
                    0.0
                }
                DegeneratePolicy::Reject => {
                    return Err(ChartError::DegenerateGeometry(format!(
                        "spline span has zero width at x = {}",
                        p0.x
                    )));
                }
            }
        } else {
            (p2.y - p0.y) / run
        };

        let dx2 = (p2.x - p1.x) * -opts.smoothness;
        let dy2 = dx2 * slope;
        let cp = ControlPoints {
            first: Point::new(p0.x - self.last_dx, p0.y - self.last_dy),
            second: Point::new(p1.x + dx2, p1.y + dy2),
        };
        if !cp.first.is_finite() || !cp.second.is_finite() {
            return Err(ChartError::DegenerateGeometry(format!(
                "non-finite control points between ({}, {}) and ({}, {})",
                p0.x, p0.y, p1.x, p1.y
            )));
        }

        self.last_dx = dx2;
        self.last_dy = dy2;
        Ok(cp)
    }
}
