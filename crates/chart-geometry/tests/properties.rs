// File: crates/chart-geometry/tests/properties.rs
// Purpose: Property checks for tick values and sweep angles.

use chart_geometry::{axis_tick_values, sweep_angles};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ticks_ascend_and_end_at_max(max in 0.001f32..1.0e6, count in 2usize..64) {
        let ticks = axis_tick_values(max, count).unwrap();
        prop_assert_eq!(ticks.len(), count);
        prop_assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(*ticks.last().unwrap(), max);
    }

    #[test]
    fn sweeps_cover_the_circle(values in prop::collection::vec(0.01f32..1.0e4, 1..32)) {
        let sweeps = sweep_angles(&values).unwrap();
        prop_assert_eq!(sweeps.len(), values.len());
        let total: f32 = sweeps.iter().sum();
        prop_assert!((total - 360.0).abs() < 0.01, "total = {}", total);
    }
}
