// File: crates/chart-geometry/src/scale.rs
// Summary: Per-render scale context (key gaps, value mapping) shared by bar and line engines.
//
// A `ChartScale` is built fresh for every render call from that call's series and
// canvas size, and is passed down by reference. Nothing is kept between renders.

use crate::error::Result;
use crate::geometry::{check_scale, data_to_pixel, data_to_pixel_transposed};
use crate::series::DataPoint;
use crate::types::{Point, Size};

/// Which canvas axis carries the keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Keys along X, values along Y.
    Vertical,
    /// Keys along Y, values along X.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    pub size: Size,
    pub orientation: Orientation,
    /// Number of columns on the key axis (merged key set length, at least 1).
    pub key_count: usize,
    /// Longest series length.
    pub max_len: usize,
    /// Value mapped to the full value extent.
    pub max_val: f32,
    /// Space reserved at the far end of the key axis.
    pub key_end_padding: f32,
}

impl ChartScale {
    pub fn new(
        size: Size,
        orientation: Orientation,
        key_count: usize,
        max_len: usize,
        max_val: f32,
        key_end_padding: f32,
    ) -> Result<Self> {
        check_scale(max_val)?;
        Ok(Self {
            size,
            orientation,
            key_count: key_count.max(1),
            max_len: max_len.max(1),
            max_val,
            key_end_padding: key_end_padding.max(0.0),
        })
    }

    /// Largest data value to use as the scale ceiling. All-zero data maps to 1 so an
    /// empty-looking chart still gets axes; negative or non-finite maxima are left for
    /// `new` to reject.
    pub fn value_ceiling(max_val: f32) -> f32 {
        if max_val == 0.0 {
            tracing::debug!("all values are zero, using a unit value axis");
            1.0
        } else {
            max_val
        }
    }

    pub fn key_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.size.width,
            Orientation::Horizontal => self.size.height,
        }
    }

    pub fn value_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.size.height,
            Orientation::Horizontal => self.size.width,
        }
    }

    /// Pixel distance between consecutive key columns.
    pub fn key_gap(&self) -> f32 {
        (self.key_extent() - self.key_end_padding).max(0.0) / self.key_count as f32
    }

    /// Length along the value axis that `value` occupies.
    #[inline]
    pub fn value_length(&self, value: f32) -> f32 {
        value / self.max_val * self.value_extent()
    }

    /// Screen position of a data point at `key_index`.
    ///
    /// Vertical: the top of the value at the key column.
    /// Horizontal: the end of the value along X at the key row (key 0 nearest the X axis).
    pub fn point<K>(&self, key_index: usize, point: &DataPoint<K>) -> Result<Point> {
        match self.orientation {
            Orientation::Vertical => {
                data_to_pixel(key_index, point, self.key_gap(), self.max_val, self.size.height)
            }
            Orientation::Horizontal => {
                let p = data_to_pixel_transposed(
                    key_index,
                    point,
                    self.key_gap(),
                    self.max_val,
                    self.size.width,
                )?;
                Ok(Point::new(self.size.width - p.x, self.size.height - p.y))
            }
        }
    }

    /// Screen coordinate of the key column/row center along the key axis.
    pub fn key_position(&self, key_index: usize) -> f32 {
        let along = (key_index + 1) as f32 * self.key_gap();
        match self.orientation {
            Orientation::Vertical => along,
            Orientation::Horizontal => self.size.height - along,
        }
    }
}
