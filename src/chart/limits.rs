use crate::error::{ChartError, Result};

/// Data bounds of the active subset, used to build the axis scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Minimum and maximum of `values`, skipping NaN. `None` when nothing is left.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Compute x and y bounds over two sequences.
pub fn find_min_max(x: &[f64], y: &[f64]) -> Result<AxisLimits> {
    let (x_min, x_max) =
        extent(x.iter().copied()).ok_or(ChartError::EmptySeries { axis: "x" })?;
    let (y_min, y_max) =
        extent(y.iter().copied()).ok_or(ChartError::EmptySeries { axis: "y" })?;
    Ok(AxisLimits {
        x_min,
        x_max,
        y_min,
        y_max,
    })
}
