//! Normalization Utilities
//!
//! Maps integer score columns onto [0, 1] for heat-map shading, bar colour
//! intensity, and the shared radial axis of the radar chart.

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

/// Min-max normalize a column
///
/// Algorithm:
/// 1. Find min and max of the column
/// 2. intensity = (value - min) / (max - min)
/// 3. A constant column maps every cell to 0.0
pub fn min_max_normalize(values: &[i64]) -> Vec<f64> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };

    if max == min {
        return vec![0.0; values.len()];
    }

    let span = (max - min) as f64;
    values
        .iter()
        .map(|&v| (v - min) as f64 / span)
        .collect()
}

/// Scale a value onto a radial axis shared by every trace
///
/// Returns `value / axis_max`, or 0.0 when the axis maximum is not positive.
pub fn shared_max_normalize(value: i64, axis_max: i64) -> f64 {
    if axis_max <= 0 {
        return 0.0;
    }
    value as f64 / axis_max as f64
}
