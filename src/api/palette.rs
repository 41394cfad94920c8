//! Default color tables used when inference has to invent a range.

use crate::core::Value;

/// Distinct hues for unordered categories (ordinal scales).
pub const CATEGORICAL_COLORS: [&str; 10] = [
    "#5b8ff9", "#5ad8a6", "#5d7092", "#f6bd16", "#6f5ef9", "#6dc8ec", "#945fb9", "#ff9845",
    "#1e9493", "#ff99c3",
];

/// Light-to-dark ramp for ordered buckets (quantile, quantize, threshold) and
/// continuous color channels.
pub const ORDINAL_COLORS: [&str; 9] = [
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603",
    "#7f2704",
];

#[must_use]
pub fn palette(colors: &[&str]) -> Vec<Value> {
    colors.iter().map(|color| Value::from(*color)).collect()
}

/// First and last entries of the ordinal ramp, for continuous color scales.
#[must_use]
pub fn ordinal_ramp_endpoints() -> Vec<Value> {
    vec![
        Value::from(ORDINAL_COLORS[0]),
        Value::from(ORDINAL_COLORS[ORDINAL_COLORS.len() - 1]),
    ]
}
