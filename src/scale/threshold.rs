//! Discretizing scales: threshold, and the quantile/quantize scales that
//! compute their cut points and delegate lookup to a threshold scale.

use crate::core::Value;

use super::numeric::{bisect_right, quantile_sorted, round};

/// Buckets a continuous input by ascending cut points.
///
/// With `n` cut points there are `n + 1` buckets. A value equal to a cut point
/// falls into the bucket above it, and anything at or past the last cut point
/// lands in the final bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    thresholds: Vec<f64>,
    range: Vec<Value>,
}

impl ThresholdScale {
    /// Keeps at most `range.len() - 1` cut points and sorts them ascending.
    #[must_use]
    pub fn new(mut thresholds: Vec<f64>, range: Vec<Value>) -> Self {
        thresholds.sort_by(f64::total_cmp);
        thresholds.truncate(range.len().saturating_sub(1));
        Self { thresholds, range }
    }

    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    #[must_use]
    pub fn range(&self) -> &[Value] {
        &self.range
    }

    /// Index of the bucket `x` falls into.
    #[must_use]
    pub fn bucket(&self, x: f64) -> usize {
        bisect_right(&self.thresholds, x).min(self.thresholds.len())
    }

    #[must_use]
    pub fn map(&self, x: f64) -> Value {
        if x.is_nan() {
            return Value::Null;
        }
        self.range.get(self.bucket(x)).cloned().unwrap_or_default()
    }
}

/// Cut points by rank: `k - 1` interpolated quantiles of the sorted sample for `k` buckets.
#[must_use]
pub fn quantile_thresholds(sample: &[f64], buckets: usize) -> Vec<f64> {
    let mut sorted: Vec<f64> = sample.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() || buckets < 2 {
        return Vec::new();
    }
    sorted.sort_by(f64::total_cmp);

    let step = (sorted.len() - 1) as f64 / buckets as f64;
    (1..buckets)
        .map(|rank| round(quantile_sorted(&sorted, rank as f64 * step)))
        .collect()
}

/// Cut points by value: `k - 1` evenly spaced points across `[d0, d1]` for `k` buckets.
#[must_use]
pub fn quantize_thresholds(d0: f64, d1: f64, buckets: usize) -> Vec<f64> {
    if buckets < 2 {
        return Vec::new();
    }
    let step = (d1 - d0) / buckets as f64;
    (1..buckets)
        .map(|i| round(d0 + step * i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ThresholdScale, quantile_thresholds, quantize_thresholds};
    use crate::core::Value;

    #[test]
    fn extra_cut_points_are_dropped() {
        let scale = ThresholdScale::new(vec![1.0, 2.0, 3.0], vec!["a".into(), "b".into()]);
        assert_eq!(scale.thresholds(), &[1.0]);
    }

    #[test]
    fn nan_input_maps_to_null() {
        let scale = ThresholdScale::new(vec![1.0], vec!["a".into(), "b".into()]);
        assert_eq!(scale.map(f64::NAN), Value::Null);
    }

    #[test]
    fn quantile_cut_points_follow_rank() {
        // Skewed sample: value spacing would give very different cuts.
        let sample = [1.0, 2.0, 3.0, 4.0, 100.0];
        assert_eq!(quantile_thresholds(&sample, 4), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn quantile_interpolates_between_order_statistics() {
        let sample = [0.0, 10.0];
        assert_eq!(quantile_thresholds(&sample, 4), vec![2.5, 5.0, 7.5]);
    }

    #[test]
    fn quantize_cut_points_start_at_domain_min() {
        assert_eq!(quantize_thresholds(10.0, 50.0, 4), vec![20.0, 30.0, 40.0]);
    }
}
