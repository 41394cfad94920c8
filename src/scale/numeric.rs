//! Numeric helpers shared by the continuous and threshold scales.

use std::f64::consts::LN_10;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Requested tick counts above this are clamped.
pub const MAX_TICK_COUNT: usize = 10_000;

const ROUND_FACTOR: f64 = 1e12;
// Above this magnitude `n * 1e12` has no fractional part left to round.
const ROUND_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Rounds to twelve decimal places to hide accumulation error (`0.1 + 0.2`).
///
/// Values too large to carry sub-`1e-12` precision are returned unchanged.
#[must_use]
pub fn round(n: f64) -> f64 {
    let scaled = n * ROUND_FACTOR;
    if !scaled.is_finite() || scaled.abs() >= ROUND_LIMIT {
        return n;
    }
    scaled.round() / ROUND_FACTOR
}

/// Position of `value` within `[start, stop]`, `0` at `start` and `1` at `stop`.
#[must_use]
pub fn normalize(value: f64, start: f64, stop: f64) -> f64 {
    (value - start) / (stop - start)
}

#[must_use]
pub fn log_base(n: f64, base: f64) -> f64 {
    n.ln() / base.ln()
}

/// Picks a step of the form `{1, 2, 5, 10} * 10^k` closest to `|max - min| / count`.
///
/// Returns `0` or a non-finite value when the span or count is degenerate;
/// callers check before using it. `count` is clamped to [`MAX_TICK_COUNT`].
#[must_use]
pub fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    let step0 = (max - min).abs() / count.min(MAX_TICK_COUNT) as f64;
    let mut step1 = 10_f64.powf((step0.ln() / LN_10).floor());
    let error = step0 / step1;
    if error >= E10 {
        step1 *= 10.0;
    } else if error >= E5 {
        step1 *= 5.0;
    } else if error >= E2 {
        step1 *= 2.0;
    }
    step1
}

fn usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

/// Multiples of the tick step inside `[min, max]`.
///
/// The number of ticks only approximates `count`. A descending domain yields
/// descending ticks.
#[must_use]
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![round(min)];
    }

    let reverse = max < min;
    let (lo, hi) = if reverse { (max, min) } else { (min, max) };
    let step = tick_step(lo, hi, count);
    if !usable_step(step) {
        return Vec::new();
    }

    let start = (lo / step).ceil();
    let stop = (hi / step).floor();
    if stop < start {
        return Vec::new();
    }

    let n = (stop - start + 1.0).round() as usize;
    let mut values: Vec<f64> = (0..n).map(|i| round((start + i as f64) * step)).collect();
    if reverse {
        values.reverse();
    }
    values
}

#[must_use]
pub fn floor_to(n: f64, step: f64) -> f64 {
    round(step * (n / step).floor())
}

#[must_use]
pub fn ceil_to(n: f64, step: f64) -> f64 {
    round(step * (n / step).ceil())
}

/// Expands `[d0, d1]` outward to multiples of the tick step.
///
/// Degenerate domains (`d0 == d1`) and unusable steps come back unchanged.
#[must_use]
pub fn nice(d0: f64, d1: f64, count: usize) -> (f64, f64) {
    if d0 == d1 || !d0.is_finite() || !d1.is_finite() {
        return (d0, d1);
    }
    let step = tick_step(d0, d1, count);
    if !usable_step(step) {
        return (d0, d1);
    }
    if d0 < d1 {
        (floor_to(d0, step), ceil_to(d1, step))
    } else {
        (ceil_to(d0, step), floor_to(d1, step))
    }
}

/// Interpolates between the order statistics bracketing fractional rank `i`.
///
/// `sorted` must be ascending; ranks past the end clamp to the largest
/// element. An empty slice yields `NaN`.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], i: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return f64::NAN;
    };
    let i0 = (i.floor().max(0.0) as usize).min(last);
    let i1 = i0 + 1;
    if i1 > last {
        return sorted[last];
    }
    sorted[i0] * (i1 as f64 - i) + sorted[i1] * (i - i0 as f64)
}

/// Index of the first element `>= x` in an ascending slice.
#[must_use]
pub fn bisect_left(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|value| *value < x)
}

/// Index of the first element `> x` in an ascending slice.
#[must_use]
pub fn bisect_right(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|value| *value <= x)
}
