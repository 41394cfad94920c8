//! Continuous scales: linear, log and time.
//!
//! Log and time scales are linear scales over a transformed domain (`ln(x)`
//! and epoch milliseconds respectively) and share its collapsed-domain policy.

use chrono::{DateTime, Utc};

use crate::core::Value;
use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};

use super::interpolate::{Rgb, interpolate_color, interpolate_number};
use super::numeric::{self, log_base, normalize, round};

/// Output interval of a continuous scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContinuousRange {
    Number(f64, f64),
    Color(Rgb, Rgb),
}

/// Linear mapping from `[d0, d1]` to a numeric or color range.
///
/// A collapsed domain (`d0 == d1`) maps every input to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: ContinuousRange,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range: ContinuousRange::Number(range.0, range.1),
        }
    }

    #[must_use]
    pub fn with_color_range(domain: (f64, f64), start: Rgb, stop: Rgb) -> Self {
        Self {
            domain,
            range: ContinuousRange::Color(start, stop),
        }
    }

    pub(crate) fn with_range(domain: (f64, f64), range: ContinuousRange) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> ContinuousRange {
        self.range
    }

    fn position(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return 0.0;
        }
        normalize(x, d0, d1)
    }

    /// Numeric output, or `None` when the range holds colors.
    #[must_use]
    pub fn map_f64(&self, x: f64) -> Option<f64> {
        match self.range {
            ContinuousRange::Number(r0, r1) => {
                Some(round(interpolate_number(self.position(x), r0, r1)))
            }
            ContinuousRange::Color(..) => None,
        }
    }

    #[must_use]
    pub fn map(&self, x: f64) -> Value {
        let t = self.position(x);
        match self.range {
            ContinuousRange::Number(r0, r1) => {
                Value::Number(round(interpolate_number(t, r0, r1)))
            }
            ContinuousRange::Color(start, stop) => {
                Value::Text(interpolate_color(t, start, stop).to_hex())
            }
        }
    }

    /// Maps a range value back into the domain. Only numeric ranges invert.
    #[must_use]
    pub fn invert(&self, y: f64) -> Option<f64> {
        let ContinuousRange::Number(r0, r1) = self.range else {
            return None;
        };
        let (d0, d1) = self.domain;
        if r0 == r1 {
            return Some(d0);
        }
        let t = normalize(y, r0, r1);
        Some(round(interpolate_number(t, d0, d1)))
    }

    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        numeric::ticks(self.domain.0, self.domain.1, count)
    }

    /// Extends the domain to tick-step multiples. No-op on a collapsed domain.
    pub fn nice(&mut self, count: usize) {
        self.domain = numeric::nice(self.domain.0, self.domain.1, count);
    }
}

/// Logarithmic scale: the domain and inputs go through `ln` before the linear mapping.
///
/// `base` only drives tick generation and `nice`; the mapping itself does not
/// depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    base: f64,
    linear: LinearScale,
}

impl LogScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64), base: f64) -> Self {
        Self::with_range(domain, ContinuousRange::Number(range.0, range.1), base)
    }

    pub(crate) fn with_range(domain: (f64, f64), range: ContinuousRange, base: f64) -> Self {
        Self {
            domain,
            base,
            linear: LinearScale::with_range((domain.0.ln(), domain.1.ln()), range),
        }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn map_f64(&self, x: f64) -> Option<f64> {
        self.linear.map_f64(x.ln())
    }

    #[must_use]
    pub fn map(&self, x: f64) -> Value {
        self.linear.map(x.ln())
    }

    #[must_use]
    pub fn invert(&self, y: f64) -> Option<f64> {
        self.linear.invert(y).map(|x| round(x.exp()))
    }

    /// Linear ticks in `log_base` space, expanded back with `base^x`.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let lo = round(log_base(d0, self.base));
        let hi = round(log_base(d1, self.base));
        numeric::ticks(lo, hi, count)
            .into_iter()
            .map(|x| round(self.base.powf(x)))
            .collect()
    }

    /// Snaps the endpoints outward to integer powers of `base`.
    pub fn nice(&mut self) {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return;
        }
        let floor = |x: f64| round(self.base.powf(round(log_base(x, self.base)).floor()));
        let ceil = |x: f64| round(self.base.powf(round(log_base(x, self.base)).ceil()));
        let domain = if d0 < d1 {
            (floor(d0), ceil(d1))
        } else {
            (ceil(d0), floor(d1))
        };
        *self = Self::with_range(domain, self.linear.range(), self.base);
    }
}

/// Linear scale over timestamps, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    #[must_use]
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self::from_millis(
            (
                datetime_to_unix_millis(domain.0),
                datetime_to_unix_millis(domain.1),
            ),
            ContinuousRange::Number(range.0, range.1),
        )
    }

    pub(crate) fn from_millis(domain: (f64, f64), range: ContinuousRange) -> Self {
        Self {
            linear: LinearScale::with_range(domain, range),
        }
    }

    /// Domain endpoints as epoch milliseconds.
    #[must_use]
    pub fn domain_millis(&self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn domain(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let (d0, d1) = self.linear.domain();
        Some((unix_millis_to_datetime(d0)?, unix_millis_to_datetime(d1)?))
    }

    #[must_use]
    pub fn map_datetime(&self, time: DateTime<Utc>) -> Value {
        self.linear.map(datetime_to_unix_millis(time))
    }

    #[must_use]
    pub fn map_millis(&self, millis: f64) -> Value {
        self.linear.map(millis)
    }

    #[must_use]
    pub fn invert(&self, y: f64) -> Option<DateTime<Utc>> {
        self.linear.invert(y).and_then(unix_millis_to_datetime)
    }

    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        self.linear
            .ticks(count)
            .into_iter()
            .filter_map(unix_millis_to_datetime)
            .collect()
    }

    pub fn nice(&mut self, count: usize) {
        self.linear.nice(count);
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, LogScale};
    use crate::core::Value;

    #[test]
    fn collapsed_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (10.0, 20.0));
        assert_eq!(scale.map_f64(5.0), Some(10.0));
        assert_eq!(scale.map_f64(100.0), Some(10.0));
        assert_eq!(scale.invert(15.0), Some(5.0));
    }

    #[test]
    fn collapsed_range_inverts_to_domain_start() {
        let scale = LinearScale::new((0.0, 10.0), (3.0, 3.0));
        assert_eq!(scale.invert(3.0), Some(0.0));
    }

    #[test]
    fn linear_extrapolates_outside_domain() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 1.0));
        assert_eq!(scale.map(20.0), Value::Number(2.0));
        assert_eq!(scale.map(-10.0), Value::Number(-1.0));
    }

    #[test]
    fn log_nice_snaps_to_powers_of_base() {
        let mut scale = LogScale::new((3.0, 420.0), (0.0, 1.0), 10.0);
        scale.nice();
        assert_eq!(scale.domain(), (1.0, 1000.0));
        let third = scale.map_f64(10.0).expect("numeric range");
        assert!((third - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn log_ticks_are_powers_of_base() {
        let scale = LogScale::new((1.0, 16.0), (0.0, 1.0), 2.0);
        assert_eq!(scale.ticks(4), vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    }
}
