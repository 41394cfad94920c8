use indexmap::IndexSet;

use crate::core::Value;

use super::numeric::round;

/// Discrete-to-discrete lookup.
///
/// The domain is kept as an insertion-ordered set, so looking up an index is a
/// single hash probe. A range shorter than the domain cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: IndexSet<Value>,
    range: Vec<Value>,
}

impl OrdinalScale {
    /// Duplicate domain entries keep their first position.
    pub fn new<I>(domain: I, range: Vec<Value>) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            domain: domain.into_iter().collect(),
            range,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<Value> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> &[Value] {
        &self.range
    }

    #[must_use]
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.domain.get_index_of(value)
    }

    /// Values outside the domain (and any lookup into an empty range) map to `Null`.
    #[must_use]
    pub fn map(&self, value: &Value) -> Value {
        if self.range.is_empty() {
            return Value::Null;
        }
        self.index_of(value)
            .map_or(Value::Null, |index| {
                self.range[index % self.range.len()].clone()
            })
    }
}

/// Ordinal scale whose range is generated: evenly spaced band starts over `[r0, r1]`.
///
/// `padding` is the fraction of a step left empty between bands and `margin`
/// the number of steps left empty before the first band and after the last.
/// A point (dot) scale is a band scale with `padding = 1`: zero-width bands
/// placed `margin` steps in.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    ordinal: OrdinalScale,
    step: f64,
    band_width: f64,
    padding: f64,
    margin: f64,
}

impl BandScale {
    pub fn new<I>(domain: I, range: (f64, f64), padding: f64, margin: f64) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let domain: IndexSet<Value> = domain.into_iter().collect();
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (margin * 2.0 + n - padding);
        let band_width = step * (1.0 - padding);
        let positions = (0..domain.len())
            .map(|i| Value::Number(round(r0 + margin * step + step * i as f64)))
            .collect();

        Self {
            ordinal: OrdinalScale {
                domain,
                range: positions,
            },
            step,
            band_width,
            padding,
            margin,
        }
    }

    /// Point scale: bands collapsed to their start, centered by `margin`.
    pub fn point<I>(domain: I, range: (f64, f64), margin: f64) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::new(domain, range, 1.0, margin)
    }

    #[must_use]
    pub fn map(&self, value: &Value) -> Value {
        self.ordinal.map(value)
    }

    /// Start of the band for `value`, if it is part of the domain.
    #[must_use]
    pub fn position(&self, value: &Value) -> Option<f64> {
        self.ordinal.map(value).as_f64()
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<Value> {
        self.ordinal.domain()
    }

    /// Generated band starts, in domain order.
    #[must_use]
    pub fn positions(&self) -> &[Value] {
        self.ordinal.range()
    }
}
