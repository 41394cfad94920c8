//! Scale kinds and their instantiation from declarative specs.

pub mod continuous;
pub mod discrete;
pub mod interpolate;
pub mod numeric;
pub mod threshold;

use std::f64::consts::E;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Value;
use crate::error::{ChartError, ChartResult};

pub use continuous::{ContinuousRange, LinearScale, LogScale, TimeScale};
pub use discrete::{BandScale, OrdinalScale};
pub use interpolate::{Interpolate, Rgb};
pub use threshold::ThresholdScale;

/// Tick count used when a caller does not ask for a specific density.
pub const DEFAULT_TICK_COUNT: usize = 10;
pub const DEFAULT_BAND_PADDING: f64 = 0.1;
pub const DEFAULT_DOT_MARGIN: f64 = 0.5;
pub const DEFAULT_LOG_BASE: f64 = E;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    Log,
    Time,
    Ordinal,
    Band,
    /// Point scale: a band scale with zero-width bands.
    Dot,
    Quantile,
    Quantize,
    Threshold,
    Identity,
}

impl ScaleKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Time => "time",
            Self::Ordinal => "ordinal",
            Self::Band => "band",
            Self::Dot => "dot",
            Self::Quantile => "quantile",
            Self::Quantize => "quantize",
            Self::Threshold => "threshold",
            Self::Identity => "identity",
        }
    }

    /// Kinds whose domain is a `[min, max]` pair.
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Linear | Self::Log | Self::Time | Self::Quantize)
    }

    /// Kinds whose domain is a list of distinct values.
    #[must_use]
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::Ordinal | Self::Band | Self::Dot)
    }

    /// Kinds whose output is a position in the unit interval.
    #[must_use]
    pub fn is_position(self) -> bool {
        matches!(
            self,
            Self::Linear | Self::Log | Self::Time | Self::Band | Self::Dot
        )
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific knobs carried by a [`ScaleSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<Interpolate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    pub zero: bool,
    /// Round the continuous domain outward once, right after instantiation.
    pub nice: bool,
}

/// Declarative description of one scale, produced by inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    #[serde(rename = "type")]
    pub kind: ScaleKind,
    #[serde(default)]
    pub domain: Vec<Value>,
    #[serde(default)]
    pub range: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub options: ScaleOptions,
}

impl ScaleSpec {
    #[must_use]
    pub fn new(kind: ScaleKind, domain: Vec<Value>, range: Vec<Value>) -> Self {
        Self {
            kind,
            domain,
            range,
            label: None,
            options: ScaleOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ScaleOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A runtime scale built from a [`ScaleSpec`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Log(LogScale),
    Time(TimeScale),
    Ordinal(OrdinalScale),
    Band(BandScale),
    Dot(BandScale),
    Quantile(ThresholdScale),
    Quantize(ThresholdScale),
    Threshold(ThresholdScale),
    Identity,
}

impl Scale {
    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Log(_) => ScaleKind::Log,
            Self::Time(_) => ScaleKind::Time,
            Self::Ordinal(_) => ScaleKind::Ordinal,
            Self::Band(_) => ScaleKind::Band,
            Self::Dot(_) => ScaleKind::Dot,
            Self::Quantile(_) => ScaleKind::Quantile,
            Self::Quantize(_) => ScaleKind::Quantize,
            Self::Threshold(_) => ScaleKind::Threshold,
            Self::Identity => ScaleKind::Identity,
        }
    }

    /// Maps one raw value. Inputs a kind cannot read (text on a linear scale,
    /// values outside an ordinal domain) map to `Null`.
    #[must_use]
    pub fn map(&self, value: &Value) -> Value {
        match self {
            Self::Linear(s) => value.as_f64().map_or(Value::Null, |x| s.map(x)),
            Self::Log(s) => value.as_f64().map_or(Value::Null, |x| s.map(x)),
            Self::Time(s) => value.as_f64().map_or(Value::Null, |x| s.map_millis(x)),
            Self::Ordinal(s) => s.map(value),
            Self::Band(s) | Self::Dot(s) => s.map(value),
            Self::Quantile(s) | Self::Quantize(s) | Self::Threshold(s) => {
                value.as_f64().map_or(Value::Null, |x| s.map(x))
            }
            Self::Identity => value.clone(),
        }
    }

    #[must_use]
    pub fn map_values(&self, values: &[Value]) -> Vec<Value> {
        values.iter().map(|value| self.map(value)).collect()
    }

    /// Continuous kinds only; the rest have no ticks.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        match self {
            Self::Linear(s) => s.ticks(count).into_iter().map(Value::Number).collect(),
            Self::Log(s) => s.ticks(count).into_iter().map(Value::Number).collect(),
            Self::Time(s) => s.ticks(count).into_iter().map(Value::Date).collect(),
            _ => Vec::new(),
        }
    }

    /// Rounds a continuous domain outward. Call once, before mapping anything.
    pub fn nice(&mut self, count: usize) {
        match self {
            Self::Linear(s) => s.nice(count),
            Self::Log(s) => s.nice(),
            Self::Time(s) => s.nice(count),
            _ => {}
        }
    }

    /// Maps a numeric range value back into the domain (linear, log and time only).
    #[must_use]
    pub fn invert(&self, y: f64) -> Option<Value> {
        match self {
            Self::Linear(s) => s.invert(y).map(Value::Number),
            Self::Log(s) => s.invert(y).map(Value::Number),
            Self::Time(s) => s.invert(y).map(Value::Date),
            _ => None,
        }
    }

    #[must_use]
    pub fn band_width(&self) -> Option<f64> {
        match self {
            Self::Band(s) | Self::Dot(s) => Some(s.band_width()),
            _ => None,
        }
    }

    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::Band(s) | Self::Dot(s) => Some(s.step()),
            _ => None,
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> Option<&[f64]> {
        match self {
            Self::Quantile(s) | Self::Quantize(s) | Self::Threshold(s) => Some(s.thresholds()),
            _ => None,
        }
    }
}

fn numeric_pair(kind: ScaleKind, values: &[Value], what: &str) -> ChartResult<(f64, f64)> {
    match values {
        [a, b] => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(ChartError::invalid_scale(
                kind,
                format!("{what} endpoints must be numbers or dates"),
            )),
        },
        _ => Err(ChartError::invalid_scale(
            kind,
            format!("{what} must have exactly two values, got {}", values.len()),
        )),
    }
}

fn numeric_list(kind: ScaleKind, values: &[Value], what: &str) -> ChartResult<Vec<f64>> {
    values
        .iter()
        .map(|value| {
            value.as_f64().ok_or_else(|| {
                ChartError::invalid_scale(kind, format!("{what} values must be numeric"))
            })
        })
        .collect()
}

fn color_pair(values: &[Value]) -> Option<(Rgb, Rgb)> {
    match values {
        [a, b] => Some((
            Rgb::parse_hex(a.as_str()?)?,
            Rgb::parse_hex(b.as_str()?)?,
        )),
        _ => None,
    }
}

fn continuous_range(spec: &ScaleSpec) -> ChartResult<ContinuousRange> {
    let colors = color_pair(&spec.range);
    match (spec.options.interpolate, colors) {
        (Some(Interpolate::Color) | None, Some((start, stop))) => {
            Ok(ContinuousRange::Color(start, stop))
        }
        (Some(Interpolate::Color), None) => Err(ChartError::invalid_scale(
            spec.kind,
            "color interpolation needs two `#rrggbb` range values",
        )),
        _ => {
            let (r0, r1) = numeric_pair(spec.kind, &spec.range, "range")?;
            Ok(ContinuousRange::Number(r0, r1))
        }
    }
}

/// Builds the runtime scale described by `spec`.
///
/// When `spec.options.nice` is set, continuous domains are rounded outward
/// with [`DEFAULT_TICK_COUNT`] before the scale is returned.
pub fn instantiate_scale(spec: &ScaleSpec) -> ChartResult<Scale> {
    let kind = spec.kind;
    let options = &spec.options;
    let mut scale = match kind {
        ScaleKind::Linear => {
            let domain = numeric_pair(kind, &spec.domain, "domain")?;
            Scale::Linear(LinearScale::with_range(domain, continuous_range(spec)?))
        }
        ScaleKind::Log => {
            let domain = numeric_pair(kind, &spec.domain, "domain")?;
            if domain.0 <= 0.0 || domain.1 <= 0.0 {
                return Err(ChartError::invalid_scale(kind, "domain must be > 0"));
            }
            let base = options.base.unwrap_or(DEFAULT_LOG_BASE);
            if !base.is_finite() || base <= 0.0 || base == 1.0 {
                return Err(ChartError::invalid_scale(
                    kind,
                    "base must be finite, > 0 and != 1",
                ));
            }
            Scale::Log(LogScale::with_range(domain, continuous_range(spec)?, base))
        }
        ScaleKind::Time => {
            let domain = numeric_pair(kind, &spec.domain, "domain")?;
            Scale::Time(TimeScale::from_millis(domain, continuous_range(spec)?))
        }
        ScaleKind::Ordinal => Scale::Ordinal(OrdinalScale::new(
            spec.domain.iter().cloned(),
            spec.range.clone(),
        )),
        ScaleKind::Band => {
            let range = numeric_pair(kind, &spec.range, "range")?;
            let padding = options.padding.unwrap_or(DEFAULT_BAND_PADDING);
            let margin = options.margin.unwrap_or(padding);
            Scale::Band(BandScale::new(
                spec.domain.iter().cloned(),
                range,
                padding,
                margin,
            ))
        }
        ScaleKind::Dot => {
            let range = numeric_pair(kind, &spec.range, "range")?;
            let margin = options.margin.unwrap_or(DEFAULT_DOT_MARGIN);
            Scale::Dot(BandScale::point(spec.domain.iter().cloned(), range, margin))
        }
        ScaleKind::Quantile => {
            let sample = numeric_list(kind, &spec.domain, "domain")?;
            let cuts = threshold::quantile_thresholds(&sample, spec.range.len());
            Scale::Quantile(ThresholdScale::new(cuts, spec.range.clone()))
        }
        ScaleKind::Quantize => {
            let (d0, d1) = numeric_pair(kind, &spec.domain, "domain")?;
            let cuts = threshold::quantize_thresholds(d0, d1, spec.range.len());
            Scale::Quantize(ThresholdScale::new(cuts, spec.range.clone()))
        }
        ScaleKind::Threshold => {
            let cuts = numeric_list(kind, &spec.domain, "domain")?;
            Scale::Threshold(ThresholdScale::new(cuts, spec.range.clone()))
        }
        ScaleKind::Identity => Scale::Identity,
    };

    if options.nice {
        scale.nice(DEFAULT_TICK_COUNT);
    }
    debug!(
        kind = %kind,
        domain_len = spec.domain.len(),
        range_len = spec.range.len(),
        nice = options.nice,
        "instantiated scale"
    );
    Ok(scale)
}
