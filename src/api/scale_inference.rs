//! Scale inference: merges channel values by logical scale name and derives
//! one [`ScaleSpec`] per name from the values plus user overrides.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Value;
use crate::core::primitives::unix_millis_to_datetime;
use crate::error::{ChartError, ChartResult};
use crate::scale::{
    DEFAULT_BAND_PADDING, DEFAULT_DOT_MARGIN, Interpolate, Scale, ScaleKind, ScaleOptions,
    ScaleSpec, instantiate_scale,
};

use super::channel::GeometryChannels;
use super::palette::{CATEGORICAL_COLORS, ORDINAL_COLORS, ordinal_ramp_endpoints, palette};

/// User-declared settings for one logical scale. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOverride {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ScaleKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<Interpolate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Start continuous domains at zero.
    pub zero: bool,
    pub nice: bool,
}

/// Overrides keyed by logical scale name (`x`, `y`, `color`, ...).
pub type ScaleOverrides = IndexMap<String, ScaleOverride>;

/// Logical scale a channel feeds: `x*` -> `x`, `y*` -> `y`,
/// `fill`/`stroke` -> `color`, anything else keeps its own name.
#[must_use]
pub fn logical_scale_name(channel: &str) -> &str {
    if channel.starts_with('x') {
        "x"
    } else if channel.starts_with('y') {
        "y"
    } else if is_color_channel(channel) {
        "color"
    } else {
        channel
    }
}

fn is_color_channel(channel: &str) -> bool {
    channel == "fill" || channel == "stroke"
}

fn is_position(name: &str) -> bool {
    name == "x" || name == "y"
}

/// All channels feeding one logical scale, concatenated across geometries.
#[derive(Debug, Default)]
struct MergedChannel {
    values: Vec<Value>,
    scale: Option<ScaleKind>,
    field: Option<String>,
}

fn merge_channels<'a, I>(channel_sets: I) -> IndexMap<String, MergedChannel>
where
    I: IntoIterator<Item = &'a GeometryChannels>,
{
    let mut merged: IndexMap<String, MergedChannel> = IndexMap::new();
    for channels in channel_sets {
        for (name, channel) in channels {
            let entry = merged
                .entry(logical_scale_name(name).to_owned())
                .or_default();
            entry.values.extend(channel.values.iter().cloned());
            if entry.scale.is_none() {
                entry.scale = channel.scale;
            }
            if entry.field.is_none() {
                entry.field.clone_from(&channel.field);
            }
        }
    }
    merged
}

/// Derives one scale spec per logical scale name.
///
/// Output order follows the first appearance of each logical name.
pub fn infer_scales<'a, I>(
    channel_sets: I,
    overrides: &ScaleOverrides,
) -> IndexMap<String, ScaleSpec>
where
    I: IntoIterator<Item = &'a GeometryChannels>,
{
    let defaults = ScaleOverride::default();
    merge_channels(channel_sets)
        .into_iter()
        .map(|(name, channel)| {
            let user = overrides.get(&name).unwrap_or(&defaults);
            let kind = infer_kind(&name, &channel, user);
            let spec = ScaleSpec {
                kind,
                domain: infer_domain(kind, &channel.values, user),
                range: infer_range(kind, &name, user),
                label: user.label.clone().or(channel.field),
                options: infer_options(kind, &name, user),
            };
            debug!(
                scale = %name,
                kind = %spec.kind,
                values = channel.values.len(),
                domain_len = spec.domain.len(),
                "inferred scale"
            );
            (name, spec)
        })
        .collect()
}

fn discrete_kind(name: &str) -> ScaleKind {
    if is_position(name) {
        ScaleKind::Dot
    } else {
        ScaleKind::Ordinal
    }
}

fn infer_kind(name: &str, channel: &MergedChannel, user: &ScaleOverride) -> ScaleKind {
    if let Some(kind) = channel.scale {
        trace!(scale = name, %kind, "kind declared by geometry");
        return kind;
    }
    if let Some(kind) = user.kind {
        return kind;
    }

    // A declared domain takes precedence over a declared range, even a short one.
    let declared = user.domain.as_ref().or(user.range.as_ref());
    if declared.is_some_and(|values| values.len() > 2) {
        return discrete_kind(name);
    }

    if let Some(domain) = &user.domain {
        if domain.iter().any(Value::is_categorical) {
            return discrete_kind(name);
        }
        if domain.iter().any(Value::is_temporal) {
            return ScaleKind::Time;
        }
        return ScaleKind::Linear;
    }

    let values = &channel.values;
    // No defined values: nothing to measure.
    if !values.iter().any(Value::is_defined) {
        return ScaleKind::Identity;
    }
    if values.iter().any(Value::is_categorical) {
        return discrete_kind(name);
    }
    if values.iter().any(Value::is_temporal) {
        return ScaleKind::Time;
    }
    if values.iter().collect::<IndexSet<_>>().len() == 1 {
        return ScaleKind::Identity;
    }
    ScaleKind::Linear
}

fn extent(values: &[Value], zero: bool) -> Option<(f64, f64)> {
    let (min, max) = values
        .iter()
        .filter(|value| value.is_defined())
        .filter_map(Value::as_f64)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })?;
    Some((if zero { 0.0 } else { min }, max))
}

fn distinct(values: &[Value]) -> IndexSet<Value> {
    values
        .iter()
        .filter(|value| value.is_defined())
        .cloned()
        .collect()
}

fn infer_domain(kind: ScaleKind, values: &[Value], user: &ScaleOverride) -> Vec<Value> {
    if let Some(domain) = &user.domain {
        return domain.clone();
    }
    match kind {
        ScaleKind::Linear | ScaleKind::Log | ScaleKind::Quantize => extent(values, user.zero)
            .map(|(min, max)| vec![Value::Number(min), Value::Number(max)])
            .unwrap_or_default(),
        ScaleKind::Ordinal | ScaleKind::Dot | ScaleKind::Band => {
            distinct(values).into_iter().collect()
        }
        ScaleKind::Quantile => {
            let mut sorted: Vec<Value> = distinct(values).into_iter().collect();
            sorted.sort_by(Value::total_cmp);
            sorted
        }
        ScaleKind::Time => extent(values, user.zero)
            .map(|(min, max)| {
                [min, max]
                    .into_iter()
                    .map(|millis| unix_millis_to_datetime(millis).map_or(Value::Null, Value::Date))
                    .collect()
            })
            .unwrap_or_default(),
        ScaleKind::Threshold | ScaleKind::Identity => Vec::new(),
    }
}

fn infer_range(kind: ScaleKind, name: &str, user: &ScaleOverride) -> Vec<Value> {
    if let Some(range) = &user.range {
        return range.clone();
    }
    match kind {
        // Device y grows downward while data y grows upward.
        _ if kind.is_position() && name == "y" => vec![Value::Number(1.0), Value::Number(0.0)],
        _ if kind.is_position() && name == "color" => ordinal_ramp_endpoints(),
        _ if kind.is_position() => vec![Value::Number(0.0), Value::Number(1.0)],
        ScaleKind::Ordinal => palette(&CATEGORICAL_COLORS),
        ScaleKind::Quantile | ScaleKind::Quantize | ScaleKind::Threshold => {
            palette(&ORDINAL_COLORS)
        }
        _ => Vec::new(),
    }
}

fn infer_options(kind: ScaleKind, name: &str, user: &ScaleOverride) -> ScaleOptions {
    let mut options = ScaleOptions {
        padding: user.padding,
        margin: user.margin,
        interpolate: user.interpolate,
        base: user.base,
        zero: user.zero,
        nice: user.nice,
    };
    match kind {
        ScaleKind::Linear | ScaleKind::Log => {
            options.interpolate.get_or_insert(if name == "color" {
                Interpolate::Color
            } else {
                Interpolate::Number
            });
        }
        ScaleKind::Band => {
            options.padding.get_or_insert(DEFAULT_BAND_PADDING);
        }
        ScaleKind::Dot => {
            options.margin.get_or_insert(DEFAULT_DOT_MARGIN);
        }
        _ => {}
    }
    options
}

/// Instantiates every inferred spec, keeping the logical names.
pub fn instantiate_scales(
    specs: &IndexMap<String, ScaleSpec>,
) -> ChartResult<IndexMap<String, Scale>> {
    specs
        .iter()
        .map(|(name, spec)| Ok((name.clone(), instantiate_scale(spec)?)))
        .collect()
}

/// Maps every channel of one geometry through the scale of its logical name.
pub fn apply_scales(
    channels: &GeometryChannels,
    scales: &IndexMap<String, Scale>,
) -> ChartResult<IndexMap<String, Vec<Value>>> {
    channels
        .iter()
        .map(|(name, channel)| {
            let logical = logical_scale_name(name);
            let scale = scales
                .get(logical)
                .ok_or_else(|| ChartError::MissingScale(logical.to_owned()))?;
            Ok((name.clone(), scale.map_values(&channel.values)))
        })
        .collect()
}
