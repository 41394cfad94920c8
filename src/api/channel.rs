use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Value;
use crate::error::{ChartError, ChartResult};
use crate::scale::{Scale, ScaleKind};

use super::scale_inference::logical_scale_name;

/// Raw values one geometry contributes to one channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelValues {
    pub values: Vec<Value>,
    /// Scale kind the geometry itself requires for this channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleKind>,
    /// Source field the values were read from; becomes the default scale label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ChannelValues {
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            scale: None,
            field: None,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, kind: ScaleKind) -> Self {
        self.scale = Some(kind);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Channel values of one geometry, keyed by channel name.
pub type GeometryChannels = IndexMap<String, ChannelValues>;

/// A channel slot a geometry declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDef {
    pub name: String,
    #[serde(default = "default_optional")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleKind>,
}

fn default_optional() -> bool {
    true
}

impl ChannelDef {
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            scale: None,
        }
    }

    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
            scale: None,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, kind: ScaleKind) -> Self {
        self.scale = Some(kind);
        self
    }
}

/// Channels every geometry has: required `x`/`y`, optional `stroke`/`fill`.
#[must_use]
pub fn standard_channels() -> Vec<ChannelDef> {
    vec![
        ChannelDef::required("x"),
        ChannelDef::required("y"),
        ChannelDef::optional("stroke"),
        ChannelDef::optional("fill"),
    ]
}

/// Attaches extracted values to a geometry's channel slots.
///
/// Values for channels the geometry does not declare are dropped.
pub fn bind_channels(
    defs: &[ChannelDef],
    mut values: IndexMap<String, Vec<Value>>,
    fields: &IndexMap<String, String>,
) -> ChartResult<GeometryChannels> {
    let mut channels = GeometryChannels::with_capacity(defs.len());
    for def in defs {
        match values.shift_remove(&def.name) {
            Some(v) => {
                channels.insert(
                    def.name.clone(),
                    ChannelValues {
                        values: v,
                        scale: def.scale,
                        field: fields.get(&def.name).cloned(),
                    },
                );
            }
            None if !def.optional => return Err(ChartError::MissingChannel(def.name.clone())),
            None => {}
        }
    }
    if !values.is_empty() {
        trace!(
            dropped = ?values.keys().collect::<Vec<_>>(),
            "ignoring values for undeclared channels"
        );
    }
    Ok(channels)
}

/// Checks a geometry's required channels against bound values and built scales.
pub fn validate_channel_scales(
    defs: &[ChannelDef],
    channels: &GeometryChannels,
    scales: &IndexMap<String, Scale>,
) -> ChartResult<()> {
    for def in defs.iter().filter(|def| !def.optional) {
        if !channels.contains_key(&def.name) {
            return Err(ChartError::MissingChannel(def.name.clone()));
        }
        if def.scale == Some(ScaleKind::Band) {
            let scale = scales.get(logical_scale_name(&def.name));
            if !matches!(scale, Some(Scale::Band(_))) {
                return Err(ChartError::BandScaleRequired(def.name.clone()));
            }
        }
    }
    Ok(())
}
