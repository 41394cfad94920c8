use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinate::{CoordinateSystem, TransformOptions, build_coordinate_system};
use crate::core::{CanvasRect, Value};
use crate::error::ChartResult;
use crate::scale::{Scale, ScaleSpec};

use super::channel::{ChannelDef, GeometryChannels, bind_channels, validate_channel_scales};
use super::scale_inference::{ScaleOverrides, apply_scales, infer_scales, instantiate_scales};

/// Outer view box plus the paddings reserved for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_top: f64,
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 480.0,
            padding_left: 45.0,
            padding_right: 45.0,
            padding_bottom: 45.0,
            padding_top: 65.0,
        }
    }
}

impl ViewLayout {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self.padding_bottom = bottom;
        self.padding_top = top;
        self
    }

    /// Plotting rectangle left after removing the paddings.
    #[must_use]
    pub fn canvas(self) -> CanvasRect {
        CanvasRect::new(
            self.x + self.padding_left,
            self.y + self.padding_top,
            self.width - self.padding_left - self.padding_right,
            self.height - self.padding_top - self.padding_bottom,
        )
    }
}

/// Everything a view needs besides its geometries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub layout: ViewLayout,
    pub scales: ScaleOverrides,
    pub transforms: Vec<TransformOptions>,
}

/// One geometry: its declared channel slots and the values bound to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub defs: Vec<ChannelDef>,
    pub channels: GeometryChannels,
}

impl Layer {
    /// Binds extracted values to `defs`; see [`bind_channels`].
    pub fn bind(
        defs: Vec<ChannelDef>,
        values: IndexMap<String, Vec<Value>>,
        fields: &IndexMap<String, String>,
    ) -> ChartResult<Self> {
        let channels = bind_channels(&defs, values, fields)?;
        Ok(Self { defs, channels })
    }
}

/// Scales, coordinate system and mapped channel values ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedView {
    pub specs: IndexMap<String, ScaleSpec>,
    pub scales: IndexMap<String, Scale>,
    pub coordinate: CoordinateSystem,
    /// Mapped values per layer, in layer order.
    pub layers: Vec<IndexMap<String, Vec<Value>>>,
}

impl PreparedView {
    #[must_use]
    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }
}

/// Runs inference over all layers, builds the scales and the coordinate
/// system, then maps every layer's channels.
pub fn prepare_view(layers: &[Layer], config: &ViewConfig) -> ChartResult<PreparedView> {
    let specs = infer_scales(layers.iter().map(|layer| &layer.channels), &config.scales);
    let scales = instantiate_scales(&specs)?;

    for layer in layers {
        validate_channel_scales(&layer.defs, &layer.channels, &scales)?;
    }

    let coordinate = build_coordinate_system(config.layout.canvas(), &config.transforms);
    let mapped = layers
        .iter()
        .map(|layer| apply_scales(&layer.channels, &scales))
        .collect::<ChartResult<Vec<_>>>()?;

    debug!(
        layers = layers.len(),
        scales = scales.len(),
        polar = coordinate.is_polar(),
        transpose = coordinate.is_transpose(),
        "prepared view"
    );
    Ok(PreparedView {
        specs,
        scales,
        coordinate,
        layers: mapped,
    })
}
