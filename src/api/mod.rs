//! View-level API: channel binding, scale inference and the view pass that
//! ties scales to a coordinate system.

mod channel;
mod json_contract;
mod palette;
mod scale_inference;
mod view_pass;

pub use channel::{
    ChannelDef, ChannelValues, GeometryChannels, bind_channels, standard_channels,
    validate_channel_scales,
};
pub use json_contract::{VIEW_CONFIG_JSON_SCHEMA_V1, ViewConfigJsonContractV1};
pub use palette::{CATEGORICAL_COLORS, ORDINAL_COLORS, ordinal_ramp_endpoints, palette};
pub use scale_inference::{
    ScaleOverride, ScaleOverrides, apply_scales, infer_scales, instantiate_scales,
    logical_scale_name,
};
pub use view_pass::{Layer, PreparedView, ViewConfig, ViewLayout, prepare_view};
