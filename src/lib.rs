//! chart-grammar: the geometric core of a grammar-of-graphics charting library.
//!
//! Data values go through [`scale`]s into the unit square, and a
//! [`coordinate`] system turns unit-square points into canvas pixels. The
//! [`api`] layer infers scales from channel values and prepares whole views.

pub mod api;
pub mod coordinate;
pub mod core;
pub mod error;
pub mod scale;
pub mod telemetry;

pub use api::{
    ChannelValues, GeometryChannels, ScaleOverride, ViewConfig, infer_scales, prepare_view,
};
pub use coordinate::{CoordinateSystem, PointTransform, TransformOptions, build_coordinate_system};
pub use crate::core::{CanvasRect, Point, Value};
pub use error::{ChartError, ChartResult};
pub use scale::{Scale, ScaleKind, ScaleSpec, instantiate_scale};
