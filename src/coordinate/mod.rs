pub mod builders;
pub mod system;
pub mod transform;

pub use builders::{PolarOptions, StageList, TransformOptions};
pub use system::{CoordinateSystem, build_coordinate_system};
pub use transform::{PointTransform, TransformKind};
