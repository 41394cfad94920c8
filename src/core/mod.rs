pub mod primitives;
pub mod types;
pub mod value;

pub use types::{CanvasRect, Point};
pub use value::Value;
