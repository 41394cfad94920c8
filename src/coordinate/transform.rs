use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Tag identifying what a [`PointTransform`] does, queryable without running it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformKind {
    Translate,
    Scale,
    Reflect,
    ReflectX,
    ReflectY,
    Transpose,
    Polar,
}

/// Atomic point-to-point transform.
///
/// Reflections are scales with fixed factors but keep their own tag so
/// coordinate predicates can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointTransform {
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    Reflect,
    ReflectX,
    ReflectY,
    Transpose,
    /// Reads `(theta, radius)` and produces Cartesian `(x, y)`.
    Polar,
}

impl PointTransform {
    #[must_use]
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::Translate { tx, ty }
    }

    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::Scale { sx, sy }
    }

    #[must_use]
    pub fn reflect() -> Self {
        Self::Reflect
    }

    /// Mirrors across the vertical axis: `scale(-1, 1)`.
    #[must_use]
    pub fn reflect_x() -> Self {
        Self::ReflectX
    }

    /// Mirrors across the horizontal axis: `scale(1, -1)`.
    #[must_use]
    pub fn reflect_y() -> Self {
        Self::ReflectY
    }

    #[must_use]
    pub fn transpose() -> Self {
        Self::Transpose
    }

    #[must_use]
    pub fn polar() -> Self {
        Self::Polar
    }

    #[must_use]
    pub fn kind(self) -> TransformKind {
        match self {
            Self::Translate { .. } => TransformKind::Translate,
            Self::Scale { .. } => TransformKind::Scale,
            Self::Reflect => TransformKind::Reflect,
            Self::ReflectX => TransformKind::ReflectX,
            Self::ReflectY => TransformKind::ReflectY,
            Self::Transpose => TransformKind::Transpose,
            Self::Polar => TransformKind::Polar,
        }
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        let Point { x, y } = point;
        match self {
            Self::Translate { tx, ty } => Point::new(x + tx, y + ty),
            Self::Scale { sx, sy } => Point::new(x * sx, y * sy),
            Self::Reflect => Point::new(-x, -y),
            Self::ReflectX => Point::new(-x, y),
            Self::ReflectY => Point::new(x, -y),
            Self::Transpose => Point::new(y, x),
            Self::Polar => {
                let (theta, radius) = (x, y);
                Point::new(radius * theta.cos(), radius * theta.sin())
            }
        }
    }
}
