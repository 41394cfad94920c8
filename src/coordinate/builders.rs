//! Coordinate builders.
//!
//! Each builder turns its options plus the canvas rectangle into an ordered
//! list of [`PointTransform`] stages. Every stage list except the Cartesian one
//! maps the unit square back into the unit square, so the Cartesian stages can
//! always run last and convert normalized coordinates to device pixels.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::CanvasRect;

use super::PointTransform;

/// Ordered stages contributed by one builder. The polar builder is the longest.
pub type StageList = SmallVec<[PointTransform; 9]>;

/// Angle/radius window used by the polar builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolarOptions {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for PolarOptions {
    fn default() -> Self {
        Self {
            inner_radius: 0.0,
            outer_radius: 1.0,
            start_angle: -PI / 2.0,
            end_angle: PI / 2.0 * 3.0,
        }
    }
}

impl PolarOptions {
    #[must_use]
    pub fn with_radius(mut self, inner_radius: f64, outer_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self.outer_radius = outer_radius;
        self
    }

    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }
}

/// One entry of a user-declared transform list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransformOptions {
    Cartesian,
    Polar(PolarOptions),
    Transpose,
}

impl TransformOptions {
    #[must_use]
    pub fn stages(self, canvas: CanvasRect) -> StageList {
        match self {
            Self::Cartesian => cartesian(canvas),
            Self::Polar(options) => polar(options, canvas),
            Self::Transpose => transpose(),
        }
    }
}

/// Maps the unit square onto the canvas rectangle.
#[must_use]
pub fn cartesian(canvas: CanvasRect) -> StageList {
    smallvec![
        PointTransform::scale(canvas.width, canvas.height),
        PointTransform::translate(canvas.x, canvas.y),
    ]
}

/// Bends the unit square into a circle (or annulus sector) inscribed in the unit square.
///
/// `x` becomes the angle and `y` the radius. Radius grows with `y` in data
/// space, so the square is flipped vertically first. The aspect correction
/// keeps the projected circle round once the Cartesian stage stretches the
/// unit square to a non-square canvas.
#[must_use]
pub fn polar(options: PolarOptions, canvas: CanvasRect) -> StageList {
    let PolarOptions {
        inner_radius,
        outer_radius,
        start_angle,
        end_angle,
    } = options;

    let aspect = canvas.aspect();
    let sx = if aspect > 1.0 { 1.0 / aspect } else { 1.0 };
    let sy = if aspect > 1.0 { 1.0 } else { aspect };

    smallvec![
        PointTransform::translate(0.0, -0.5),
        PointTransform::reflect_y(),
        PointTransform::translate(0.0, 0.5),
        PointTransform::scale(end_angle - start_angle, outer_radius - inner_radius),
        PointTransform::translate(start_angle, inner_radius),
        PointTransform::polar(),
        PointTransform::scale(sx, sy),
        PointTransform::scale(0.5, 0.5),
        PointTransform::translate(0.5, 0.5),
    ]
}

/// Reflects the unit square about its diagonal, keeping it inside `[0, 1]²`.
#[must_use]
pub fn transpose() -> StageList {
    smallvec![
        PointTransform::transpose(),
        PointTransform::translate(-0.5, -0.5),
        PointTransform::reflect_x(),
        PointTransform::translate(0.5, 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::{PolarOptions, TransformOptions, cartesian, polar, transpose};
    use crate::coordinate::TransformKind;
    use crate::core::{CanvasRect, Point};

    fn run(stages: &[crate::coordinate::PointTransform], point: Point) -> Point {
        stages.iter().fold(point, |p, stage| stage.apply(p))
    }

    #[test]
    fn cartesian_scales_then_translates() {
        let stages = cartesian(CanvasRect::new(10.0, 20.0, 200.0, 100.0));
        let kinds: Vec<_> = stages.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![TransformKind::Scale, TransformKind::Translate]);
        assert_eq!(run(&stages, Point::new(0.5, 1.0)), Point::new(110.0, 120.0));
    }

    #[test]
    fn polar_output_stays_in_unit_square() {
        let canvas = CanvasRect::new(0.0, 0.0, 640.0, 480.0);
        let stages = polar(PolarOptions::default(), canvas);
        for i in 0..=10 {
            for j in 0..=10 {
                let p = run(&stages, Point::new(f64::from(i) / 10.0, f64::from(j) / 10.0));
                assert!((-1e-12..=1.0 + 1e-12).contains(&p.x), "x out of range: {p:?}");
                assert!((-1e-12..=1.0 + 1e-12).contains(&p.y), "y out of range: {p:?}");
            }
        }
    }

    #[test]
    fn polar_origin_row_collapses_to_center() {
        let stages = polar(PolarOptions::default(), CanvasRect::new(0.0, 0.0, 100.0, 100.0));
        // y = 1 is the top of the data square and maps to radius 0.
        let p = run(&stages, Point::new(0.3, 1.0));
        assert!((p.x - 0.5).abs() < 1e-12);
        assert!((p.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn transpose_keeps_unit_square_corners() {
        let stages = transpose();
        assert_eq!(run(&stages, Point::new(0.0, 0.0)), Point::new(1.0, 0.0));
        assert_eq!(run(&stages, Point::new(1.0, 1.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn transform_options_deserialize_with_polar_defaults() {
        let list: Vec<TransformOptions> = serde_json::from_str(
            r#"[{"kind": "transpose"}, {"kind": "polar", "innerRadius": 0.2}]"#,
        )
        .expect("parse transform list");
        assert_eq!(list[0], TransformOptions::Transpose);
        assert_eq!(
            list[1],
            TransformOptions::Polar(PolarOptions::default().with_radius(0.2, 1.0))
        );
    }
}
