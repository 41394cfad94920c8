use tracing::{debug, trace};

use crate::core::{CanvasRect, Point};

use super::builders::{self, TransformOptions};
use super::{PointTransform, TransformKind};

/// Composed mapping from data space to device space.
///
/// Built once per render pass and immutable afterwards. Stages run in order:
/// the first stage sees the raw point, the trailing Cartesian stages emit
/// device pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    canvas: CanvasRect,
    stages: Vec<PointTransform>,
}

impl CoordinateSystem {
    /// Flattens already-built stage lists. The Cartesian stages are appended here.
    #[must_use]
    pub fn from_stages<I>(canvas: CanvasRect, stage_lists: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = PointTransform>,
    {
        let mut stages: Vec<PointTransform> = stage_lists.into_iter().flatten().collect();
        stages.extend(builders::cartesian(canvas));
        Self { canvas, stages }
    }

    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        self.stages
            .iter()
            .fold(point, |current, stage| stage.apply(current))
    }

    #[must_use]
    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|point| self.apply(*point)).collect()
    }

    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.kinds().any(|kind| kind == TransformKind::Polar)
    }

    /// Two transpositions cancel out, so only an odd count counts.
    #[must_use]
    pub fn is_transpose(&self) -> bool {
        self.kinds()
            .filter(|kind| *kind == TransformKind::Transpose)
            .count()
            % 2
            == 1
    }

    /// Canvas center, independent of the active transforms.
    #[must_use]
    pub fn center(&self) -> Point {
        self.canvas.center()
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasRect {
        self.canvas
    }

    #[must_use]
    pub fn stages(&self) -> &[PointTransform] {
        &self.stages
    }

    pub fn kinds(&self) -> impl Iterator<Item = TransformKind> + '_ {
        self.stages.iter().map(|stage| stage.kind())
    }
}

/// Builds the coordinate system for a canvas and a user-declared transform list.
///
/// The Cartesian stages always close the pipeline, so explicit `cartesian`
/// entries in `transforms` are skipped instead of being applied twice.
#[must_use]
pub fn build_coordinate_system(
    canvas: CanvasRect,
    transforms: &[TransformOptions],
) -> CoordinateSystem {
    let stage_lists = transforms.iter().filter_map(|options| match options {
        TransformOptions::Cartesian => {
            trace!("skipping explicit cartesian transform, it is always appended last");
            None
        }
        other => Some(other.stages(canvas)),
    });
    let system = CoordinateSystem::from_stages(canvas, stage_lists);
    debug!(
        declared = transforms.len(),
        stages = system.stages.len(),
        polar = system.is_polar(),
        transpose = system.is_transpose(),
        "built coordinate system"
    );
    system
}
