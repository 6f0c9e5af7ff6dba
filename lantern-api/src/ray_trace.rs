use lantern_util::math::{position::BlockPos, vector3::Vector3};
use serde::{Deserialize, Serialize};

use crate::block::BlockFace;

/// Which fluid blocks a ray trace may stop at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FluidCollisionMode {
    /// Pass through all fluids.
    Never,
    /// Only collide with source fluid blocks.
    SourceOnly,
    /// Collide with every fluid block.
    Always,
}

/// The outcome of a ray trace that hit something.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayTraceResult {
    pub hit_position: Vector3<f64>,
    pub hit_block: Option<BlockPos>,
    /// `None` when the ray started inside the hit block.
    pub hit_block_face: Option<BlockFace>,
}

impl RayTraceResult {
    pub fn new(
        hit_position: Vector3<f64>,
        hit_block: Option<BlockPos>,
        hit_block_face: Option<BlockFace>,
    ) -> Self {
        Self {
            hit_position,
            hit_block,
            hit_block_face,
        }
    }
}
