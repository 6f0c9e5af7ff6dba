use std::fmt;

use serde::{Deserialize, Serialize};

use super::{floor_to_block, get_local_cord, get_section_cord, vector3::Vector3};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// Aka Block Position
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn floored(x: f64, y: f64, z: f64) -> Self {
        Self::new(floor_to_block(x), floor_to_block(y), floor_to_block(z))
    }

    /// Coordinates of the chunk column containing this block.
    pub const fn chunk_coordinate(&self) -> (i32, i32) {
        (get_section_cord(self.0.x), get_section_cord(self.0.z))
    }

    /// Position relative to the containing chunk column; y is left untouched.
    pub const fn chunk_relative_position(&self) -> Vector3<i32> {
        Vector3::new(get_local_cord(self.0.x), self.0.y, get_local_cord(self.0.z))
    }

    /// Corner of the block with the smallest coordinates.
    pub fn to_f64(&self) -> Vector3<f64> {
        self.0.to_f64()
    }

    pub fn to_centered_f64(&self) -> Vector3<f64> {
        Vector3::new(
            f64::from(self.0.x) + 0.5,
            f64::from(self.0.y) + 0.5,
            f64::from(self.0.z) + 0.5,
        )
    }

    // Coordinate arithmetic wraps around at the i32 bounds.

    pub fn offset(&self, offset: Vector3<i32>) -> Self {
        Self::new(
            self.0.x.wrapping_add(offset.x),
            self.0.y.wrapping_add(offset.y),
            self.0.z.wrapping_add(offset.z),
        )
    }

    pub fn offset_dir(&self, offset: Vector3<i32>, distance: i32) -> Self {
        self.offset(Vector3::new(
            offset.x.wrapping_mul(distance),
            offset.y.wrapping_mul(distance),
            offset.z.wrapping_mul(distance),
        ))
    }

    /// Offset that leads from `self` to `other`.
    pub fn delta_to(&self, other: &BlockPos) -> Vector3<i32> {
        Vector3::new(
            other.0.x.wrapping_sub(self.0.x),
            other.0.y.wrapping_sub(self.0.y),
            other.0.z.wrapping_sub(self.0.z),
        )
    }

    pub fn up(&self) -> Self {
        self.offset(Vector3::new(0, 1, 0))
    }

    pub fn down(&self) -> Self {
        self.offset(Vector3::new(0, -1, 0))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
