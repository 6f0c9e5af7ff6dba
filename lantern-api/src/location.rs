use std::{fmt, sync::Arc};

use lantern_util::math::{floor_to_block, position::BlockPos, vector3::Vector3};

use crate::world::World;

/// A position with orientation, optionally bound to a world.
#[derive(Clone)]
pub struct Location {
    pub world: Option<Arc<dyn World>>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl Location {
    #[must_use]
    pub fn new(world: Option<Arc<dyn World>>, x: f64, y: f64, z: f64) -> Self {
        Self::with_rotation(world, x, y, z, 0.0, 0.0)
    }

    #[must_use]
    pub fn with_rotation(
        world: Option<Arc<dyn World>>,
        x: f64,
        y: f64,
        z: f64,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self {
            world,
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }

    pub fn get_world(&self) -> Option<&Arc<dyn World>> {
        self.world.as_ref()
    }

    pub fn get_block_x(&self) -> i32 {
        floor_to_block(self.x)
    }

    pub fn get_block_y(&self) -> i32 {
        floor_to_block(self.y)
    }

    pub fn get_block_z(&self) -> i32 {
        floor_to_block(self.z)
    }

    pub fn to_block_pos(&self) -> BlockPos {
        BlockPos::floored(self.x, self.y, self.z)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn add(&self, offset: Vector3<f64>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            z: self.z + offset.z,
            ..self.clone()
        }
    }

    pub fn distance_squared(&self, other: &Location) -> f64 {
        self.to_vector().squared_distance_to_vec(other.to_vector())
    }

    fn world_name(&self) -> Option<&str> {
        self.world.as_deref().map(World::get_name)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.world_name() == other.world_name()
            && self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.yaw == other.yaw
            && self.pitch == other.pitch
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("world", &self.world_name())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("yaw", &self.yaw)
            .field("pitch", &self.pitch)
            .finish()
    }
}
