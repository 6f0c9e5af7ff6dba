use std::{fmt, sync::Arc};

use lantern_data::Material;
use lantern_util::math::position::BlockPos;

use crate::world::World;

use super::{Block, BlockData};

/// A detached snapshot of a block.
///
/// Changing the snapshot does not touch the world until [`BlockState::update`] is called.
#[derive(Clone)]
pub struct BlockState {
    world: Arc<dyn World>,
    position: BlockPos,
    data: BlockData,
    light_level: u8,
}

impl BlockState {
    #[must_use]
    pub fn new(world: Arc<dyn World>, position: BlockPos, data: BlockData, light_level: u8) -> Self {
        Self {
            world,
            position,
            data,
            light_level,
        }
    }

    /// Snapshots `block` as it is right now.
    pub async fn capture(block: &dyn Block) -> Self {
        Self::new(
            block.get_world(),
            block.get_position(),
            block.get_block_data().await,
            block.get_light_level().await,
        )
    }

    pub fn get_world(&self) -> &Arc<dyn World> {
        &self.world
    }

    pub fn get_position(&self) -> BlockPos {
        self.position
    }

    pub fn get_x(&self) -> i32 {
        self.position.0.x
    }

    pub fn get_y(&self) -> i32 {
        self.position.0.y
    }

    pub fn get_z(&self) -> i32 {
        self.position.0.z
    }

    pub fn get_type(&self) -> Material {
        self.data.get_material()
    }

    /// Replaces the data with the default data of `material`, unless the type is unchanged.
    pub fn set_type(&mut self, material: Material) {
        if self.data.get_material() != material {
            self.data = BlockData::new(material);
        }
    }

    pub fn get_block_data(&self) -> &BlockData {
        &self.data
    }

    pub fn set_block_data(&mut self, data: BlockData) {
        self.data = data;
    }

    /// Light level when the snapshot was taken.
    pub fn get_light_level(&self) -> u8 {
        self.light_level
    }

    /// The live block this snapshot was taken from.
    pub async fn get_block(&self) -> Arc<dyn Block> {
        let pos = self.position.0;
        self.world.get_block_at(pos.x, pos.y, pos.z).await
    }

    /// Writes the snapshot back to the world.
    ///
    /// Unless `force` is set, nothing is written when the live block's type no
    /// longer matches the snapshot. Returns whether the block was written.
    pub async fn update(&self, force: bool, apply_physics: bool) -> bool {
        let block = self.get_block().await;
        if !force && block.get_type().await != self.get_type() {
            log::debug!(
                "not updating {} at {}: type changed",
                self.get_type(),
                self.position
            );
            return false;
        }
        block
            .set_block_data_with_physics(self.data.clone(), apply_physics)
            .await;
        true
    }
}

impl fmt::Debug for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockState")
            .field("world", &self.world.get_name())
            .field("position", &self.position)
            .field("data", &self.data)
            .field("light_level", &self.light_level)
            .finish()
    }
}
