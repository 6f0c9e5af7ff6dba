use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::block::Block;

/// A world owned by the host.
#[async_trait]
pub trait World: Send + Sync {
    fn get_name(&self) -> &str;

    fn get_uid(&self) -> Uuid;

    /// Lowest y coordinate that can hold a block.
    fn get_min_height(&self) -> i32;

    /// One above the highest y coordinate that can hold a block.
    fn get_max_height(&self) -> i32;

    async fn get_block_at(&self, x: i32, y: i32, z: i32) -> Arc<dyn Block>;

    async fn get_chunk_at(&self, chunk_x: i32, chunk_z: i32) -> Arc<dyn Chunk>;
}

/// A 16x16 column of a [`World`].
#[async_trait]
pub trait Chunk: Send + Sync {
    fn get_x(&self) -> i32;

    fn get_z(&self) -> i32;

    fn get_world(&self) -> Arc<dyn World>;

    fn is_loaded(&self) -> bool;

    /// Block at chunk-relative `x`/`z` (0..16) and absolute `y`.
    async fn get_block(&self, x: i32, y: i32, z: i32) -> Arc<dyn Block> {
        self.get_world()
            .get_block_at((self.get_x() << 4) + x, y, (self.get_z() << 4) + z)
            .await
    }
}
