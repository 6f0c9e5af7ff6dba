//! The block contract and the types it speaks in.

mod data;
mod face;
mod piston;
mod state;

use std::sync::Arc;

use async_trait::async_trait;
use lantern_data::{Biome, Material};
use lantern_util::math::{boundingbox::BoundingBox, position::BlockPos, vector3::Vector3};

pub use data::BlockData;
pub use face::BlockFace;
pub use piston::PistonMoveReaction;
pub use state::BlockState;

use crate::{
    entity::Entity,
    inventory::ItemStack,
    location::Location,
    metadata::Metadatable,
    ray_trace::{FluidCollisionMode, RayTraceResult},
    world::{Chunk, World},
};

/// A single block of a world.
///
/// Implemented by the host. A `Block` only names a position; its contents can
/// change at any time, including while a caller is looking at it, so callers
/// should not hold on to answers longer than they need to.
///
/// Methods with a body are expressed through the rest of the contract and rarely
/// need overriding.
#[async_trait]
pub trait Block: Metadatable + Send + Sync {
    /// Legacy data value of the block.
    #[deprecated(note = "magic value")]
    async fn get_data(&self) -> u8;

    async fn get_block_data(&self) -> BlockData;

    /// The block at the given offset from this one. Coordinates wrap at the `i32` bounds.
    async fn get_relative(&self, mod_x: i32, mod_y: i32, mod_z: i32) -> Arc<dyn Block> {
        let target = self.get_position().offset(Vector3::new(mod_x, mod_y, mod_z));
        self.get_world()
            .get_block_at(target.0.x, target.0.y, target.0.z)
            .await
    }

    /// The neighbour in direction `face`. Same as `get_relative_face_distance(face, 1)`.
    async fn get_relative_face(&self, face: BlockFace) -> Arc<dyn Block> {
        self.get_relative_face_distance(face, 1).await
    }

    /// The block `distance` steps away in direction `face`.
    ///
    /// For example, `get_relative_face_distance(BlockFace::Up, 2)` on the block at
    /// 100,100,100 returns the block at 100,102,100.
    async fn get_relative_face_distance(&self, face: BlockFace, distance: i32) -> Arc<dyn Block> {
        let offset = face.to_offset();
        self.get_relative(
            offset.x.wrapping_mul(distance),
            offset.y.wrapping_mul(distance),
            offset.z.wrapping_mul(distance),
        )
        .await
    }

    async fn get_type(&self) -> Material;

    /// Light level at this block, 0-15. A combination of sky and block light.
    async fn get_light_level(&self) -> u8;

    /// Light emitted by the sky reaching this block, 0-15.
    async fn get_light_from_sky(&self) -> u8;

    /// Light emitted by nearby blocks reaching this block, 0-15.
    async fn get_light_from_blocks(&self) -> u8;

    fn get_world(&self) -> Arc<dyn World>;

    fn get_x(&self) -> i32;

    fn get_y(&self) -> i32;

    fn get_z(&self) -> i32;

    fn get_position(&self) -> BlockPos {
        BlockPos::new(self.get_x(), self.get_y(), self.get_z())
    }

    /// Location of the block's lowest corner, with zero yaw and pitch.
    fn get_location(&self) -> Location {
        Location::new(
            Some(self.get_world()),
            f64::from(self.get_x()),
            f64::from(self.get_y()),
            f64::from(self.get_z()),
        )
    }

    /// Overwrites `location` with this block's location and hands it back.
    ///
    /// Saves an allocation when the caller already has a [`Location`] to reuse.
    fn copy_location_into<'a>(&self, location: Option<&'a mut Location>) -> Option<&'a mut Location> {
        let location = location?;
        location.world = Some(self.get_world());
        location.x = f64::from(self.get_x());
        location.y = f64::from(self.get_y());
        location.z = f64::from(self.get_z());
        location.yaw = 0.0;
        location.pitch = 0.0;
        Some(location)
    }

    async fn get_chunk(&self) -> Arc<dyn Chunk> {
        let (chunk_x, chunk_z) = self.get_position().chunk_coordinate();
        self.get_world().get_chunk_at(chunk_x, chunk_z).await
    }

    async fn set_block_data(&self, data: BlockData) {
        self.set_block_data_with_physics(data, true).await;
    }

    /// Replaces the block's data.
    ///
    /// Passing `false` for `apply_physics` skips notifying neighbours, which lets a
    /// plugin place blocks that would otherwise pop off (e.g. a torch on air).
    async fn set_block_data_with_physics(&self, data: BlockData, apply_physics: bool);

    async fn set_type(&self, material: Material) {
        self.set_type_with_physics(material, true).await;
    }

    /// Replaces the block with the default data of `material`. See
    /// [`Block::set_block_data_with_physics`] for `apply_physics`.
    async fn set_type_with_physics(&self, material: Material, apply_physics: bool);

    /// The face of this block that leads to `block`, if `block` is one of the
    /// positions a [`BlockFace`] reaches (including [`BlockFace::Itself`]).
    fn get_face(&self, block: &dyn Block) -> Option<BlockFace> {
        BlockFace::from_offset(self.get_position().delta_to(&block.get_position()))
    }

    /// A snapshot of the block. See [`BlockState::capture`].
    async fn get_state(&self) -> BlockState;

    async fn get_biome(&self) -> Biome;

    async fn set_biome(&self, biome: Biome);

    async fn is_block_powered(&self) -> bool;

    async fn is_block_indirectly_powered(&self) -> bool;

    async fn is_block_face_powered(&self, face: BlockFace) -> bool;

    async fn is_block_face_indirectly_powered(&self, face: BlockFace) -> bool;

    /// Redstone power, 0-15, this block receives through `face`.
    /// [`BlockFace::Itself`] means the block as a whole.
    async fn get_block_power_face(&self, face: BlockFace) -> u8;

    async fn get_block_power(&self) -> u8 {
        self.get_block_power_face(BlockFace::Itself).await
    }

    async fn is_empty(&self) -> bool {
        self.get_type().await.is_air()
    }

    /// Water or lava.
    async fn is_liquid(&self) -> bool {
        self.get_type().await.is_liquid()
    }

    async fn get_temperature(&self) -> f64 {
        f64::from(self.get_biome().await.temperature())
    }

    async fn get_humidity(&self) -> f64 {
        f64::from(self.get_biome().await.downfall())
    }

    async fn get_piston_move_reaction(&self) -> PistonMoveReaction;

    async fn break_naturally(&self) -> bool {
        self.break_naturally_with(None).await
    }

    /// Breaks the block and spawns what `tool` would make it drop.
    ///
    /// Returns whether the block was destroyed.
    async fn break_naturally_with(&self, tool: Option<&ItemStack>) -> bool;

    async fn get_drops(&self) -> Vec<ItemStack> {
        self.get_drops_with_tool(None).await
    }

    async fn get_drops_with_tool(&self, tool: Option<&ItemStack>) -> Vec<ItemStack>;

    async fn get_drops_for(&self, tool: &ItemStack, entity: Option<&dyn Entity>) -> Vec<ItemStack>;

    /// Whether entities can walk through the block.
    async fn is_passable(&self) -> bool;

    /// Traces a ray against this block only, using [`Block::get_bounding_box`].
    ///
    /// Air is never hit. Liquids are hit as full blocks as allowed by
    /// `fluid_collision_mode`; a liquid is a source when its `level` is 0 or unset.
    /// Hosts with compound collision shapes should override this.
    async fn ray_trace(
        &self,
        start: &Location,
        direction: Vector3<f64>,
        max_distance: f64,
        fluid_collision_mode: FluidCollisionMode,
    ) -> Option<RayTraceResult> {
        if let Some(world) = start.get_world() {
            if world.get_name() != self.get_world().get_name() {
                return None;
            }
        }

        let material = self.get_type().await;
        if material.is_air() {
            return None;
        }

        let position = self.get_position();
        let bounds = if material.is_liquid() {
            match fluid_collision_mode {
                FluidCollisionMode::Never => return None,
                FluidCollisionMode::SourceOnly => {
                    let data = self.get_block_data().await;
                    if !matches!(data.get_property("level"), None | Some("0")) {
                        return None;
                    }
                    BoundingBox::from_block(&position)
                }
                FluidCollisionMode::Always => BoundingBox::from_block(&position),
            }
        } else {
            self.get_bounding_box().await
        };

        // Blocks without a collision shape report a zero-volume box.
        if bounds.volume() <= 0.0 {
            return None;
        }

        let hit = bounds.ray_trace(start.to_vector(), direction, max_distance)?;
        Some(RayTraceResult::new(
            hit.position,
            Some(position),
            BlockFace::from_offset(hit.normal).filter(BlockFace::is_cartesian),
        ))
    }

    /// World-space collision box. Zero-volume at the block's corner for blocks without one.
    async fn get_bounding_box(&self) -> BoundingBox;
}
