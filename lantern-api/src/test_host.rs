//! In-memory host used by the unit tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Weak,
    },
};

use async_trait::async_trait;
use lantern_data::{Biome, Material};
use lantern_util::math::{boundingbox::BoundingBox, position::BlockPos};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    block::{Block, BlockData, BlockFace, BlockState, PistonMoveReaction},
    entity::Entity,
    inventory::ItemStack,
    metadata::{MetadataStore, MetadataValue, Metadatable},
    world::{Chunk, World},
};

pub struct TestWorld {
    name: String,
    uid: Uuid,
    blocks: RwLock<HashMap<BlockPos, BlockData>>,
    biomes: RwLock<HashMap<BlockPos, Biome>>,
    power: RwLock<HashMap<BlockPos, u8>>,
    physics_updates: AtomicU32,
    metadata: MetadataStore,
    this: Weak<TestWorld>,
}

impl TestWorld {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            name: name.to_string(),
            uid: Uuid::new_v4(),
            blocks: RwLock::new(HashMap::new()),
            biomes: RwLock::new(HashMap::new()),
            power: RwLock::new(HashMap::new()),
            physics_updates: AtomicU32::new(0),
            metadata: MetadataStore::new(),
            this: this.clone(),
        })
    }

    fn arc(&self) -> Arc<TestWorld> {
        self.this.upgrade().expect("test world dropped")
    }

    pub fn block(&self, x: i32, y: i32, z: i32) -> Arc<TestBlock> {
        Arc::new(TestBlock {
            world: self.arc(),
            position: BlockPos::new(x, y, z),
        })
    }

    pub fn place(&self, x: i32, y: i32, z: i32, data: impl Into<BlockData>) {
        self.blocks.write().insert(BlockPos::new(x, y, z), data.into());
    }

    pub fn set_power(&self, x: i32, y: i32, z: i32, power: u8) {
        self.power.write().insert(BlockPos::new(x, y, z), power);
    }

    /// How many writes asked for a physics update.
    pub fn physics_updates(&self) -> u32 {
        self.physics_updates.load(Ordering::Relaxed)
    }

    fn data_at(&self, position: &BlockPos) -> BlockData {
        self.blocks
            .read()
            .get(position)
            .cloned()
            .unwrap_or_else(|| BlockData::new(Material::Air))
    }

    fn power_at(&self, position: &BlockPos) -> u8 {
        self.power.read().get(position).copied().unwrap_or(0)
    }
}

#[async_trait]
impl World for TestWorld {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_uid(&self) -> Uuid {
        self.uid
    }

    fn get_min_height(&self) -> i32 {
        -64
    }

    fn get_max_height(&self) -> i32 {
        320
    }

    async fn get_block_at(&self, x: i32, y: i32, z: i32) -> Arc<dyn Block> {
        self.block(x, y, z)
    }

    async fn get_chunk_at(&self, chunk_x: i32, chunk_z: i32) -> Arc<dyn Chunk> {
        Arc::new(TestChunk {
            world: self.arc(),
            x: chunk_x,
            z: chunk_z,
        })
    }
}

pub struct TestChunk {
    world: Arc<TestWorld>,
    x: i32,
    z: i32,
}

impl Chunk for TestChunk {
    fn get_x(&self) -> i32 {
        self.x
    }

    fn get_z(&self) -> i32 {
        self.z
    }

    fn get_world(&self) -> Arc<dyn World> {
        self.world.clone()
    }

    fn is_loaded(&self) -> bool {
        true
    }
}

pub struct TestBlock {
    world: Arc<TestWorld>,
    position: BlockPos,
}

impl TestBlock {
    fn subject(&self) -> String {
        let pos = self.position.0;
        MetadataStore::block_subject(&self.world.name, pos.x, pos.y, pos.z)
    }
}

impl Metadatable for TestBlock {
    fn set_metadata(&self, key: &str, value: MetadataValue) {
        self.world.metadata.set_metadata(&self.subject(), key, value);
    }

    fn get_metadata(&self, key: &str) -> Vec<MetadataValue> {
        self.world.metadata.get_metadata(&self.subject(), key)
    }

    fn has_metadata(&self, key: &str) -> bool {
        self.world.metadata.has_metadata(&self.subject(), key)
    }

    fn remove_metadata(&self, key: &str, owning_plugin: &str) {
        self.world
            .metadata
            .remove_metadata(&self.subject(), key, owning_plugin);
    }
}

#[async_trait]
impl Block for TestBlock {
    async fn get_data(&self) -> u8 {
        0
    }

    async fn get_block_data(&self) -> BlockData {
        self.world.data_at(&self.position)
    }

    async fn get_type(&self) -> Material {
        self.world.data_at(&self.position).get_material()
    }

    async fn get_light_level(&self) -> u8 {
        self.get_light_from_sky()
            .await
            .max(self.get_light_from_blocks().await)
    }

    async fn get_light_from_sky(&self) -> u8 {
        if self.position.0.y >= 63 {
            15
        } else {
            0
        }
    }

    async fn get_light_from_blocks(&self) -> u8 {
        match self.get_type().await {
            Material::Torch => 14,
            Material::Glowstone | Material::Lava => 15,
            _ => 0,
        }
    }

    fn get_world(&self) -> Arc<dyn World> {
        self.world.clone()
    }

    fn get_x(&self) -> i32 {
        self.position.0.x
    }

    fn get_y(&self) -> i32 {
        self.position.0.y
    }

    fn get_z(&self) -> i32 {
        self.position.0.z
    }

    async fn set_block_data_with_physics(&self, data: BlockData, apply_physics: bool) {
        if apply_physics {
            self.world.physics_updates.fetch_add(1, Ordering::Relaxed);
        }
        self.world.blocks.write().insert(self.position, data);
    }

    async fn set_type_with_physics(&self, material: Material, apply_physics: bool) {
        self.set_block_data_with_physics(BlockData::new(material), apply_physics)
            .await;
    }

    async fn get_state(&self) -> BlockState {
        BlockState::capture(self).await
    }

    async fn get_biome(&self) -> Biome {
        self.world
            .biomes
            .read()
            .get(&self.position)
            .copied()
            .unwrap_or(Biome::Plains)
    }

    async fn set_biome(&self, biome: Biome) {
        self.world.biomes.write().insert(self.position, biome);
    }

    async fn is_block_powered(&self) -> bool {
        self.world.power_at(&self.position) > 0
    }

    async fn is_block_indirectly_powered(&self) -> bool {
        for face in BlockFace::cartesian() {
            if self.is_block_face_indirectly_powered(face).await {
                return true;
            }
        }
        false
    }

    async fn is_block_face_powered(&self, face: BlockFace) -> bool {
        self.get_block_power_face(face).await > 0
    }

    async fn is_block_face_indirectly_powered(&self, face: BlockFace) -> bool {
        self.is_block_face_powered(face).await
    }

    async fn get_block_power_face(&self, face: BlockFace) -> u8 {
        self.world
            .power_at(&self.position.offset(face.to_offset()))
    }

    async fn get_piston_move_reaction(&self) -> PistonMoveReaction {
        match self.get_type().await {
            Material::Bedrock | Material::Obsidian => PistonMoveReaction::Block,
            Material::Torch | Material::RedstoneWire => PistonMoveReaction::Break,
            _ => PistonMoveReaction::Move,
        }
    }

    async fn break_naturally_with(&self, tool: Option<&ItemStack>) -> bool {
        if self.get_type().await.is_air() {
            return false;
        }
        let _ = self.get_drops_with_tool(tool).await;
        self.set_type(Material::Air).await;
        true
    }

    async fn get_drops_with_tool(&self, _tool: Option<&ItemStack>) -> Vec<ItemStack> {
        let material = self.get_type().await;
        if material.is_item() {
            vec![ItemStack::new(material)]
        } else {
            Vec::new()
        }
    }

    async fn get_drops_for(&self, tool: &ItemStack, _entity: Option<&dyn Entity>) -> Vec<ItemStack> {
        self.get_drops_with_tool(Some(tool)).await
    }

    async fn is_passable(&self) -> bool {
        !self.get_type().await.is_solid()
    }

    async fn get_bounding_box(&self) -> BoundingBox {
        if self.get_type().await.is_solid() {
            BoundingBox::from_block(&self.position)
        } else {
            BoundingBox::from_block_raw(&self.position)
        }
    }
}
