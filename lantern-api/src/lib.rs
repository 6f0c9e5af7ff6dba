pub mod block;
pub mod entity;
pub mod error;
pub mod inventory;
pub mod location;
pub mod logging;
pub mod metadata;
pub mod plugin;
pub mod ray_trace;
pub mod world;

#[cfg(test)]
mod test_host;

pub use block::{Block, BlockData, BlockFace, BlockState};
pub use error::ApiError;
pub use lantern_data::{Biome, Material};
pub use location::Location;
pub use plugin::{Context, Plugin, PluginMetadata};
pub use world::{Chunk, World};
