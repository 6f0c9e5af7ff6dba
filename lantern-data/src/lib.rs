pub mod biome;
pub mod material;

pub use biome::Biome;
pub use material::Material;
