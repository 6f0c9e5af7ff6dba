use std::fmt;

use lantern_util::math::vector3::Vector3;
use serde::{Deserialize, Serialize};

/// Direction from a block to one of its neighbours. North is -Z, east is +X.
#[derive(PartialEq, Clone, Copy, Debug, Hash, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockFace {
    North,
    East,
    South,
    West,
    Up,
    Down,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    WestNorthWest,
    NorthNorthWest,
    NorthNorthEast,
    EastNorthEast,
    EastSouthEast,
    SouthSouthEast,
    SouthSouthWest,
    WestSouthWest,
    #[serde(rename = "SELF")]
    Itself,
}

impl BlockFace {
    /// Every face in declaration order.
    pub const VALUES: [BlockFace; 19] = [
        BlockFace::North,
        BlockFace::East,
        BlockFace::South,
        BlockFace::West,
        BlockFace::Up,
        BlockFace::Down,
        BlockFace::NorthEast,
        BlockFace::NorthWest,
        BlockFace::SouthEast,
        BlockFace::SouthWest,
        BlockFace::WestNorthWest,
        BlockFace::NorthNorthWest,
        BlockFace::NorthNorthEast,
        BlockFace::EastNorthEast,
        BlockFace::EastSouthEast,
        BlockFace::SouthSouthEast,
        BlockFace::SouthSouthWest,
        BlockFace::WestSouthWest,
        BlockFace::Itself,
    ];

    pub fn cartesian() -> [BlockFace; 6] {
        [
            BlockFace::North,
            BlockFace::East,
            BlockFace::South,
            BlockFace::West,
            BlockFace::Up,
            BlockFace::Down,
        ]
    }

    pub fn horizontal() -> [BlockFace; 4] {
        [
            BlockFace::North,
            BlockFace::East,
            BlockFace::South,
            BlockFace::West,
        ]
    }

    pub fn to_offset(&self) -> Vector3<i32> {
        match self {
            BlockFace::North => (0, 0, -1),
            BlockFace::East => (1, 0, 0),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::Down => (0, -1, 0),
            BlockFace::NorthEast => (1, 0, -1),
            BlockFace::NorthWest => (-1, 0, -1),
            BlockFace::SouthEast => (1, 0, 1),
            BlockFace::SouthWest => (-1, 0, 1),
            BlockFace::WestNorthWest => (-2, 0, -1),
            BlockFace::NorthNorthWest => (-1, 0, -2),
            BlockFace::NorthNorthEast => (1, 0, -2),
            BlockFace::EastNorthEast => (2, 0, -1),
            BlockFace::EastSouthEast => (2, 0, 1),
            BlockFace::SouthSouthEast => (1, 0, 2),
            BlockFace::SouthSouthWest => (-1, 0, 2),
            BlockFace::WestSouthWest => (-2, 0, 1),
            BlockFace::Itself => (0, 0, 0),
        }
        .into()
    }

    pub fn get_mod_x(&self) -> i32 {
        self.to_offset().x
    }

    pub fn get_mod_y(&self) -> i32 {
        self.to_offset().y
    }

    pub fn get_mod_z(&self) -> i32 {
        self.to_offset().z
    }

    /// Unit vector pointing towards this face; zero for [`BlockFace::Itself`].
    pub fn get_direction(&self) -> Vector3<f64> {
        let offset = self.to_offset().to_f64();
        offset.normalize().unwrap_or(offset)
    }

    /// One of the six faces along an axis.
    pub fn is_cartesian(&self) -> bool {
        matches!(
            self,
            BlockFace::North
                | BlockFace::East
                | BlockFace::South
                | BlockFace::West
                | BlockFace::Up
                | BlockFace::Down
        )
    }

    pub fn opposite(&self) -> BlockFace {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::South => BlockFace::North,
            BlockFace::East => BlockFace::West,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
            BlockFace::NorthEast => BlockFace::SouthWest,
            BlockFace::SouthWest => BlockFace::NorthEast,
            BlockFace::NorthWest => BlockFace::SouthEast,
            BlockFace::SouthEast => BlockFace::NorthWest,
            BlockFace::WestNorthWest => BlockFace::EastSouthEast,
            BlockFace::EastSouthEast => BlockFace::WestNorthWest,
            BlockFace::NorthNorthWest => BlockFace::SouthSouthEast,
            BlockFace::SouthSouthEast => BlockFace::NorthNorthWest,
            BlockFace::NorthNorthEast => BlockFace::SouthSouthWest,
            BlockFace::SouthSouthWest => BlockFace::NorthNorthEast,
            BlockFace::EastNorthEast => BlockFace::WestSouthWest,
            BlockFace::WestSouthWest => BlockFace::EastNorthEast,
            BlockFace::Itself => BlockFace::Itself,
        }
    }

    /// The first face (in declaration order) whose offset equals `offset`.
    pub fn from_offset(offset: Vector3<i32>) -> Option<BlockFace> {
        Self::VALUES
            .into_iter()
            .find(|face| face.to_offset() == offset)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockFace::North => "NORTH",
            BlockFace::East => "EAST",
            BlockFace::South => "SOUTH",
            BlockFace::West => "WEST",
            BlockFace::Up => "UP",
            BlockFace::Down => "DOWN",
            BlockFace::NorthEast => "NORTH_EAST",
            BlockFace::NorthWest => "NORTH_WEST",
            BlockFace::SouthEast => "SOUTH_EAST",
            BlockFace::SouthWest => "SOUTH_WEST",
            BlockFace::WestNorthWest => "WEST_NORTH_WEST",
            BlockFace::NorthNorthWest => "NORTH_NORTH_WEST",
            BlockFace::NorthNorthEast => "NORTH_NORTH_EAST",
            BlockFace::EastNorthEast => "EAST_NORTH_EAST",
            BlockFace::EastSouthEast => "EAST_SOUTH_EAST",
            BlockFace::SouthSouthEast => "SOUTH_SOUTH_EAST",
            BlockFace::SouthSouthWest => "SOUTH_SOUTH_WEST",
            BlockFace::WestSouthWest => "WEST_SOUTH_WEST",
            BlockFace::Itself => "SELF",
        }
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
