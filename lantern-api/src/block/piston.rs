use serde::{Deserialize, Serialize};

/// How a block reacts to being pushed or pulled by a piston.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PistonMoveReaction {
    /// Moved along with the piston.
    Move,
    /// Dropped when pushed.
    Break,
    /// Stops the piston from extending.
    Block,
    /// Ignored by the piston, e.g. entities.
    Ignore,
    /// Can be pushed but not pulled.
    PushOnly,
}

impl PistonMoveReaction {
    #[deprecated(note = "magic value")]
    pub fn get_id(&self) -> u8 {
        match self {
            Self::Move => 0,
            Self::Break => 1,
            Self::Block => 2,
            Self::Ignore => 3,
            Self::PushOnly => 4,
        }
    }

    #[deprecated(note = "magic value")]
    pub fn get_by_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Move),
            1 => Some(Self::Break),
            2 => Some(Self::Block),
            3 => Some(Self::Ignore),
            4 => Some(Self::PushOnly),
            _ => None,
        }
    }
}
