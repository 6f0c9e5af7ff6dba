use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

include!(concat!(env!("OUT_DIR"), "/material.rs"));

/// Static facts about a [`Material`], generated from `assets/material.json`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProperties {
    pub block: bool,
    pub item: bool,
    pub solid: bool,
    pub transparent: bool,
    pub flammable: bool,
    pub burnable: bool,
    pub occluding: bool,
    pub gravity: bool,
    pub liquid: bool,
    pub air: bool,
    pub legacy: bool,
    pub max_stack_size: u8,
    pub max_durability: u16,
    pub hardness: f32,
    pub blast_resistance: f32,
}

impl Material {
    /// Lenient lookup for user input: strips the `minecraft:` namespace, upper-cases,
    /// turns whitespace runs into underscores and drops any other non-word character.
    pub fn match_material(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("minecraft:").unwrap_or(name);

        let mut filtered = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for c in name.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    filtered.push('_');
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;
            if c.is_ascii_alphanumeric() || c == '_' {
                filtered.push(c.to_ascii_uppercase());
            }
        }
        Self::from_name(&filtered)
    }

    pub const fn is_block(&self) -> bool {
        self.properties().block
    }

    pub const fn is_item(&self) -> bool {
        self.properties().item
    }

    pub const fn is_solid(&self) -> bool {
        self.properties().solid
    }

    pub const fn is_transparent(&self) -> bool {
        self.properties().transparent
    }

    pub const fn is_flammable(&self) -> bool {
        self.properties().flammable
    }

    pub const fn is_burnable(&self) -> bool {
        self.properties().burnable
    }

    pub const fn is_occluding(&self) -> bool {
        self.properties().occluding
    }

    pub const fn has_gravity(&self) -> bool {
        self.properties().gravity
    }

    pub const fn is_liquid(&self) -> bool {
        self.properties().liquid
    }

    pub const fn is_air(&self) -> bool {
        self.properties().air
    }

    /// Legacy materials only exist for plugins written against numeric ids.
    pub const fn is_legacy(&self) -> bool {
        self.properties().legacy
    }

    pub const fn max_stack_size(&self) -> u8 {
        self.properties().max_stack_size
    }

    pub const fn max_durability(&self) -> u16 {
        self.properties().max_durability
    }

    /// Negative for unbreakable blocks.
    pub const fn hardness(&self) -> f32 {
        self.properties().hardness
    }

    pub const fn blast_resistance(&self) -> f32 {
        self.properties().blast_resistance
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Material {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Material {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::match_material(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown material {name}")))
    }
}
