use std::fmt;

use lantern_data::Material;
use serde::{Deserialize, Serialize};

/// A quantity of one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    material: Material,
    amount: u8,
    /// Damage for tools, variant for legacy data items.
    durability: i16,
}

impl ItemStack {
    /// A single item of `material`.
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self::with_amount(material, 1)
    }

    #[must_use]
    pub fn with_amount(material: Material, amount: u8) -> Self {
        Self {
            material,
            amount,
            durability: 0,
        }
    }

    pub fn get_type(&self) -> Material {
        self.material
    }

    pub fn set_type(&mut self, material: Material) {
        self.material = material;
    }

    pub fn get_amount(&self) -> u8 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: u8) {
        self.amount = amount;
    }

    pub fn get_durability(&self) -> i16 {
        self.durability
    }

    pub fn set_durability(&mut self, durability: i16) {
        self.durability = durability;
    }

    pub fn get_max_stack_size(&self) -> u8 {
        self.material.max_stack_size()
    }

    /// Air stacks and stacks with nothing in them.
    pub fn is_empty(&self) -> bool {
        self.material.is_air() || self.amount == 0
    }

    /// Same item ignoring how many of it there are.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.material == other.material && self.durability == other.durability
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemStack{{{} x {}", self.material, self.amount)?;
        if self.durability != 0 {
            write!(f, ", durability={}", self.durability)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use lantern_data::Material;

    use super::ItemStack;

    #[test]
    fn single_item_defaults() {
        let stack = ItemStack::new(Material::Stone);
        assert_eq!(stack.get_type(), Material::Stone);
        assert_eq!(stack.get_amount(), 1);
        assert_eq!(stack.get_durability(), 0);
        assert_eq!(stack.get_max_stack_size(), 64);
        assert!(!stack.is_empty());
    }

    #[test]
    fn empty_stacks() {
        assert!(ItemStack::new(Material::Air).is_empty());
        assert!(ItemStack::with_amount(Material::Stone, 0).is_empty());
    }

    #[test]
    fn similarity_ignores_amount() {
        let a = ItemStack::with_amount(Material::IronPickaxe, 1);
        let mut b = ItemStack::with_amount(Material::IronPickaxe, 3);
        assert!(a.is_similar(&b));
        assert_ne!(a, b);
        b.set_durability(10);
        assert!(!a.is_similar(&b));
    }

    #[test]
    fn display() {
        let mut stack = ItemStack::with_amount(Material::Dirt, 5);
        assert_eq!(stack.to_string(), "ItemStack{DIRT x 5}");
        stack.set_durability(i16::MAX);
        assert_eq!(stack.to_string(), "ItemStack{DIRT x 5, durability=32767}");
    }
}
