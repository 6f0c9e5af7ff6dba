use std::fmt;

use lantern_data::Material;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

use super::ItemStack;

/// Durability marking a representative stack that stands for several variants.
pub const ANY_VARIANT: i16 = i16::MAX;

/// A potential item match within a recipe.
///
/// All choices within a recipe must be satisfied for it to be craftable.
/// Only the API provides implementations; plugins should not implement this.
pub trait RecipeChoice: fmt::Debug + fmt::Display + Send + Sync {
    /// Whether `item` satisfies this choice.
    fn test(&self, item: &ItemStack) -> bool;

    /// A single stack representative of this choice.
    #[deprecated(note = "for compatibility only")]
    fn get_item_stack(&self) -> ItemStack;

    fn clone_box(&self) -> Box<dyn RecipeChoice>;
}

impl Clone for Box<dyn RecipeChoice> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A choice of multiple matching materials.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<Vec<Material>>", into = "Vec<Material>")]
pub struct MaterialChoice {
    choices: Vec<Material>,
}

impl MaterialChoice {
    pub fn new(choices: Vec<Material>) -> Result<Self, ApiError> {
        if choices.is_empty() {
            return Err(ApiError::invalid_argument("Must have at least one choice"));
        }
        Ok(Self { choices })
    }

    /// Read-only view of the accepted materials, in the order they were given.
    pub fn get_choices(&self) -> &[Material] {
        &self.choices
    }
}

impl RecipeChoice for MaterialChoice {
    fn test(&self, item: &ItemStack) -> bool {
        let item_type = item.get_type();
        self.choices.iter().any(|choice| *choice == item_type)
    }

    fn get_item_stack(&self) -> ItemStack {
        let mut stack = ItemStack::new(self.choices[0]);

        // Older consumers read this as "any variant".
        if self.choices.len() > 1 {
            stack.set_durability(ANY_VARIANT);
        }

        stack
    }

    fn clone_box(&self) -> Box<dyn RecipeChoice> {
        Box::new(self.clone())
    }
}

impl TryFrom<Vec<Material>> for MaterialChoice {
    type Error = ApiError;

    fn try_from(choices: Vec<Material>) -> Result<Self, Self::Error> {
        Self::new(choices)
    }
}

impl TryFrom<Option<Vec<Material>>> for MaterialChoice {
    type Error = ApiError;

    fn try_from(choices: Option<Vec<Material>>) -> Result<Self, Self::Error> {
        let choices = choices.ok_or_else(|| ApiError::invalid_argument("choices"))?;
        Self::new(choices)
    }
}

impl From<MaterialChoice> for Vec<Material> {
    fn from(choice: MaterialChoice) -> Self {
        choice.choices
    }
}

impl fmt::Display for MaterialChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MaterialChoice{choices=[")?;
        for (index, choice) in self.choices.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{choice}")?;
        }
        f.write_str("]}")
    }
}
