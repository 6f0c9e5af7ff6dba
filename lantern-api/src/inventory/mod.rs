mod item_stack;
mod recipe_choice;
mod shapeless;

pub use item_stack::ItemStack;
pub use recipe_choice::{MaterialChoice, RecipeChoice, ANY_VARIANT};
pub use shapeless::{ShapelessRecipe, MAX_INGREDIENTS};
