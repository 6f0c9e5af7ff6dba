use lantern_data::Material;

use crate::error::ApiError;

use super::{ItemStack, MaterialChoice, RecipeChoice};

/// Largest crafting grid is 3x3.
pub const MAX_INGREDIENTS: usize = 9;

/// A recipe whose ingredients may sit anywhere in the crafting grid.
#[derive(Debug, Clone)]
pub struct ShapelessRecipe {
    key: String,
    result: ItemStack,
    ingredients: Vec<Box<dyn RecipeChoice>>,
}

impl ShapelessRecipe {
    #[must_use]
    pub fn new(key: impl Into<String>, result: ItemStack) -> Self {
        Self {
            key: key.into(),
            result,
            ingredients: Vec::new(),
        }
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn get_result(&self) -> ItemStack {
        self.result
    }

    pub fn get_choice_list(&self) -> &[Box<dyn RecipeChoice>] {
        &self.ingredients
    }

    pub fn add_ingredient_choice(
        &mut self,
        choice: Box<dyn RecipeChoice>,
    ) -> Result<&mut Self, ApiError> {
        if self.ingredients.len() >= MAX_INGREDIENTS {
            return Err(ApiError::invalid_argument(
                "Shapeless recipes cannot have more than 9 ingredients",
            ));
        }
        self.ingredients.push(choice);
        Ok(self)
    }

    /// Adds `count` ingredients that each accept exactly `material`.
    pub fn add_ingredient(&mut self, count: usize, material: Material) -> Result<&mut Self, ApiError> {
        if count > MAX_INGREDIENTS - self.ingredients.len() {
            return Err(ApiError::invalid_argument(
                "Shapeless recipes cannot have more than 9 ingredients",
            ));
        }
        for _ in 0..count {
            self.ingredients
                .push(Box::new(MaterialChoice::new(vec![material])?));
        }
        Ok(self)
    }

    /// Whether the non-empty stacks of `grid` can be paired one-to-one with the
    /// ingredients so that every ingredient accepts its stack.
    pub fn matches(&self, grid: &[ItemStack]) -> bool {
        let stacks: Vec<&ItemStack> = grid.iter().filter(|stack| !stack.is_empty()).collect();
        if self.ingredients.is_empty() || stacks.len() != self.ingredients.len() {
            return false;
        }
        let mut used = vec![false; stacks.len()];
        self.assign(0, &stacks, &mut used)
    }

    // Backtracking is fine for at most nine ingredients.
    fn assign(&self, ingredient: usize, stacks: &[&ItemStack], used: &mut [bool]) -> bool {
        let Some(choice) = self.ingredients.get(ingredient) else {
            return true;
        };
        for (index, stack) in stacks.iter().enumerate() {
            if used[index] || !choice.test(stack) {
                continue;
            }
            used[index] = true;
            if self.assign(ingredient + 1, stacks, used) {
                return true;
            }
            used[index] = false;
        }
        false
    }
}
