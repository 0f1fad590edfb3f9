//! Crafting recipes keyed by their output item.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A crafting recipe: the materials consumed to produce one output item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Name of the item this recipe produces.
    pub output: String,
    /// Material name -> quantity consumed.
    pub materials: HashMap<String, u32>,
}

/// Registry of known recipes, keyed by output name.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    /// Create an empty recipe book.
    pub fn new() -> Self {
        Self {
            recipes: HashMap::new(),
        }
    }

    /// Register a recipe. Fails if a recipe for the output already exists.
    pub fn register(&mut self, recipe: Recipe) -> CoreResult<()> {
        if self.recipes.contains_key(&recipe.output) {
            return Err(CoreError::DuplicateRecipe(recipe.output));
        }
        self.recipes.insert(recipe.output.clone(), recipe);
        Ok(())
    }

    /// Look up the recipe producing `output`, if one is known.
    pub fn get(&self, output: &str) -> Option<&Recipe> {
        self.recipes.get(output)
    }

    /// Iterate over all known recipes (unordered).
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Number of known recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if no recipes are known.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
