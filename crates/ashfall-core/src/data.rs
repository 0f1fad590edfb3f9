//! Embedded starter table: the item and recipe set every session begins with.
//!
//! The set is data, not logic: it lives in `data/starter.json` and is
//! deserialized at session start, so alternative tables can be loaded the
//! same way.

use serde::Deserialize;

use crate::error::CoreResult;
use crate::item::{ItemCatalog, ItemDefinition};
use crate::recipe::{Recipe, RecipeBook};

/// Canonical names of the starter items, as used by the action rules.
pub mod names {
    /// Wild berries, low-value food.
    pub const BERRIES: &str = "Berries";
    /// Hunt yield; risky to eat uncooked.
    pub const RAW_MEAT: &str = "Raw Meat";
    /// Cooked hunt yield.
    pub const COOKED_MEAT: &str = "Cooked Meat";
    /// Untreated water; risky to drink.
    pub const RAINWATER: &str = "Rainwater";
    /// Boiled, safe water.
    pub const PURIFIED_WATER: &str = "Purified Water";
    /// Starter weapon and tool.
    pub const CRUDE_KNIFE: &str = "Crude Knife";
    /// Craftable weapon.
    pub const WOODEN_SPEAR: &str = "Wooden Spear";
    /// Craftable tool.
    pub const STONE_AXE: &str = "Stone Axe";
    /// Raises fire-making odds while held.
    pub const LIGHTER: &str = "Lighter";
    /// Basic building and fire material.
    pub const WOOD: &str = "Wood";
    /// Basic toolmaking material.
    pub const STONE: &str = "Stone";
    /// Binding material.
    pub const ROPE: &str = "Rope";
}

const STARTER_TABLE: &str = include_str!("../data/starter.json");

#[derive(Debug, Deserialize)]
struct StarterTable {
    items: Vec<ItemDefinition>,
    recipes: Vec<Recipe>,
}

/// Build the starter catalog and recipe book from the embedded table.
pub fn load_starter() -> CoreResult<(ItemCatalog, RecipeBook)> {
    let table: StarterTable = serde_json::from_str(STARTER_TABLE)?;

    let mut catalog = ItemCatalog::new();
    for definition in table.items {
        catalog.register(definition)?;
    }

    let mut recipes = RecipeBook::new();
    for recipe in table.recipes {
        recipes.register(recipe)?;
    }

    Ok((catalog, recipes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_table_loads() {
        let (catalog, recipes) = load_starter().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn starter_items_have_expected_stats() {
        let (catalog, _) = load_starter().unwrap();

        let berries = catalog.get(names::BERRIES).unwrap();
        assert!(berries.is_food);
        assert_eq!(berries.hunger_value, 5.0);
        assert_eq!(berries.thirst_value, 2.0);

        let knife = catalog.get(names::CRUDE_KNIFE).unwrap();
        assert!(knife.is_weapon);
        assert!(knife.is_tool);
        assert_eq!(knife.durability, 50);

        let cooked = catalog.get(names::COOKED_MEAT).unwrap();
        assert_eq!(cooked.hunger_value, 30.0);

        let rope = catalog.get(names::ROPE).unwrap();
        assert!(!rope.is_food && !rope.is_drinkable && !rope.is_weapon && !rope.is_tool);
        assert!((rope.weight - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn starter_recipes_reference_registered_items() {
        let (catalog, recipes) = load_starter().unwrap();
        for recipe in recipes.recipes() {
            assert!(catalog.contains(&recipe.output), "{}", recipe.output);
            for material in recipe.materials.keys() {
                assert!(catalog.contains(material), "{material}");
            }
        }
    }

    #[test]
    fn axe_recipe_materials() {
        let (_, recipes) = load_starter().unwrap();
        let axe = recipes.get(names::STONE_AXE).unwrap();
        assert_eq!(axe.materials["Stone"], 2);
        assert_eq!(axe.materials["Wood"], 1);
        assert_eq!(axe.materials["Rope"], 1);
    }
}
