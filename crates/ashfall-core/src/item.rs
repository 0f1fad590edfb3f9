//! Item definitions and the name-indexed catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

fn default_durability() -> u32 {
    100
}

/// An immutable item definition.
///
/// Capability flags are independent booleans rather than a type
/// hierarchy: a single item can be both a weapon and a tool (the crude
/// knife), or food that also quenches thirst (berries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique name, the catalog key.
    pub name: String,
    /// Weight in kilograms of one unit.
    pub weight: f64,
    /// Flavor text shown by the presentation layer.
    #[serde(default)]
    pub description: String,
    /// Whether the item can be eaten.
    #[serde(default)]
    pub is_food: bool,
    /// Whether the item can be drunk.
    #[serde(default)]
    pub is_drinkable: bool,
    /// Whether holding the item improves hunting odds.
    #[serde(default)]
    pub is_weapon: bool,
    /// Whether the item counts as a tool.
    #[serde(default)]
    pub is_tool: bool,
    /// Hunger restored when eaten.
    #[serde(default)]
    pub hunger_value: f64,
    /// Thirst restored when eaten or drunk.
    #[serde(default)]
    pub thirst_value: f64,
    /// Damage dealt when used as a weapon.
    #[serde(default)]
    pub damage: f64,
    /// Advisory durability; no wear rule consumes it.
    #[serde(default = "default_durability")]
    pub durability: u32,
}

/// Name-indexed registry of item definitions.
///
/// Populated once at session start and read-only afterward; there is no
/// removal API.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDefinition>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Register a definition. Fails if the name is already taken.
    pub fn register(&mut self, definition: ItemDefinition) -> CoreResult<()> {
        if self.items.contains_key(&definition.name) {
            return Err(CoreError::DuplicateItem(definition.name));
        }
        self.items.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> CoreResult<&ItemDefinition> {
        self.items
            .get(name)
            .ok_or_else(|| CoreError::UnknownItem(name.to_string()))
    }

    /// Returns `true` if a definition with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Iterate over all registered definitions (unordered).
    pub fn definitions(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berries() -> ItemDefinition {
        ItemDefinition {
            name: "Berries".to_string(),
            weight: 0.1,
            description: String::new(),
            is_food: true,
            is_drinkable: false,
            is_weapon: false,
            is_tool: false,
            hunger_value: 5.0,
            thirst_value: 2.0,
            damage: 0.0,
            durability: 100,
        }
    }

    #[test]
    fn register_and_get() {
        let mut catalog = ItemCatalog::new();
        catalog.register(berries()).unwrap();
        let def = catalog.get("Berries").unwrap();
        assert!(def.is_food);
        assert!((def.weight - 0.1).abs() < f64::EPSILON);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut catalog = ItemCatalog::new();
        catalog.register(berries()).unwrap();
        let err = catalog.register(berries()).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateItem(name) if name == "Berries"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unknown_item_lookup_fails() {
        let catalog = ItemCatalog::new();
        let err = catalog.get("Obsidian").unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(name) if name == "Obsidian"));
        assert!(!catalog.contains("Obsidian"));
    }

    #[test]
    fn definition_deserializes_with_defaults() {
        let def: ItemDefinition =
            serde_json::from_str(r#"{ "name": "Wood", "weight": 1.0 }"#).unwrap();
        assert_eq!(def.name, "Wood");
        assert!(!def.is_food);
        assert_eq!(def.durability, 100);
        assert_eq!(def.hunger_value, 0.0);
    }
}
