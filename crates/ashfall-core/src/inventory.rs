//! The player's bounded-weight item container.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::item::ItemCatalog;

/// Default carrying capacity in kilograms.
pub const DEFAULT_MAX_WEIGHT: f64 = 20.0;

/// A weight-bounded container mapping item name to held quantity.
///
/// Entries are removed when they reach zero, so a held quantity is always
/// positive. `current_weight` tracks the weight-sum of all entries and
/// never exceeds `max_weight`; an add that would break the cap is
/// rejected without mutating anything.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: HashMap<String, u32>,
    current_weight: f64,
    max_weight: f64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WEIGHT)
    }
}

impl Inventory {
    /// Create an empty inventory with the given weight capacity.
    pub fn new(max_weight: f64) -> Self {
        Self {
            items: HashMap::new(),
            current_weight: 0.0,
            max_weight,
        }
    }

    /// Add `quantity` units of the named item.
    ///
    /// All-or-nothing: fails with [`CoreError::CapacityExceeded`] and
    /// leaves the inventory untouched if the resulting weight would pass
    /// the cap, or with [`CoreError::UnknownItem`] if the name is not in
    /// the catalog.
    pub fn add(&mut self, catalog: &ItemCatalog, name: &str, quantity: u32) -> CoreResult<()> {
        let definition = catalog.get(name)?;
        let added_weight = definition.weight * f64::from(quantity);
        if self.current_weight + added_weight > self.max_weight {
            return Err(CoreError::CapacityExceeded {
                item: name.to_string(),
                quantity,
            });
        }
        *self.items.entry(name.to_string()).or_insert(0) += quantity;
        self.current_weight += added_weight;
        Ok(())
    }

    /// Remove `quantity` units of the named item.
    ///
    /// Fails with [`CoreError::InsufficientQuantity`] and leaves the
    /// inventory untouched if fewer units are held.
    pub fn remove(&mut self, catalog: &ItemCatalog, name: &str, quantity: u32) -> CoreResult<()> {
        let definition = catalog.get(name)?;
        let held = self.items.get(name).copied().unwrap_or(0);
        if held < quantity {
            return Err(CoreError::InsufficientQuantity {
                item: name.to_string(),
                requested: quantity,
                held,
            });
        }
        if held == quantity {
            self.items.remove(name);
        } else if let Some(entry) = self.items.get_mut(name) {
            *entry -= quantity;
        }
        self.current_weight -= definition.weight * f64::from(quantity);
        Ok(())
    }

    /// Returns `true` iff at least `quantity` units of the item are held.
    pub fn has(&self, name: &str, quantity: u32) -> bool {
        self.items.get(name).copied().unwrap_or(0) >= quantity
    }

    /// How many units of the named item are held.
    pub fn quantity(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Iterate over held stacks as `(name, quantity)` (unordered).
    pub fn stacks(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Current weight-sum of all held items in kilograms.
    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    /// Carrying capacity in kilograms.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns `true` if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
