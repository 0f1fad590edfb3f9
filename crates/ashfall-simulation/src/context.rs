//! Mutable context handed to action resolution.

use ashfall_core::item::ItemCatalog;
use ashfall_core::player::Player;
use ashfall_core::recipe::RecipeBook;

use crate::environment::Environment;
use crate::rng::RandomSource;

/// Borrowed view of the simulation state for resolving a single action.
///
/// Messages recorded with [`say`](Self::say) land both in the player's
/// bounded log and in the per-call buffer returned to the caller.
pub struct ActionContext<'a> {
    /// The player performing the action.
    pub player: &'a mut Player,
    /// The environment the action happens in (read-only).
    pub env: &'a Environment,
    /// Item definitions.
    pub catalog: &'a ItemCatalog,
    /// Known crafting recipes.
    pub recipes: &'a RecipeBook,
    /// Randomness for probabilistic outcomes.
    pub rng: &'a mut dyn RandomSource,
    messages: Vec<String>,
}

impl<'a> ActionContext<'a> {
    /// Borrow the parts of a simulation needed to resolve one action.
    pub fn new(
        player: &'a mut Player,
        env: &'a Environment,
        catalog: &'a ItemCatalog,
        recipes: &'a RecipeBook,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            player,
            env,
            catalog,
            recipes,
            rng,
            messages: Vec::new(),
        }
    }

    /// Record a message for the player log and the action report.
    pub fn say(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.player.log(message.clone());
        self.messages.push(message);
    }

    /// Remove items the caller has already checked for; returns `false`
    /// without side effects if they are missing after all.
    pub fn take(&mut self, name: &str, quantity: u32) -> bool {
        self.player
            .inventory
            .remove(self.catalog, name, quantity)
            .is_ok()
    }

    /// Add up to `quantity` units one at a time, stopping silently at
    /// the weight cap. Yields past the cap are simply lost.
    pub fn give_up_to(&mut self, name: &str, quantity: u32) -> u32 {
        let mut given = 0;
        for _ in 0..quantity {
            if self.player.inventory.add(self.catalog, name, 1).is_err() {
                break;
            }
            given += 1;
        }
        given
    }

    /// Consume the context, yielding the messages recorded by the call.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
