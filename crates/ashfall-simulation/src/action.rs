//! Player actions and their resolution rules.
//!
//! Each action is atomic: it either fully succeeds or fails without
//! consuming resources. The one exception is fire-making,
//! which burns its fuel even when the lighting attempt fails.

use ashfall_core::data::names;
use ashfall_core::player::Skill;

use crate::context::ActionContext;
use crate::environment::Weather;

/// A player-initiated command, resolved by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Eat one unit of a food item.
    Eat(String),
    /// Drink one unit of a drinkable item.
    Drink(String),
    /// Rest for the given number of hours.
    Rest(u32),
    /// Build a shelter from 5 Wood and 2 Rope.
    BuildShelter,
    /// Light a fire from 3 Wood.
    MakeFire,
    /// Cook an item over the fire.
    Cook(String),
    /// Hunt for raw meat.
    Hunt,
    /// Search the surroundings for resources.
    Forage,
    /// Craft an item from a known recipe.
    Craft(String),
    /// Boil one Rainwater into Purified Water.
    PurifyWater,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eat(name) => write!(f, "eat {name}"),
            Self::Drink(name) => write!(f, "drink {name}"),
            Self::Rest(hours) => write!(f, "rest {hours}h"),
            Self::BuildShelter => write!(f, "build shelter"),
            Self::MakeFire => write!(f, "make fire"),
            Self::Cook(name) => write!(f, "cook {name}"),
            Self::Hunt => write!(f, "hunt"),
            Self::Forage => write!(f, "forage"),
            Self::Craft(name) => write!(f, "craft {name}"),
            Self::PurifyWater => write!(f, "purify water"),
        }
    }
}

/// The outcome of one action call.
#[derive(Debug, Clone)]
pub struct ActionReport {
    /// Whether the action achieved its goal. Probabilistic misses
    /// (failed hunts, failed fire attempts) count as failures even when
    /// their costs were charged.
    pub success: bool,
    /// Messages generated by this call, oldest first.
    pub messages: Vec<String>,
}

/// Resolve an action against the given context. Returns success.
pub fn resolve(action: &Action, ctx: &mut ActionContext<'_>) -> bool {
    match action {
        Action::Eat(name) => eat(ctx, name),
        Action::Drink(name) => drink(ctx, name),
        Action::Rest(hours) => rest(ctx, *hours),
        Action::BuildShelter => build_shelter(ctx),
        Action::MakeFire => make_fire(ctx),
        Action::Cook(name) => cook(ctx, name),
        Action::Hunt => hunt(ctx),
        Action::Forage => forage(ctx),
        Action::Craft(name) => craft(ctx, name),
        Action::PurifyWater => purify_water(ctx),
    }
}

fn eat(ctx: &mut ActionContext<'_>, name: &str) -> bool {
    if !ctx.player.inventory.has(name, 1) {
        ctx.say(format!("You don't have any {name}."));
        return false;
    }
    let (is_food, hunger_value, thirst_value) = match ctx.catalog.get(name) {
        Ok(def) => (def.is_food, def.hunger_value, def.thirst_value),
        Err(_) => (false, 0.0, 0.0),
    };
    if !is_food {
        ctx.say(format!("{name} is not edible."));
        return false;
    }
    if !ctx.take(name, 1) {
        return false;
    }

    ctx.player.adjust_hunger(hunger_value);
    ctx.player.adjust_thirst(thirst_value);
    ctx.say(format!("You ate {name}."));

    if name == names::RAW_MEAT && ctx.rng.chance() < 0.3 {
        ctx.player.adjust_health(-10.0);
        ctx.say("You feel unwell after eating raw meat.");
    }
    true
}

fn drink(ctx: &mut ActionContext<'_>, name: &str) -> bool {
    if !ctx.player.inventory.has(name, 1) {
        ctx.say(format!("You don't have any {name}."));
        return false;
    }
    let (is_drinkable, thirst_value) = match ctx.catalog.get(name) {
        Ok(def) => (def.is_drinkable, def.thirst_value),
        Err(_) => (false, 0.0),
    };
    if !is_drinkable {
        ctx.say(format!("{name} is not drinkable."));
        return false;
    }
    if !ctx.take(name, 1) {
        return false;
    }

    ctx.player.adjust_thirst(thirst_value);
    ctx.say(format!("You drank {name}."));

    if name == names::RAINWATER && ctx.rng.chance() < 0.2 {
        ctx.player.adjust_health(-5.0);
        ctx.say("That water may not have been clean enough...");
    }
    true
}

fn rest(ctx: &mut ActionContext<'_>, hours: u32) -> bool {
    let hours_f = f64::from(hours);
    if !ctx.player.has_shelter && ctx.rng.chance() < 0.5 {
        ctx.say("Your sleep was disturbed and you could not rest properly.");
        ctx.player.adjust_energy(hours_f * 5.0);
    } else {
        ctx.player.adjust_energy(hours_f * 10.0);
        ctx.say(format!("You rested for {hours} hours."));
    }

    // Resting still burns through food and water.
    ctx.player.adjust_hunger(-hours_f);
    ctx.player.adjust_thirst(-hours_f * 1.5);
    true
}

const SHELTER_MATERIALS: [(&str, u32); 2] = [(names::WOOD, 5), (names::ROPE, 2)];

fn build_shelter(ctx: &mut ActionContext<'_>) -> bool {
    if ctx.player.has_shelter {
        ctx.say("You already built a shelter.");
        return false;
    }
    for (material, quantity) in SHELTER_MATERIALS {
        if !ctx.player.inventory.has(material, quantity) {
            ctx.say(format!(
                "You need {quantity} {material} to build a shelter."
            ));
            return false;
        }
    }
    for (material, quantity) in SHELTER_MATERIALS {
        if !ctx.take(material, quantity) {
            return false;
        }
    }

    ctx.player.has_shelter = true;
    ctx.player.adjust_energy(-20.0);
    ctx.say("You built a simple but sturdy shelter!");
    true
}

fn make_fire(ctx: &mut ActionContext<'_>) -> bool {
    if ctx.player.has_fire {
        ctx.say("You already have a fire burning.");
        return false;
    }
    if !ctx.player.inventory.has(names::WOOD, 3) {
        ctx.say(format!("You need 3 {} to make a fire.", names::WOOD));
        return false;
    }

    let has_lighter = ctx.player.inventory.has(names::LIGHTER, 1);
    // The wood is committed before the attempt; a failed try wastes it.
    if !ctx.take(names::WOOD, 3) {
        return false;
    }

    let success_chance = if has_lighter { 0.9 } else { 0.5 };
    if ctx.rng.chance() < success_chance {
        ctx.player.has_fire = true;
        ctx.player.fire_duration = 8.0;
        ctx.player.adjust_energy(-10.0);
        ctx.say("You got a fire going!");
        true
    } else {
        ctx.say("You failed to light the fire.");
        false
    }
}

fn cook(ctx: &mut ActionContext<'_>, name: &str) -> bool {
    if !ctx.player.has_fire {
        ctx.say("You need a fire to cook.");
        return false;
    }
    if name == names::RAW_MEAT && ctx.player.inventory.has(name, 1) {
        if !ctx.take(names::RAW_MEAT, 1) {
            return false;
        }
        ctx.give_up_to(names::COOKED_MEAT, 1);
        ctx.say("You cooked the raw meat.");
        ctx.player.improve_skill(Skill::Cooking, 0.1);
        true
    } else {
        ctx.say(format!("You can't cook {name}."));
        false
    }
}

fn hunt(ctx: &mut ActionContext<'_>) -> bool {
    if ctx.player.energy() < 20.0 {
        ctx.say("You're too tired to hunt.");
        return false;
    }

    let mut success_chance = 0.3 + 0.1 * ctx.player.skill(Skill::Hunting);
    if ctx.player.holds_weapon(ctx.catalog) {
        success_chance += 0.2;
    }

    let caught = ctx.rng.chance() < success_chance;
    if caught {
        let quantity = ctx.rng.roll_range(1, 3);
        ctx.give_up_to(names::RAW_MEAT, quantity);
        ctx.say(format!(
            "Hunt successful! You got {quantity} pieces of raw meat."
        ));
        ctx.player.improve_skill(Skill::Hunting, 0.2);
    } else {
        ctx.say("You found nothing to hunt.");
    }

    // Charged win or lose.
    ctx.player.adjust_energy(-20.0);
    ctx.player.adjust_hunger(-5.0);
    ctx.player.adjust_thirst(-10.0);
    caught
}

fn forage(ctx: &mut ActionContext<'_>) -> bool {
    if ctx.player.energy() < 15.0 {
        ctx.say("You're too tired to forage.");
        return false;
    }

    let mut found: Vec<String> = Vec::new();
    if ctx.env.weather != Weather::Stormy {
        if ctx.rng.chance() < 0.7 {
            let quantity = ctx.rng.roll_range(1, 3);
            ctx.give_up_to(names::WOOD, quantity);
            found.push(format!("{quantity} {}", names::WOOD));
        }
        if ctx.rng.chance() < 0.5 {
            let quantity = ctx.rng.roll_range(1, 2);
            ctx.give_up_to(names::STONE, quantity);
            found.push(format!("{quantity} {}", names::STONE));
        }
        if ctx.rng.chance() < 0.3 {
            ctx.give_up_to(names::ROPE, 1);
            found.push(format!("1 {}", names::ROPE));
        }
        if ctx.rng.chance() < 0.4 {
            let quantity = ctx.rng.roll_range(1, 4);
            ctx.give_up_to(names::BERRIES, quantity);
            found.push(format!("{quantity} {}", names::BERRIES));
        }
        // Standing water only collects while it rains.
        if ctx.env.weather == Weather::Rainy && ctx.rng.chance() < 0.8 {
            let quantity = ctx.rng.roll_range(1, 2);
            ctx.give_up_to(names::RAINWATER, quantity);
            found.push(format!("{quantity} {}", names::RAINWATER));
        }
    }

    if found.is_empty() {
        ctx.say("You found nothing of interest.");
    } else {
        ctx.say(format!("You found: {}", found.join(", ")));
    }

    ctx.player.adjust_energy(-15.0);
    ctx.player.adjust_hunger(-3.0);
    ctx.player.adjust_thirst(-7.0);
    !found.is_empty()
}

fn craft(ctx: &mut ActionContext<'_>, name: &str) -> bool {
    let Some(recipe) = ctx.recipes.get(name) else {
        ctx.say(format!("You don't know how to craft {name}."));
        return false;
    };

    for (material, quantity) in &recipe.materials {
        if !ctx.player.inventory.has(material, *quantity) {
            ctx.say(format!("You need {quantity} {material} to craft {name}."));
            return false;
        }
    }
    for (material, quantity) in &recipe.materials {
        if !ctx.take(material, *quantity) {
            return false;
        }
    }

    ctx.give_up_to(name, 1);
    ctx.say(format!("You crafted {name}!"));
    ctx.player.improve_skill(Skill::Construction, 0.2);
    ctx.player.adjust_energy(-10.0);
    true
}

fn purify_water(ctx: &mut ActionContext<'_>) -> bool {
    if !ctx.player.has_fire {
        ctx.say("You need a fire to purify water.");
        return false;
    }
    if !ctx.player.inventory.has(names::RAINWATER, 1) {
        ctx.say("You have no rainwater to purify.");
        return false;
    }
    if !ctx.take(names::RAINWATER, 1) {
        return false;
    }
    ctx.give_up_to(names::PURIFIED_WATER, 1);
    ctx.say("You purified rainwater into drinking water.");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashfall_core::data;
    use ashfall_core::item::ItemCatalog;
    use ashfall_core::player::{MAX_STAT, Player};
    use ashfall_core::recipe::RecipeBook;

    use crate::environment::Environment;
    use crate::rng::ScriptedSource;

    struct Fixture {
        catalog: ItemCatalog,
        recipes: RecipeBook,
        player: Player,
        env: Environment,
        rng: ScriptedSource,
    }

    impl Fixture {
        fn new() -> Self {
            let (catalog, recipes) = data::load_starter().unwrap();
            Self {
                catalog,
                recipes,
                player: Player::new("Test", 10),
                env: Environment::new(0.1),
                rng: ScriptedSource::default(),
            }
        }

        fn with_rng(mut self, rng: ScriptedSource) -> Self {
            self.rng = rng;
            self
        }

        fn give(&mut self, name: &str, quantity: u32) {
            self.player.inventory.add(&self.catalog, name, quantity).unwrap();
        }

        fn resolve(&mut self, action: &Action) -> ActionReport {
            let mut ctx = ActionContext::new(
                &mut self.player,
                &self.env,
                &self.catalog,
                &self.recipes,
                &mut self.rng,
            );
            let success = resolve(action, &mut ctx);
            let messages = ctx.into_messages();
            ActionReport { success, messages }
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- eat / drink --------------------------------------------------

    #[test]
    fn eat_consumes_one_unit_and_restores() {
        let mut fix = Fixture::new();
        fix.give(names::BERRIES, 2);
        fix.player.adjust_hunger(-50.0);
        fix.player.adjust_thirst(-50.0);

        let report = fix.resolve(&Action::Eat(names::BERRIES.into()));
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::BERRIES), 1);
        assert!(close(fix.player.hunger(), 55.0));
        assert!(close(fix.player.thirst(), 52.0));
    }

    #[test]
    fn eat_unheld_item_changes_nothing() {
        let mut fix = Fixture::new();
        let report = fix.resolve(&Action::Eat(names::BERRIES.into()));
        assert!(!report.success);
        assert_eq!(report.messages, vec!["You don't have any Berries.".to_string()]);
        assert!(close(fix.player.hunger(), MAX_STAT));
    }

    #[test]
    fn eat_non_food_is_rejected() {
        let mut fix = Fixture::new();
        fix.give(names::STONE, 1);
        let report = fix.resolve(&Action::Eat(names::STONE.into()));
        assert!(!report.success);
        assert_eq!(report.messages, vec!["Stone is not edible.".to_string()]);
        assert_eq!(fix.player.inventory.quantity(names::STONE), 1);
    }

    #[test]
    fn raw_meat_can_sicken() {
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.1]));
        fix.give(names::RAW_MEAT, 1);
        let report = fix.resolve(&Action::Eat(names::RAW_MEAT.into()));
        assert!(report.success);
        assert!(close(fix.player.health(), 90.0));
        assert_eq!(report.messages.len(), 2);
    }

    #[test]
    fn raw_meat_consumes_one_unit_either_way() {
        for draw in [0.1, 0.9] {
            let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![draw]));
            fix.give(names::RAW_MEAT, 3);
            fix.player.adjust_hunger(-MAX_STAT);
            let report = fix.resolve(&Action::Eat(names::RAW_MEAT.into()));
            assert!(report.success);
            assert_eq!(fix.player.inventory.quantity(names::RAW_MEAT), 2);
            assert!(fix.player.hunger() >= 0.0);
            assert!(fix.player.thirst() >= 0.0);
        }
    }

    #[test]
    fn rainwater_can_sicken() {
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.19]));
        fix.give(names::RAINWATER, 1);
        fix.player.adjust_thirst(-60.0);
        let report = fix.resolve(&Action::Drink(names::RAINWATER.into()));
        assert!(report.success);
        assert!(close(fix.player.thirst(), 60.0));
        assert!(close(fix.player.health(), 95.0));
    }

    #[test]
    fn purified_water_is_always_safe() {
        // No draw is consumed for purified water; an ever-ill script
        // proves the illness branch is never taken.
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.0]));
        fix.give(names::PURIFIED_WATER, 1);
        let report = fix.resolve(&Action::Drink(names::PURIFIED_WATER.into()));
        assert!(report.success);
        assert!(close(fix.player.health(), MAX_STAT));
    }

    #[test]
    fn drink_non_drinkable_is_rejected() {
        let mut fix = Fixture::new();
        fix.give(names::BERRIES, 1);
        let report = fix.resolve(&Action::Drink(names::BERRIES.into()));
        assert!(!report.success);
        assert_eq!(report.messages, vec!["Berries is not drinkable.".to_string()]);
    }

    // -- rest ---------------------------------------------------------

    #[test]
    fn disturbed_rest_recovers_less() {
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.4]));
        fix.player.adjust_energy(-60.0);
        let report = fix.resolve(&Action::Rest(8));
        assert!(report.success);
        assert!(close(fix.player.energy(), 80.0)); // 40 + 8*5
        assert!(close(fix.player.hunger(), 92.0));
        assert!(close(fix.player.thirst(), 88.0));
    }

    #[test]
    fn sheltered_rest_is_never_disturbed() {
        // Shelter short-circuits the disturbance draw entirely.
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.0]));
        fix.player.has_shelter = true;
        fix.player.adjust_energy(-60.0);
        let report = fix.resolve(&Action::Rest(4));
        assert!(report.success);
        assert!(close(fix.player.energy(), 80.0)); // 40 + 4*10
    }

    // -- shelter / fire -----------------------------------------------

    #[test]
    fn build_shelter_consumes_materials() {
        let mut fix = Fixture::new();
        fix.give(names::WOOD, 6);
        fix.give(names::ROPE, 2);
        let report = fix.resolve(&Action::BuildShelter);
        assert!(report.success);
        assert!(fix.player.has_shelter);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 1);
        assert_eq!(fix.player.inventory.quantity(names::ROPE), 0);
        assert!(close(fix.player.energy(), 80.0));
    }

    #[test]
    fn build_shelter_missing_rope_consumes_nothing() {
        let mut fix = Fixture::new();
        fix.give(names::WOOD, 5);
        let report = fix.resolve(&Action::BuildShelter);
        assert!(!report.success);
        assert_eq!(report.messages, vec!["You need 2 Rope to build a shelter.".to_string()]);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 5);
        assert!(close(fix.player.energy(), MAX_STAT));
    }

    #[test]
    fn second_shelter_is_rejected() {
        let mut fix = Fixture::new();
        fix.player.has_shelter = true;
        fix.give(names::WOOD, 5);
        fix.give(names::ROPE, 2);
        let report = fix.resolve(&Action::BuildShelter);
        assert!(!report.success);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 5);
    }

    #[test]
    fn failed_fire_still_burns_the_wood() {
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.7]));
        fix.give(names::WOOD, 3);
        let report = fix.resolve(&Action::MakeFire);
        assert!(!report.success);
        assert!(!fix.player.has_fire);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 0);
        assert_eq!(
            report.messages,
            vec!["You failed to light the fire.".to_string()]
        );
        // Energy is only spent on a successful lighting.
        assert!(close(fix.player.energy(), MAX_STAT));
    }

    #[test]
    fn lighter_raises_fire_odds() {
        // A 0.7 draw fails bare-handed (0.5) but succeeds with a
        // lighter (0.9).
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.7]));
        fix.give(names::WOOD, 3);
        fix.give(names::LIGHTER, 1);
        let report = fix.resolve(&Action::MakeFire);
        assert!(report.success);
        assert!(fix.player.has_fire);
        assert!(close(fix.player.fire_duration, 8.0));
        assert!(close(fix.player.energy(), 90.0));
    }

    #[test]
    fn fire_without_wood_is_rejected() {
        let mut fix = Fixture::new();
        fix.give(names::WOOD, 2);
        let report = fix.resolve(&Action::MakeFire);
        assert!(!report.success);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 2);
    }

    #[test]
    fn second_fire_is_rejected_while_burning() {
        let mut fix = Fixture::new();
        fix.player.has_fire = true;
        fix.give(names::WOOD, 3);
        let report = fix.resolve(&Action::MakeFire);
        assert!(!report.success);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 3);
    }

    // -- cook / purify ------------------------------------------------

    #[test]
    fn cook_turns_raw_into_cooked() {
        let mut fix = Fixture::new();
        fix.player.has_fire = true;
        fix.give(names::RAW_MEAT, 2);
        let report = fix.resolve(&Action::Cook(names::RAW_MEAT.into()));
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::RAW_MEAT), 1);
        assert_eq!(fix.player.inventory.quantity(names::COOKED_MEAT), 1);
        assert!(close(fix.player.skill(Skill::Cooking), 1.1));
    }

    #[test]
    fn cook_needs_a_fire() {
        let mut fix = Fixture::new();
        fix.give(names::RAW_MEAT, 1);
        let report = fix.resolve(&Action::Cook(names::RAW_MEAT.into()));
        assert!(!report.success);
        assert_eq!(report.messages, vec!["You need a fire to cook.".to_string()]);
    }

    #[test]
    fn cook_rejects_other_items() {
        let mut fix = Fixture::new();
        fix.player.has_fire = true;
        fix.give(names::BERRIES, 1);
        let report = fix.resolve(&Action::Cook(names::BERRIES.into()));
        assert!(!report.success);
        assert_eq!(fix.player.inventory.quantity(names::BERRIES), 1);
    }

    #[test]
    fn purify_water_swaps_one_unit() {
        let mut fix = Fixture::new();
        fix.player.has_fire = true;
        fix.give(names::RAINWATER, 2);
        let report = fix.resolve(&Action::PurifyWater);
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::RAINWATER), 1);
        assert_eq!(fix.player.inventory.quantity(names::PURIFIED_WATER), 1);
    }

    #[test]
    fn purify_needs_fire_and_rainwater() {
        let mut fix = Fixture::new();
        fix.give(names::RAINWATER, 1);
        assert!(!fix.resolve(&Action::PurifyWater).success);

        let mut fix = Fixture::new();
        fix.player.has_fire = true;
        let report = fix.resolve(&Action::PurifyWater);
        assert!(!report.success);
        assert_eq!(
            report.messages,
            vec!["You have no rainwater to purify.".to_string()]
        );
    }

    // -- hunt ---------------------------------------------------------

    #[test]
    fn hunt_miss_still_charges_costs() {
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.9]));
        let report = fix.resolve(&Action::Hunt);
        assert!(!report.success);
        assert_eq!(report.messages, vec!["You found nothing to hunt.".to_string()]);
        assert!(close(fix.player.energy(), 80.0));
        assert!(close(fix.player.hunger(), 95.0));
        assert!(close(fix.player.thirst(), 90.0));
        assert_eq!(fix.player.inventory.quantity(names::RAW_MEAT), 0);
    }

    #[test]
    fn hunt_success_yields_meat_and_skill() {
        let mut fix = Fixture::new().with_rng(ScriptedSource::new(vec![0.2], vec![3]));
        let report = fix.resolve(&Action::Hunt);
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::RAW_MEAT), 3);
        assert!(close(fix.player.skill(Skill::Hunting), 1.2));
        assert!(close(fix.player.energy(), 80.0));
    }

    #[test]
    fn weapon_raises_hunt_odds() {
        // Base chance at skill 1.0 is 0.4; a 0.45 draw misses unarmed
        // and lands with a knife (+0.2).
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.45]));
        assert!(!fix.resolve(&Action::Hunt).success);

        let mut fix = Fixture::new().with_rng(ScriptedSource::new(vec![0.45], vec![1]));
        fix.give(names::CRUDE_KNIFE, 1);
        assert!(fix.resolve(&Action::Hunt).success);
    }

    #[test]
    fn exhausted_hunter_is_turned_back() {
        let mut fix = Fixture::new();
        fix.player.adjust_energy(-85.0);
        let report = fix.resolve(&Action::Hunt);
        assert!(!report.success);
        assert_eq!(report.messages, vec!["You're too tired to hunt.".to_string()]);
        assert!(close(fix.player.energy(), 15.0));
    }

    // -- forage -------------------------------------------------------

    #[test]
    fn forage_collects_rolled_resources() {
        // Wood hits (2), stone misses, rope hits, berries miss.
        let mut fix = Fixture::new()
            .with_rng(ScriptedSource::new(vec![0.6, 0.6, 0.2, 0.6], vec![2]));
        let report = fix.resolve(&Action::Forage);
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 2);
        assert_eq!(fix.player.inventory.quantity(names::ROPE), 1);
        assert_eq!(fix.player.inventory.quantity(names::STONE), 0);
        assert_eq!(report.messages, vec!["You found: 2 Wood, 1 Rope".to_string()]);
        assert!(close(fix.player.energy(), 85.0));
        assert!(close(fix.player.hunger(), 97.0));
        assert!(close(fix.player.thirst(), 93.0));
    }

    #[test]
    fn rain_allows_water_collection() {
        let mut fix = Fixture::new()
            .with_rng(ScriptedSource::new(vec![0.9, 0.9, 0.9, 0.9, 0.5], vec![2]));
        fix.env.weather = Weather::Rainy;
        let report = fix.resolve(&Action::Forage);
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::RAINWATER), 2);
        assert_eq!(report.messages, vec!["You found: 2 Rainwater".to_string()]);
    }

    #[test]
    fn storm_forage_finds_nothing_but_still_costs() {
        // No draws happen at all in a storm.
        let mut fix = Fixture::new().with_rng(ScriptedSource::chances(vec![0.0]));
        fix.env.weather = Weather::Stormy;
        let report = fix.resolve(&Action::Forage);
        assert!(!report.success);
        assert_eq!(
            report.messages,
            vec!["You found nothing of interest.".to_string()]
        );
        assert!(close(fix.player.energy(), 85.0));
        assert!(fix.player.inventory.is_empty());
    }

    #[test]
    fn all_rolls_missing_finds_nothing() {
        let mut fix = Fixture::new()
            .with_rng(ScriptedSource::chances(vec![0.9, 0.9, 0.9, 0.9]));
        let report = fix.resolve(&Action::Forage);
        assert!(!report.success);
        assert_eq!(
            report.messages,
            vec!["You found nothing of interest.".to_string()]
        );
    }

    // -- craft --------------------------------------------------------

    #[test]
    fn craft_knife_consumes_exact_materials() {
        let mut fix = Fixture::new();
        fix.give(names::STONE, 1);
        fix.give(names::WOOD, 1);
        let report = fix.resolve(&Action::Craft(names::CRUDE_KNIFE.into()));
        assert!(report.success);
        assert_eq!(fix.player.inventory.quantity(names::STONE), 0);
        assert_eq!(fix.player.inventory.quantity(names::WOOD), 0);
        assert_eq!(fix.player.inventory.quantity(names::CRUDE_KNIFE), 1);
        assert!(close(fix.player.skill(Skill::Construction), 1.2));
        assert!(close(fix.player.energy(), 90.0));
    }

    #[test]
    fn craft_with_missing_material_changes_nothing() {
        let mut fix = Fixture::new();
        fix.give(names::STONE, 1);
        let report = fix.resolve(&Action::Craft(names::CRUDE_KNIFE.into()));
        assert!(!report.success);
        assert_eq!(fix.player.inventory.quantity(names::STONE), 1);
        assert_eq!(fix.player.inventory.quantity(names::CRUDE_KNIFE), 0);
        assert!(close(fix.player.skill(Skill::Construction), 1.0));
        assert!(close(fix.player.energy(), MAX_STAT));
    }

    #[test]
    fn craft_unknown_recipe_is_rejected() {
        let mut fix = Fixture::new();
        let report = fix.resolve(&Action::Craft("Longbow".into()));
        assert!(!report.success);
        assert_eq!(
            report.messages,
            vec!["You don't know how to craft Longbow.".to_string()]
        );
    }

    #[test]
    fn craft_axe_uses_three_materials() {
        let mut fix = Fixture::new();
        fix.give(names::STONE, 2);
        fix.give(names::WOOD, 1);
        fix.give(names::ROPE, 1);
        let report = fix.resolve(&Action::Craft(names::STONE_AXE.into()));
        assert!(report.success);
        assert!(fix.player.inventory.has(names::STONE_AXE, 1));
        assert_eq!(fix.player.inventory.quantity(names::STONE), 0);
        assert_eq!(fix.player.inventory.quantity(names::ROPE), 0);
    }

    // -- display ------------------------------------------------------

    #[test]
    fn actions_display_naturally() {
        assert_eq!(Action::Hunt.to_string(), "hunt");
        assert_eq!(Action::Rest(8).to_string(), "rest 8h");
        assert_eq!(Action::Eat("Berries".into()).to_string(), "eat Berries");
    }
}
