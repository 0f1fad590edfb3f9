//! The player character: vital stats, skills, and owned state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::item::ItemCatalog;
use crate::log::MessageLog;

/// Upper bound for health, hunger, thirst, and energy.
pub const MAX_STAT: f64 = 100.0;

/// Normal body temperature in degrees Celsius.
pub const NOMINAL_TEMPERATURE: f64 = 37.0;

/// A learnable skill. Levels start at 1.0 and only ever rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// General survival aptitude.
    Survival,
    /// Raises hunting success odds.
    Hunting,
    /// Raised by crafting.
    Construction,
    /// Raised by cooking.
    Cooking,
    /// Fighting aptitude.
    Combat,
}

impl Skill {
    /// All skills, in display order.
    pub fn all() -> [Skill; 5] {
        [
            Self::Survival,
            Self::Hunting,
            Self::Construction,
            Self::Cooking,
            Self::Combat,
        ]
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Survival => write!(f, "Survival"),
            Self::Hunting => write!(f, "Hunting"),
            Self::Construction => write!(f, "Construction"),
            Self::Cooking => write!(f, "Cooking"),
            Self::Combat => write!(f, "Combat"),
        }
    }
}

/// The single player character of a session.
///
/// Vital stats are clamped to `[0, MAX_STAT]` by their mutators; body
/// temperature is unclamped (deviation from nominal is what hurts).
/// All mutation goes through the simulation engine; other components
/// only ever see `&Player`.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    health: f64,
    hunger: f64,
    thirst: f64,
    energy: f64,
    body_temperature: f64,
    skills: HashMap<Skill, f64>,
    /// Whether a shelter has been built this session.
    pub has_shelter: bool,
    /// Whether a fire is currently burning.
    pub has_fire: bool,
    /// Hours of burn time left on the current fire.
    pub fire_duration: f64,
    /// Everything the player carries.
    pub inventory: Inventory,
    log: MessageLog,
}

impl Player {
    /// Create a fresh, fully-rested player with an empty inventory.
    pub fn new(name: impl Into<String>, max_messages: usize) -> Self {
        let skills = Skill::all().iter().map(|s| (*s, 1.0)).collect();
        Self {
            name: name.into(),
            health: MAX_STAT,
            hunger: MAX_STAT,
            thirst: MAX_STAT,
            energy: MAX_STAT,
            body_temperature: NOMINAL_TEMPERATURE,
            skills,
            has_shelter: false,
            has_fire: false,
            fire_duration: 0.0,
            inventory: Inventory::default(),
            log: MessageLog::new(max_messages),
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health in `[0, MAX_STAT]`.
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Current hunger in `[0, MAX_STAT]` (0 = starving).
    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    /// Current thirst in `[0, MAX_STAT]` (0 = parched).
    pub fn thirst(&self) -> f64 {
        self.thirst
    }

    /// Current energy in `[0, MAX_STAT]`.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Current body temperature in degrees Celsius.
    pub fn body_temperature(&self) -> f64 {
        self.body_temperature
    }

    /// Add `delta` (may be negative) to health, clamped to `[0, MAX_STAT]`.
    pub fn adjust_health(&mut self, delta: f64) {
        self.health = (self.health + delta).clamp(0.0, MAX_STAT);
    }

    /// Add `delta` (may be negative) to hunger, clamped to `[0, MAX_STAT]`.
    pub fn adjust_hunger(&mut self, delta: f64) {
        self.hunger = (self.hunger + delta).clamp(0.0, MAX_STAT);
    }

    /// Add `delta` (may be negative) to thirst, clamped to `[0, MAX_STAT]`.
    pub fn adjust_thirst(&mut self, delta: f64) {
        self.thirst = (self.thirst + delta).clamp(0.0, MAX_STAT);
    }

    /// Add `delta` (may be negative) to energy, clamped to `[0, MAX_STAT]`.
    pub fn adjust_energy(&mut self, delta: f64) {
        self.energy = (self.energy + delta).clamp(0.0, MAX_STAT);
    }

    /// Set body temperature directly. Not clamped.
    pub fn set_body_temperature(&mut self, value: f64) {
        self.body_temperature = value;
    }

    /// Current level of a skill.
    pub fn skill(&self, skill: Skill) -> f64 {
        self.skills.get(&skill).copied().unwrap_or(1.0)
    }

    /// Raise a skill by `amount`. Negative amounts are ignored, since skill
    /// levels are monotonically non-decreasing.
    pub fn improve_skill(&mut self, skill: Skill, amount: f64) {
        if amount > 0.0 {
            *self.skills.entry(skill).or_insert(1.0) += amount;
        }
    }

    /// Append a message to the player's log.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    /// The bounded message log.
    pub fn message_log(&self) -> &MessageLog {
        &self.log
    }

    /// Returns `true` while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Returns `true` if any held item is flagged as a weapon.
    pub fn holds_weapon(&self, catalog: &ItemCatalog) -> bool {
        self.inventory
            .stacks()
            .any(|(name, _)| catalog.get(name).is_ok_and(|def| def.is_weapon))
    }
}
