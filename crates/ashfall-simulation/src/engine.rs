//! The top-level simulation orchestrator.

use ashfall_core::data::{self, names};
use ashfall_core::error::CoreResult;
use ashfall_core::item::ItemCatalog;
use ashfall_core::player::Player;
use ashfall_core::recipe::RecipeBook;

use crate::action::{self, Action, ActionReport};
use crate::config::SimConfig;
use crate::context::ActionContext;
use crate::decay;
use crate::environment::{Environment, Weather};
use crate::error::SimResult;
use crate::rng::{RandomSource, SeededSource};

/// Ticks the engine fast-forwards per hour of rest.
const TICKS_PER_REST_HOUR: u64 = 10;

/// Terminal condition: the player's health reached zero.
///
/// Reported by [`Simulation::advance_tick`], never thrown. The engine
/// does not restart on its own; the caller decides what happens next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    /// Days survived when the session ended.
    pub days_survived: u32,
    /// Tick at which the session ended.
    pub tick: u64,
}

/// Owns all session state and drives the tick and action entry points.
///
/// Single-threaded and synchronous: nothing advances unless the caller
/// invokes [`advance_tick`](Self::advance_tick) or
/// [`perform_action`](Self::perform_action), and collaborators only
/// ever read state through the accessors.
pub struct Simulation {
    player: Player,
    environment: Environment,
    catalog: ItemCatalog,
    recipes: RecipeBook,
    rng: Box<dyn RandomSource>,
    ticks: u64,
    config: SimConfig,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.ticks)
            .field("day", &self.environment.days_survived)
            .field("health", &self.player.health())
            .finish()
    }
}

impl Simulation {
    /// Create a session with the production RNG seeded from the config.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let rng = Box::new(SeededSource::new(config.seed));
        Self::with_random_source(config, rng)
    }

    /// Create a session with an injected random source.
    pub fn with_random_source(
        config: SimConfig,
        rng: Box<dyn RandomSource>,
    ) -> SimResult<Self> {
        let (catalog, recipes) = data::load_starter()?;
        let player = spawn_player(&config, &catalog)?;
        let environment = Environment::new(config.time_scale);
        Ok(Self {
            player,
            environment,
            catalog,
            recipes,
            rng,
            ticks: 0,
            config,
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// Progresses the clock and weather, burns the fire down, applies
    /// passive stat decay, and reports the terminal condition once
    /// health reaches zero.
    pub fn advance_tick(&mut self) -> Option<GameOver> {
        self.ticks += 1;
        let time_scale = self.environment.time_scale;

        if self.rng.chance() < 0.05 * time_scale {
            let new_day = self.environment.advance_phase();
            if new_day {
                let day = self.environment.days_survived;
                self.player.log(format!("Day {day}"));

                if self.rng.chance() < 0.3 {
                    let weathers = Weather::all();
                    let pick = self.rng.roll_range(0, weathers.len() as u32 - 1);
                    self.environment.weather = weathers[pick as usize];
                    self.player
                        .log(format!("The weather turns: {}", self.environment.weather));
                }
            }
        }

        if self.player.has_fire {
            self.player.fire_duration -= 0.1 * time_scale;
            if self.player.fire_duration <= 0.0 {
                self.player.has_fire = false;
                self.player.fire_duration = 0.0;
                self.player.log("The fire went out.");
            }
        }

        decay::apply(&mut self.player, &self.environment);

        if self.player.is_alive() {
            None
        } else {
            Some(GameOver {
                days_survived: self.environment.days_survived,
                tick: self.ticks,
            })
        }
    }

    /// Advance up to `n` ticks, stopping early on game over.
    pub fn run(&mut self, n: u64) -> Option<GameOver> {
        for _ in 0..n {
            if let Some(game_over) = self.advance_tick() {
                return Some(game_over);
            }
        }
        None
    }

    /// Resolve a player-initiated action.
    ///
    /// Resting additionally fast-forwards the clock by ten ticks per
    /// hour; the caller observes only the final state.
    pub fn perform_action(&mut self, action: &Action) -> ActionReport {
        let mut ctx = ActionContext::new(
            &mut self.player,
            &self.environment,
            &self.catalog,
            &self.recipes,
            self.rng.as_mut(),
        );
        let success = action::resolve(action, &mut ctx);
        let messages = ctx.into_messages();

        if let Action::Rest(hours) = action {
            self.run(u64::from(*hours) * TICKS_PER_REST_HOUR);
        }

        ActionReport { success, messages }
    }

    /// Reset to a fresh player and environment.
    ///
    /// The catalog, recipes, and RNG stream carry over.
    pub fn restart(&mut self) -> SimResult<()> {
        self.player = spawn_player(&self.config, &self.catalog)?;
        self.environment = Environment::new(self.config.time_scale);
        self.ticks = 0;
        Ok(())
    }

    /// The player, for display.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The environment, for display.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The item catalog.
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// The known recipes.
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Ticks elapsed since session start (or the last restart).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `true` once the terminal condition has been reached.
    pub fn is_game_over(&self) -> bool {
        !self.player.is_alive()
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

/// Build the starting player: full stats plus the starter kit.
fn spawn_player(config: &SimConfig, catalog: &ItemCatalog) -> CoreResult<Player> {
    let mut player = Player::new(config.player_name.clone(), config.max_messages);
    player.inventory.add(catalog, names::CRUDE_KNIFE, 1)?;
    player.inventory.add(catalog, names::BERRIES, 2)?;
    player.inventory.add(catalog, names::RAINWATER, 1)?;
    player.log("You wake up in an unfamiliar forest. You must survive.");
    Ok(player)
}
