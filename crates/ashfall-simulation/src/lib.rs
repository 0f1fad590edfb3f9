//! Tick-based survival simulation engine for Ashfall.
//!
//! Drives the data model from [`ashfall_core`]: a [`Simulation`] owns
//! the player, environment, catalog, and recipes, advances them one
//! discrete tick at a time, and resolves player actions with
//! probabilistic outcomes. Nothing here blocks or keeps wall-clock
//! time; the caller controls the tick cadence, and a presentation
//! layer of any kind can read the state back for display.

/// Player actions and their resolution rules.
pub mod action;
/// Configuration for a simulation session.
pub mod config;
/// Mutable context handed to action resolution.
pub mod context;
/// Passive per-tick decay of the player's vital stats.
pub mod decay;
/// Day count, time of day, and weather.
pub mod environment;
/// The simulation engine and terminal condition.
pub mod engine;
/// Error types for the simulation crate.
pub mod error;
/// Injectable randomness.
pub mod rng;

/// Re-export of action types.
pub use action::{Action, ActionReport};
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-export of [`context::ActionContext`].
pub use context::ActionContext;
/// Re-export of engine types.
pub use engine::{GameOver, Simulation};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of environment types.
pub use environment::{Environment, TimeOfDay, Weather};
/// Re-export of randomness types.
pub use rng::{RandomSource, ScriptedSource, SeededSource};
