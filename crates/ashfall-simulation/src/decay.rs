//! Passive per-tick decay of the player's vital stats.

use ashfall_core::player::{NOMINAL_TEMPERATURE, Player};

use crate::environment::{Environment, TimeOfDay, Weather};

/// Apply one tick of passive decay.
///
/// Order matters: temperature adjustments (weather, night, fire,
/// shelter) happen before the temperature-deviation health penalty is
/// evaluated, within the same tick. The stat mutators clamp to
/// `[0, 100]`, so the final clamp is inherent.
pub fn apply(player: &mut Player, env: &Environment) {
    let ts = env.time_scale;

    player.adjust_hunger(-0.05 * ts);
    player.adjust_thirst(-0.1 * ts);
    player.adjust_energy(-0.03 * ts);

    match env.weather {
        Weather::Snowy => player.set_body_temperature(player.body_temperature() - 0.02 * ts),
        Weather::Rainy => player.set_body_temperature(player.body_temperature() - 0.01 * ts),
        _ => {}
    }
    if env.time_of_day == TimeOfDay::Night {
        player.set_body_temperature(player.body_temperature() - 0.01 * ts);
    }

    if player.has_fire {
        player.set_body_temperature((player.body_temperature() + 0.02).min(NOMINAL_TEMPERATURE));
    }

    if player.has_shelter {
        if player.body_temperature() < NOMINAL_TEMPERATURE {
            player
                .set_body_temperature((player.body_temperature() + 0.005).min(NOMINAL_TEMPERATURE));
        }
        if env.time_of_day == TimeOfDay::Night {
            player.adjust_energy(0.05);
        }
    }

    if player.hunger() <= 0.0 {
        player.adjust_health(-0.1 * ts);
    }
    if player.thirst() <= 0.0 {
        player.adjust_health(-0.2 * ts);
    }
    if (player.body_temperature() - NOMINAL_TEMPERATURE).abs() > 2.0 {
        player.adjust_health(-0.05 * ts);
    }
}
