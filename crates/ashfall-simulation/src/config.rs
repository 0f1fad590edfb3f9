/// Configuration for a simulation session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for a reproducible session.
    pub seed: u64,
    /// Multiplier on per-tick decay and clock probabilities.
    pub time_scale: f64,
    /// Message log capacity (oldest entries dropped when exceeded).
    pub max_messages: usize,
    /// Name given to the player character.
    pub player_name: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 0.1,
            max_messages: 10,
            player_name: "Survivor".to_string(),
        }
    }
}

impl SimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the time-scale multiplier.
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Set the message log capacity (0 = unlimited).
    pub fn with_max_messages(mut self, max: usize) -> Self {
        self.max_messages = max;
        self
    }

    /// Set the player character's name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = SimConfig::default();
        assert_eq!(config.seed, 42);
        assert!((config.time_scale - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.max_messages, 10);
        assert_eq!(config.player_name, "Survivor");
    }

    #[test]
    fn builder_chain() {
        let config = SimConfig::default()
            .with_seed(7)
            .with_time_scale(1.5)
            .with_max_messages(50)
            .with_player_name("Ranger");
        assert_eq!(config.seed, 7);
        assert!((config.time_scale - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.max_messages, 50);
        assert_eq!(config.player_name, "Ranger");
    }
}
