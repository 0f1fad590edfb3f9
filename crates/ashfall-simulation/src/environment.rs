//! The world outside the player: day count, time of day, and weather.

/// One of four cyclic segments of a simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// Start of a new day.
    Morning,
    /// Midday.
    Afternoon,
    /// Dusk.
    Evening,
    /// Cold hours; shelter recovers energy now.
    Night,
}

impl TimeOfDay {
    /// All phases in cycle order.
    pub fn all() -> [TimeOfDay; 4] {
        [Self::Morning, Self::Afternoon, Self::Evening, Self::Night]
    }

    /// The phase following this one; Night wraps to Morning.
    pub fn next(self) -> Self {
        match self {
            Self::Morning => Self::Afternoon,
            Self::Afternoon => Self::Evening,
            Self::Evening => Self::Night,
            Self::Night => Self::Morning,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
            Self::Evening => write!(f, "Evening"),
            Self::Night => write!(f, "Night"),
        }
    }
}

/// Current weather. Affects body temperature and forage yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    /// Clear skies.
    Sunny,
    /// Overcast, no mechanical effect.
    Cloudy,
    /// Chills the body; rainwater can be collected.
    Rainy,
    /// Too dangerous to forage.
    Stormy,
    /// Chills the body fastest.
    Snowy,
}

impl Weather {
    /// All weathers; re-rolls pick uniformly from this set.
    pub fn all() -> [Weather; 5] {
        [
            Self::Sunny,
            Self::Cloudy,
            Self::Rainy,
            Self::Stormy,
            Self::Snowy,
        ]
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunny => write!(f, "Sunny"),
            Self::Cloudy => write!(f, "Cloudy"),
            Self::Rainy => write!(f, "Rainy"),
            Self::Stormy => write!(f, "Stormy"),
            Self::Snowy => write!(f, "Snowy"),
        }
    }
}

/// Session-wide environment state, advanced by the engine each tick.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Days survived so far; starts at 1, incremented on each Morning wrap.
    pub days_survived: u32,
    /// Current phase of the day.
    pub time_of_day: TimeOfDay,
    /// Current weather.
    pub weather: Weather,
    /// Multiplier on how fast decay and clock probabilities accumulate
    /// per tick.
    pub time_scale: f64,
}

impl Environment {
    /// A fresh environment: day 1, Morning, Sunny.
    pub fn new(time_scale: f64) -> Self {
        Self {
            days_survived: 1,
            time_of_day: TimeOfDay::Morning,
            weather: Weather::Sunny,
            time_scale,
        }
    }

    /// Advance to the next phase of the day.
    ///
    /// Returns `true` when the cycle wraps back to Morning, which also
    /// increments `days_survived`.
    pub fn advance_phase(&mut self) -> bool {
        self.time_of_day = self.time_of_day.next();
        if self.time_of_day == TimeOfDay::Morning {
            self.days_survived += 1;
            true
        } else {
            false
        }
    }
}
