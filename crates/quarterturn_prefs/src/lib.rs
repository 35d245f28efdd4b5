//! User preferences.
//!
//! Preferences are layered: the built-in defaults, then the user preferences
//! file, then environment variables starting with
//! [`persist::ENV_PREFIX`].

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use quarterturn_core::{EngineConfig, TurnTimes};
use serde::{Deserialize, Serialize};

pub mod persist;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).unwrap_or_else(|e| {
            log::error!("error loading default preferences: {e}");
            Preferences::default()
        });
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    /// How long moves take.
    pub timing: TimingPreferences,
    /// Limits on queued moves.
    pub queue: QueuePreferences,
    /// Animation bookkeeping.
    pub animation: AnimationPreferences,
}

/// Move durations, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimingPreferences {
    /// Duration of a move requested by the user.
    pub turn_time_ms: u32,
    /// Duration of a move during a shuffle.
    pub shuffle_turn_time_ms: u32,
}
impl Default for TimingPreferences {
    fn default() -> Self {
        let TurnTimes { normal, shuffle } = TurnTimes::default();
        Self {
            turn_time_ms: normal,
            shuffle_turn_time_ms: shuffle,
        }
    }
}

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QueuePreferences {
    pub max_moves: usize,
    pub shuffle_length: usize,
}
impl Default for QueuePreferences {
    fn default() -> Self {
        Self {
            max_moves: quarterturn_core::MAX_MOVES,
            shuffle_length: quarterturn_core::SHUFFLE_LENGTH,
        }
    }
}

/// Animation preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Number of recent animations kept by the renderer.
    pub max_animations: usize,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            max_animations: quarterturn_core::MAX_ANIMATIONS,
        }
    }
}

impl Preferences {
    /// Loads preferences from the user preferences file at `path`, or from the
    /// default location if `path` is `None`. If loading fails, a warning is
    /// logged and the default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        Self::load_with_env(path, persist::env_source())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder();

        // Load default preferences.
        config = config.add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        match persist::user_config_source(path) {
            Ok(config_source) => config = config.add_source(config_source),
            Err(e) => log::warn!("Error loading user preferences: {e}"),
        }

        config
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences to a YAML file at `path`.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        persist::save(path, self)
    }

    /// Returns the move engine parameters.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_moves: self.queue.max_moves,
            shuffle_length: self.queue.shuffle_length,
            turn_times: TurnTimes {
                normal: self.timing.turn_time_ms,
                shuffle: self.timing.shuffle_turn_time_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests;
