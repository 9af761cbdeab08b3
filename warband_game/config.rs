use dotenvy::dotenv;
use std::env;

pub const DEFAULT_INITIAL_GOLD: i64 = 1000;
pub const DEFAULT_BATTLE_REWARD: i64 = 100;

/// Runtime rules that are not part of the static unit tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gold every new army starts with.
    pub initial_gold: i64,
    /// Gold awarded to the winner of a battle.
    pub battle_reward: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_gold: DEFAULT_INITIAL_GOLD,
            battle_reward: DEFAULT_BATTLE_REWARD,
        }
    }
}

impl Config {
    /// Reads `WARBAND_INITIAL_GOLD` and `WARBAND_BATTLE_REWARD`, loading a
    /// `.env` file first if present. Missing or invalid values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_gold = match lookup("WARBAND_INITIAL_GOLD") {
            Some(val) => val.parse::<i64>().unwrap_or(DEFAULT_INITIAL_GOLD),
            None => DEFAULT_INITIAL_GOLD,
        };

        let battle_reward = match lookup("WARBAND_BATTLE_REWARD") {
            Some(val) => val.parse::<i64>().unwrap_or(DEFAULT_BATTLE_REWARD),
            None => DEFAULT_BATTLE_REWARD,
        };

        Self {
            initial_gold,
            battle_reward,
        }
    }
}
