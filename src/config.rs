//! Run configuration. Loaded from JSON by the host, or defaulted.

use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_STARTING_CASH: i32 = 1_500;
const DEFAULT_MAX_DAYS: i32 = 30;
const DEFAULT_VERIFIED_BONUS_DAYS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_cash: i32,
    pub max_days: i32,
    /// Extra days granted when the host reports a verified session.
    pub verified_bonus_days: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
            max_days: DEFAULT_MAX_DAYS,
            verified_bonus_days: DEFAULT_VERIFIED_BONUS_DAYS,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse game config")
    }

    /// Campaign length for a run, bonus days included when verified.
    #[must_use]
    pub const fn effective_max_days(&self, verified: bool) -> i32 {
        if verified {
            self.max_days + self.verified_bonus_days
        } else {
            self.max_days
        }
    }
}

#[must_use]
pub fn default_config() -> GameConfig {
    GameConfig::default()
}
