//! Random street events rolled once per travel day.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::goods::Good;

const EVENT_CHANCE: f32 = 0.25;
const EVENT_KIND_COUNT: usize = 8;

/// One-shot windfall or penalty. Effects land when the player dismisses the
/// event dialog, never before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RandomEvent {
    /// Free goods found in an alley, capped by free capacity on apply.
    FindStash { good: Good, quantity: i32 },
    /// A barkeep's warning sheds heat.
    TipOff { heat_reduction: i32 },
    /// A wealthy patron overpays.
    BigSale { cash_bonus: i32 },
    /// A grateful mechanic chips in toward the next vehicle.
    CapacityUpgrade { cash_bonus: i32 },
    /// Authorities sweep the district.
    Crackdown { heat_increase: i32 },
    /// A rival crew takes a cut.
    Shakedown { cash_loss: i32 },
    /// Held stock goes bad, cost basis scales down with it.
    Spoilage { good: Good, quantity_lost: i32 },
    /// Someone talked.
    Informant { heat_increase: i32 },
}

impl RandomEvent {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FindStash { .. } => "event.find_stash",
            Self::TipOff { .. } => "event.tip_off",
            Self::BigSale { .. } => "event.big_sale",
            Self::CapacityUpgrade { .. } => "event.capacity_upgrade",
            Self::Crackdown { .. } => "event.crackdown",
            Self::Shakedown { .. } => "event.shakedown",
            Self::Spoilage { .. } => "event.spoilage",
            Self::Informant { .. } => "event.informant",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FindStash { .. } => "Lucky Find!",
            Self::TipOff { .. } => "Friendly Tip",
            Self::BigSale { .. } => "Big Payday!",
            Self::CapacityUpgrade { .. } => "Mechanic's Favor!",
            Self::Crackdown { .. } => "Crackdown!",
            Self::Shakedown { .. } => "Shakedown!",
            Self::Spoilage { .. } => "Spoiled Goods!",
            Self::Informant { .. } => "Ratted Out!",
        }
    }

    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(
            self,
            Self::FindStash { .. }
                | Self::TipOff { .. }
                | Self::BigSale { .. }
                | Self::CapacityUpgrade { .. }
        )
    }
}

/// Roll the 25% daily gate, then pick uniformly among the eight event kinds.
pub fn maybe_generate_event(rng: &mut impl Rng) -> Option<RandomEvent> {
    if rng.random::<f32>() > EVENT_CHANCE {
        return None;
    }

    let event = match rng.random_range(0..EVENT_KIND_COUNT) {
        0 => RandomEvent::FindStash {
            good: random_good(rng),
            quantity: rng.random_range(2..5),
        },
        1 => RandomEvent::TipOff {
            heat_reduction: rng.random_range(8..15),
        },
        2 => RandomEvent::BigSale {
            cash_bonus: rng.random_range(100..300),
        },
        3 => RandomEvent::CapacityUpgrade {
            cash_bonus: rng.random_range(150..400),
        },
        4 => RandomEvent::Crackdown {
            heat_increase: rng.random_range(15..30),
        },
        5 => RandomEvent::Shakedown {
            cash_loss: rng.random_range(150..500),
        },
        6 => RandomEvent::Spoilage {
            good: random_good(rng),
            quantity_lost: rng.random_range(2..6),
        },
        _ => RandomEvent::Informant {
            heat_increase: rng.random_range(20..40),
        },
    };
    Some(event)
}

fn random_good(rng: &mut impl Rng) -> Good {
    Good::ALL[rng.random_range(0..Good::ALL.len())]
}
