//! Rival gangs: territory, price influence, and street encounters.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::district::District;
use crate::goods::Good;

const MIN_ENCOUNTER_CHANCE: f32 = 0.02;
const REPUTATION_REDUCTION_DIVISOR: f32 = 200.0;
const DAMAGE_ATTRACTION_SCALE: f32 = 0.15;
const SHAKEDOWN_THRESHOLD: f32 = 0.45;
const INTIMIDATION_THRESHOLD: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gang {
    SouthSideBoys,
    NorthShoreSyndicate,
    DockRats,
    DowntownOutfit,
}

impl Gang {
    pub const ALL: [Gang; 4] = [
        Gang::SouthSideBoys,
        Gang::NorthShoreSyndicate,
        Gang::DockRats,
        Gang::DowntownOutfit,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SouthSideBoys => "south_side_boys",
            Self::NorthShoreSyndicate => "north_shore_syndicate",
            Self::DockRats => "dock_rats",
            Self::DowntownOutfit => "downtown_outfit",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SouthSideBoys => "South Side Boys",
            Self::NorthShoreSyndicate => "North Shore Syndicate",
            Self::DockRats => "Dock Rats",
            Self::DowntownOutfit => "Downtown Outfit",
        }
    }

    #[must_use]
    pub const fn home_district(self) -> District {
        match self {
            Self::SouthSideBoys => District::SouthSide,
            Self::NorthShoreSyndicate => District::NorthSide,
            Self::DockRats => District::TheDocks,
            Self::DowntownOutfit => District::Downtown,
        }
    }

    /// The good the gang controls; it prices up in their territory.
    #[must_use]
    pub const fn specialty(self) -> Good {
        match self {
            Self::SouthSideBoys => Good::BathtubGin,
            Self::NorthShoreSyndicate => Good::Champagne,
            Self::DockRats => Good::Rum,
            Self::DowntownOutfit => Good::Whiskey,
        }
    }

    /// Multiplier on the specialty good inside the home district.
    #[must_use]
    pub const fn price_influence(self) -> f32 {
        match self {
            Self::SouthSideBoys => 1.3,
            Self::NorthShoreSyndicate => 1.25,
            Self::DockRats => 1.35,
            Self::DowntownOutfit => 1.4,
        }
    }

    /// Base chance of a confrontation per visit to the home district.
    #[must_use]
    pub const fn encounter_chance(self) -> f32 {
        match self {
            Self::SouthSideBoys => 0.15,
            Self::NorthShoreSyndicate => 0.12,
            Self::DockRats => 0.18,
            Self::DowntownOutfit => 0.20,
        }
    }

    #[must_use]
    pub fn for_district(district: District) -> Option<Gang> {
        Gang::ALL
            .iter()
            .copied()
            .find(|gang| gang.home_district() == district)
    }
}

/// Outcome of a gang confrontation. Applied to the state when the player
/// acknowledges the encounter dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GangOutcome {
    ShakenDown {
        gang: Gang,
        cash_lost: i32,
    },
    Intimidated {
        gang: Gang,
        heat_gained: i32,
    },
    FoughtOff {
        gang: Gang,
        vehicle_damage: i32,
        reputation_gained: i32,
    },
}

impl GangOutcome {
    #[must_use]
    pub const fn gang(self) -> Gang {
        match self {
            Self::ShakenDown { gang, .. }
            | Self::Intimidated { gang, .. }
            | Self::FoughtOff { gang, .. } => gang,
        }
    }
}

/// Roll for a confrontation when entering a district. Reputation calms the
/// locals down; a battered vehicle marks you as easy prey.
pub fn check_encounter(
    district: District,
    reputation: i32,
    vehicle_hp_percent: f32,
    rng: &mut impl Rng,
) -> Option<GangOutcome> {
    let gang = Gang::for_district(district)?;

    let rep_reduction = reputation as f32 / REPUTATION_REDUCTION_DIVISOR;
    let damage_bonus = (1.0 - vehicle_hp_percent) * DAMAGE_ATTRACTION_SCALE;
    let effective_chance =
        (gang.encounter_chance() - rep_reduction + damage_bonus).max(MIN_ENCOUNTER_CHANCE);

    if rng.random::<f32>() >= effective_chance {
        return None;
    }

    let roll: f32 = rng.random();
    let outcome = if roll < SHAKEDOWN_THRESHOLD {
        GangOutcome::ShakenDown {
            gang,
            cash_lost: rng.random_range(100..500),
        }
    } else if roll < INTIMIDATION_THRESHOLD {
        GangOutcome::Intimidated {
            gang,
            heat_gained: rng.random_range(5..15),
        }
    } else {
        GangOutcome::FoughtOff {
            gang,
            vehicle_damage: rng.random_range(5..15),
            reputation_gained: rng.random_range(5..15),
        }
    };
    Some(outcome)
}

/// Inflate the resident gang's specialty good, re-clamped to its price band.
/// Districts without a gang are untouched.
pub fn apply_gang_influence(prices: &mut BTreeMap<Good, i32>, district: District) {
    let Some(gang) = Gang::for_district(district) else {
        return;
    };
    let specialty = gang.specialty();
    if let Some(price) = prices.get_mut(&specialty) {
        *price = specialty.clamp_price((*price as f32 * gang.price_influence()) as i32);
    }
}
