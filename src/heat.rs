//! Law-enforcement attention model: heat bands, daily decay, intercepts and
//! cargo seizure.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::district::District;
use crate::goods::Good;
use crate::state::InventoryItem;

pub const HEAT_MAX: i32 = 100;
const DAILY_DECAY: i32 = 5;
const SEIZURE_PCT_MIN: i32 = 20;
const SEIZURE_PCT_MAX: i32 = 51; // exclusive

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatBand {
    None,
    Low,
    Medium,
    High,
}

impl HeatBand {
    #[must_use]
    pub const fn for_heat(heat: i32) -> Self {
        match heat {
            i32::MIN..=30 => Self::None,
            31..=60 => Self::Low,
            61..=80 => Self::Medium,
            _ => Self::High,
        }
    }

    #[must_use]
    pub const fn intercept_chance(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Low => 0.10,
            Self::Medium => 0.20,
            Self::High => 0.30,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No Heat",
            Self::Low => "Low Heat",
            Self::Medium => "Medium Heat",
            Self::High => "High Heat",
        }
    }
}

/// Heat gained when buying `quantity` units in a district. Never zero, so
/// even a single crate gets noticed.
#[must_use]
pub fn heat_gain(quantity: i32, district: District) -> i32 {
    let scaled = (quantity as f32 * district.heat_modifier()).round() as i32;
    scaled.max(1)
}

/// Overnight decay. Better vehicles shed heat faster.
#[must_use]
pub fn daily_decay(heat: i32, vehicle_bonus: i32) -> i32 {
    (heat - DAILY_DECAY - vehicle_bonus).max(0)
}

/// Roll for a police intercept at the current heat. Returns the seizure
/// severity percentage when the intercept fires, `None` otherwise.
pub fn check_for_intercept(heat: i32, evasion_bonus: f32, rng: &mut impl Rng) -> Option<i32> {
    let band = HeatBand::for_heat(heat);
    if band.intercept_chance() == 0.0 {
        return None;
    }
    let effective = (band.intercept_chance() - evasion_bonus).max(0.0);
    if effective == 0.0 {
        return None;
    }
    let roll: f32 = rng.random();
    if roll < effective {
        Some(rng.random_range(SEIZURE_PCT_MIN..SEIZURE_PCT_MAX))
    } else {
        None
    }
}

/// Per-good seized quantities for a flat percentage loss. Every held good
/// loses at least one unit; empty stacks are skipped.
#[must_use]
pub fn execute_seizure(
    inventory: &BTreeMap<Good, InventoryItem>,
    loss_percentage: i32,
) -> BTreeMap<Good, i32> {
    let mut seized = BTreeMap::new();
    for (good, item) in inventory {
        if item.quantity > 0 {
            let lost = (item.quantity * loss_percentage / 100).max(1);
            seized.insert(*good, lost);
        }
    }
    seized
}
