//! Fight-or-flee resolution for police pursuit encounters.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::goods::Good;
use crate::heat::execute_seizure;
use crate::state::GameState;

const FIGHT_BASE_POWER: f32 = 0.3;
const FIGHT_HP_WEIGHT: f32 = 0.3;
const FIGHT_WIN_FLOOR: f32 = 0.10;
const FIGHT_WIN_CEILING: f32 = 0.85;
const FLEE_LOAD_PENALTY: f32 = 0.3;
const FLEE_HP_WEIGHT: f32 = 0.2;
const FLEE_FLOOR: f32 = 0.15;
const FLEE_BASE_CEILING: f32 = 0.90;
const FLEE_CEILING: f32 = 0.85;
const FLEE_DROP_CHANCE: f32 = 0.3;
const FIGHT_LOSS_SEIZURE_BONUS: i32 = 10;

/// An active pursuit the player must resolve before anything else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaseEncounter {
    pub seizure_percentage: i32,
    /// 1-100, scales fight difficulty and flee catch-up.
    pub pursuit_strength: i32,
}

impl ChaseEncounter {
    #[must_use]
    pub const fn description_key(&self) -> &'static str {
        match self.pursuit_strength {
            80.. => "chase.full_squad",
            60..=79 => "chase.cornered",
            40..=59 => "chase.watchmen",
            _ => "chase.lone_agent",
        }
    }

    #[must_use]
    pub const fn fight_odds_key(&self) -> &'static str {
        match self.pursuit_strength {
            80.. => "odds.very_risky",
            60..=79 => "odds.risky",
            40..=59 => "odds.even",
            _ => "odds.good",
        }
    }
}

/// How a resolved chase played out. Fields are the exact deltas the
/// orchestrator applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChaseResult {
    FightWon {
        heat_reduced: i32,
        vehicle_damage: i32,
    },
    FightLost {
        goods_lost: BTreeMap<Good, i32>,
        cash_fine: i32,
        vehicle_damage: i32,
        heat_gained: i32,
    },
    FleeSuccess {
        goods_dropped: BTreeMap<Good, i32>,
        vehicle_damage: i32,
    },
    FleeFailed {
        goods_lost: BTreeMap<Good, i32>,
        cash_fine: i32,
        vehicle_damage: i32,
        heat_gained: i32,
    },
}

impl ChaseResult {
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::FightWon { .. } => "chase.fight_won",
            Self::FightLost { .. } => "chase.fight_lost",
            Self::FleeSuccess { .. } => "chase.flee_success",
            Self::FleeFailed { .. } => "chase.flee_failed",
        }
    }
}

/// Spawn a pursuit keyed off current heat: hotter players draw stronger
/// squads.
pub fn create_encounter(heat: i32, rng: &mut impl Rng) -> ChaseEncounter {
    let seizure = rng.random_range(20..51);
    let pursuit_strength = match heat {
        90.. => rng.random_range(70..100),
        70..=89 => rng.random_range(50..80),
        50..=69 => rng.random_range(30..60),
        _ => rng.random_range(15..45),
    };
    ChaseEncounter {
        seizure_percentage: seizure,
        pursuit_strength,
    }
}

/// Resolve a FIGHT choice. Power comes from the vehicle, its condition, and
/// local reputation; losing fights costs more than losing flights.
pub fn fight(state: &GameState, encounter: &ChaseEncounter, rng: &mut impl Rng) -> ChaseResult {
    let hp_factor = state.vehicle_hp_percent();
    let fight_bonus = state.current_vehicle.fight_bonus();
    let reputation_bonus =
        state.reputation_in(state.current_district).min(100) as f32 / 200.0;

    let player_power = FIGHT_BASE_POWER + fight_bonus + hp_factor * FIGHT_HP_WEIGHT + reputation_bonus;
    let pursuit_power = encounter.pursuit_strength as f32 / 100.0;
    let win_chance =
        (player_power / (player_power + pursuit_power)).clamp(FIGHT_WIN_FLOOR, FIGHT_WIN_CEILING);

    let roll: f32 = rng.random();
    // The vehicle always takes some damage in a fight.
    let vehicle_damage = rng.random_range(5..20);

    if roll < win_chance {
        ChaseResult::FightWon {
            heat_reduced: rng.random_range(10..25),
            vehicle_damage,
        }
    } else {
        let goods_lost = execute_seizure(
            &state.inventory,
            encounter.seizure_percentage + FIGHT_LOSS_SEIZURE_BONUS,
        );
        ChaseResult::FightLost {
            goods_lost,
            cash_fine: rng.random_range(200..800),
            vehicle_damage: vehicle_damage + rng.random_range(10..25),
            heat_gained: rng.random_range(5..15),
        }
    }
}

/// Resolve a FLEE choice. Speed and a light cargo hold help; pursuit
/// strength claws the odds back.
pub fn flee(state: &GameState, encounter: &ChaseEncounter, rng: &mut impl Rng) -> ChaseResult {
    let speed_factor = state.current_vehicle.speed() as f32 / 10.0;
    let load_factor = 1.0
        - (state.used_capacity() as f32 / (state.capacity() as f32).max(1.0)) * FLEE_LOAD_PENALTY;
    let hp_factor = state.vehicle_hp_percent() * FLEE_HP_WEIGHT;

    let flee_chance = (speed_factor * load_factor + hp_factor).clamp(FLEE_FLOOR, FLEE_BASE_CEILING);
    let adjusted = (flee_chance - encounter.pursuit_strength as f32 / 200.0)
        .clamp(FLEE_FLOOR, FLEE_CEILING);

    let roll: f32 = rng.random();
    // Scraped fenders either way.
    let vehicle_damage = rng.random_range(2..10);

    if roll < adjusted {
        let goods_dropped = if rng.random::<f32>() < FLEE_DROP_CHANCE && state.used_capacity() > 0 {
            drop_random_good(state, rng)
        } else {
            BTreeMap::new()
        };
        ChaseResult::FleeSuccess {
            goods_dropped,
            vehicle_damage,
        }
    } else {
        let goods_lost = execute_seizure(&state.inventory, encounter.seizure_percentage);
        ChaseResult::FleeFailed {
            goods_lost,
            cash_fine: rng.random_range(100..400),
            vehicle_damage: vehicle_damage + rng.random_range(5..15),
            heat_gained: rng.random_range(5..10),
        }
    }
}

/// 1-3 units of one randomly chosen held good bounce out of the vehicle.
fn drop_random_good(state: &GameState, rng: &mut impl Rng) -> BTreeMap<Good, i32> {
    let held: Vec<(Good, i32)> = state
        .inventory
        .iter()
        .filter(|(_, item)| item.quantity > 0)
        .map(|(good, item)| (*good, item.quantity))
        .collect();
    let Some(&(good, quantity)) = held.get(rng.random_range(0..held.len().max(1))) else {
        return BTreeMap::new();
    };
    let dropped = rng.random_range(1..4).min(quantity);
    BTreeMap::from([(good, dropped)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InventoryItem;
    use crate::testing::ScriptedRng;
    use crate::vehicle::Vehicle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn loaded_state() -> GameState {
        let mut state = GameState::default();
        state.inventory.insert(Good::Rum, InventoryItem::new(10, 500));
        state.inventory.insert(Good::Whiskey, InventoryItem::new(4, 400));
        state
    }

    #[test]
    fn pursuit_strength_widens_with_heat() {
        let mut rng = ChaCha20Rng::seed_from_u64(41);
        for _ in 0..200 {
            let calm = create_encounter(40, &mut rng);
            assert!((15..45).contains(&calm.pursuit_strength));
            let hot = create_encounter(95, &mut rng);
            assert!((70..100).contains(&hot.pursuit_strength));
            assert!((20..51).contains(&calm.seizure_percentage));
        }
    }

    #[test]
    fn description_and_odds_track_pursuit_strength() {
        let weak = ChaseEncounter {
            seizure_percentage: 25,
            pursuit_strength: 20,
        };
        assert_eq!(weak.description_key(), "chase.lone_agent");
        assert_eq!(weak.fight_odds_key(), "odds.good");
        let strong = ChaseEncounter {
            seizure_percentage: 45,
            pursuit_strength: 85,
        };
        assert_eq!(strong.description_key(), "chase.full_squad");
        assert_eq!(strong.fight_odds_key(), "odds.very_risky");
    }

    #[test]
    fn forced_low_roll_wins_the_fight() {
        let state = loaded_state();
        let encounter = ChaseEncounter {
            seizure_percentage: 30,
            pursuit_strength: 50,
        };
        // Win chance is at least the 0.10 floor, so a 0.0 roll always wins.
        let mut rng = ScriptedRng::from_f32s(&[0.0, 0.0, 0.0]);
        let result = fight(&state, &encounter, &mut rng);
        assert!(matches!(result, ChaseResult::FightWon { .. }));
    }

    #[test]
    fn forced_high_roll_loses_and_seizes_extra() {
        let state = loaded_state();
        let encounter = ChaseEncounter {
            seizure_percentage: 30,
            pursuit_strength: 50,
        };
        // Win chance is capped at 0.85, so a roll near 1.0 always loses.
        let mut rng = ScriptedRng::from_f32s(&[0.99, 0.0, 0.0, 0.0, 0.0]);
        let result = fight(&state, &encounter, &mut rng);
        let ChaseResult::FightLost { goods_lost, .. } = result else {
            panic!("expected FightLost, got {result:?}");
        };
        // Seizure runs at 40%: 10 rum -> 4, 4 whiskey -> 1.
        assert_eq!(goods_lost.get(&Good::Rum), Some(&4));
        assert_eq!(goods_lost.get(&Good::Whiskey), Some(&1));
    }

    #[test]
    fn flee_failure_uses_base_seizure_percentage() {
        let state = loaded_state();
        let encounter = ChaseEncounter {
            seizure_percentage: 30,
            pursuit_strength: 50,
        };
        let mut rng = ScriptedRng::from_f32s(&[0.99, 0.0, 0.0, 0.0, 0.0]);
        let result = flee(&state, &encounter, &mut rng);
        let ChaseResult::FleeFailed { goods_lost, .. } = result else {
            panic!("expected FleeFailed, got {result:?}");
        };
        assert_eq!(goods_lost.get(&Good::Rum), Some(&3));
        assert_eq!(goods_lost.get(&Good::Whiskey), Some(&1));
    }

    #[test]
    fn flee_success_drops_at_most_three_units() {
        let mut state = loaded_state();
        state.current_vehicle = Vehicle::Speedboat;
        state.vehicle_hp = Vehicle::Speedboat.max_hp();
        let encounter = ChaseEncounter {
            seizure_percentage: 25,
            pursuit_strength: 20,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(43);
        for _ in 0..300 {
            if let ChaseResult::FleeSuccess { goods_dropped, .. } =
                flee(&state, &encounter, &mut rng)
            {
                for (_, qty) in goods_dropped {
                    assert!((1..=3).contains(&qty));
                }
            }
        }
    }

    #[test]
    fn damage_ranges_match_outcome() {
        let state = loaded_state();
        let encounter = ChaseEncounter {
            seizure_percentage: 30,
            pursuit_strength: 60,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(44);
        for _ in 0..300 {
            match fight(&state, &encounter, &mut rng) {
                ChaseResult::FightWon {
                    heat_reduced,
                    vehicle_damage,
                } => {
                    assert!((10..25).contains(&heat_reduced));
                    assert!((5..20).contains(&vehicle_damage));
                }
                ChaseResult::FightLost {
                    cash_fine,
                    vehicle_damage,
                    heat_gained,
                    ..
                } => {
                    assert!((200..800).contains(&cash_fine));
                    assert!((15..45).contains(&vehicle_damage));
                    assert!((5..15).contains(&heat_gained));
                }
                other => panic!("fight produced {other:?}"),
            }
        }
    }
}
