//! The immutable game snapshot. Every engine operation consumes a state and
//! returns a new one; nothing here mutates in place past construction.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::chase::{ChaseEncounter, ChaseResult};
use crate::district::District;
use crate::gang::GangOutcome;
use crate::goods::Good;
use crate::headline::Headline;
use crate::heat::{HEAT_MAX, HeatBand};
use crate::vehicle::Vehicle;

pub const PAYOFF_COST_PER_HEAT: i32 = 50;
const REPAIR_COST_PER_HP: i32 = 3;
const DEFAULT_STARTING_CASH: i32 = 1_500;
const DEFAULT_MAX_DAYS: i32 = 30;
const LOAN_INTEREST_RATE: f32 = 0.10;
const LOAN_CAP: i32 = 5_000;
const LOAN_OVERDUE_DAYS: i32 = 5;

/// Held stock of one good plus what was paid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InventoryItem {
    pub quantity: i32,
    pub total_cost_basis: i32,
}

impl InventoryItem {
    #[must_use]
    pub const fn new(quantity: i32, total_cost_basis: i32) -> Self {
        Self {
            quantity,
            total_cost_basis,
        }
    }

    #[must_use]
    pub fn average_cost(&self) -> f32 {
        if self.quantity > 0 {
            self.total_cost_basis as f32 / self.quantity as f32
        } else {
            0.0
        }
    }
}

/// Outstanding debt to the neighborhood fixer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanShark {
    pub debt: i32,
    pub interest_rate: f32,
    pub max_loan: i32,
    /// Days since the loan was taken or last serviced.
    pub days_until_threat: i32,
    pub has_active_loan: bool,
}

impl Default for LoanShark {
    fn default() -> Self {
        Self {
            debt: 0,
            interest_rate: LOAN_INTEREST_RATE,
            max_loan: LOAN_CAP,
            days_until_threat: 0,
            has_active_loan: false,
        }
    }
}

impl LoanShark {
    /// Interest accrued per day, truncated.
    #[must_use]
    pub fn daily_interest(&self) -> i32 {
        (self.debt as f32 * self.interest_rate) as i32
    }

    #[must_use]
    pub const fn is_overdue(&self) -> bool {
        self.days_until_threat >= LOAN_OVERDUE_DAYS
    }

    #[must_use]
    pub const fn threat_level(&self) -> &'static str {
        if !self.has_active_loan {
            return "none";
        }
        match self.days_until_threat {
            i32::MIN..=2 => "patient",
            3..=4 => "impatient",
            5..=6 => "threatening",
            _ => "dangerous",
        }
    }
}

/// Passive-income venue, one slot per district. Tiers 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speakeasy {
    pub district: District,
    pub investment_level: i32,
    pub total_invested: i32,
}

impl Speakeasy {
    pub const MAX_LEVEL: i32 = 3;

    #[must_use]
    pub const fn closed(district: District) -> Self {
        Self {
            district,
            investment_level: 0,
            total_invested: 0,
        }
    }

    #[must_use]
    pub const fn daily_income(&self) -> i32 {
        match self.investment_level {
            1 => 25,
            2 => 75,
            3 => 200,
            _ => 0,
        }
    }

    /// Cost to advance from the given tier, `None` once maxed out.
    #[must_use]
    pub const fn upgrade_cost(current_level: i32) -> Option<i32> {
        match current_level {
            0 => Some(3_000),
            1 => Some(10_000),
            2 => Some(30_000),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.district {
            District::SouthSide => "The Blind Pig",
            District::NorthSide => "The Gilded Lily",
            District::WestSide => "The Iron Horse",
            District::Downtown => "Club Gatsby",
            District::TheDocks => "The Rusty Anchor",
            District::Uptown => "The Velvet Room",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub day: i32,
    pub max_days: i32,
    pub starting_cash: i32,
    pub cash: i32,
    pub current_district: District,
    pub inventory: BTreeMap<Good, InventoryItem>,
    pub current_vehicle: Vehicle,
    pub vehicle_hp: i32,
    pub heat: i32,
    pub prices: BTreeMap<Good, i32>,
    pub previous_prices: BTreeMap<Good, i32>,
    pub hot_commodity: Option<Good>,
    pub crackdown_good: Option<Good>,
    pub game_over: bool,
    // Pending dialogs; each cleared only by its own acknowledgment.
    pub pending_event: Option<crate::event::RandomEvent>,
    pub pending_chase: Option<ChaseEncounter>,
    pub chase_result: Option<ChaseResult>,
    pub pending_encounter: Option<GangOutcome>,
    pub pending_achievement: Option<Achievement>,
    pub loan_shark: LoanShark,
    pub speakeasies: BTreeMap<District, Speakeasy>,
    /// Per-district street cred, 0-100.
    pub reputation: BTreeMap<District, i32>,
    pub districts_visited: BTreeSet<District>,
    pub headline: Option<Headline>,
    pub earned_achievements: BTreeSet<Achievement>,
    pub claimed_achievements: BTreeSet<Achievement>,
    // Counters feeding achievement predicates.
    pub total_buys: i32,
    pub total_sells: i32,
    pub consecutive_profit_trades: i32,
    pub chases_encountered: i32,
    pub chases_won: i32,
    pub gangs_fought_off: i32,
    /// Stable message keys for the presentation layer, newest last.
    pub logs: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            day: 1,
            max_days: DEFAULT_MAX_DAYS,
            starting_cash: DEFAULT_STARTING_CASH,
            cash: DEFAULT_STARTING_CASH,
            current_district: District::SouthSide,
            inventory: Good::ALL
                .iter()
                .map(|g| (*g, InventoryItem::default()))
                .collect(),
            current_vehicle: Vehicle::OnFoot,
            vehicle_hp: Vehicle::OnFoot.max_hp(),
            heat: 0,
            prices: BTreeMap::new(),
            previous_prices: BTreeMap::new(),
            hot_commodity: None,
            crackdown_good: None,
            game_over: false,
            pending_event: None,
            pending_chase: None,
            chase_result: None,
            pending_encounter: None,
            pending_achievement: None,
            loan_shark: LoanShark::default(),
            speakeasies: District::ALL
                .iter()
                .map(|d| (*d, Speakeasy::closed(*d)))
                .collect(),
            reputation: District::ALL.iter().map(|d| (*d, 0)).collect(),
            districts_visited: BTreeSet::from([District::SouthSide]),
            headline: None,
            earned_achievements: BTreeSet::new(),
            claimed_achievements: BTreeSet::new(),
            total_buys: 0,
            total_sells: 0,
            consecutive_profit_trades: 0,
            chases_encountered: 0,
            chases_won: 0,
            gangs_fought_off: 0,
            logs: Vec::new(),
        }
    }
}

impl GameState {
    #[must_use]
    pub const fn capacity(&self) -> i32 {
        self.current_vehicle.capacity()
    }

    #[must_use]
    pub fn used_capacity(&self) -> i32 {
        self.inventory
            .iter()
            .map(|(good, item)| item.quantity * good.capacity_per_unit())
            .sum()
    }

    #[must_use]
    pub fn free_capacity(&self) -> i32 {
        self.capacity() - self.used_capacity()
    }

    /// Market value of held stock at today's prices, base price fallback for
    /// goods with no quote yet.
    #[must_use]
    pub fn inventory_value(&self) -> i32 {
        self.inventory
            .iter()
            .map(|(good, item)| {
                item.quantity * self.prices.get(good).copied().unwrap_or(good.base_price())
            })
            .sum()
    }

    #[must_use]
    pub fn total_cost_basis(&self) -> i32 {
        self.inventory.values().map(|i| i.total_cost_basis).sum()
    }

    #[must_use]
    pub fn net_worth(&self) -> i32 {
        self.cash + self.inventory_value() + self.total_speakeasy_value() - self.loan_shark.debt
    }

    #[must_use]
    pub fn profit_from_start(&self) -> i32 {
        self.net_worth() - self.starting_cash
    }

    #[must_use]
    pub fn vehicle_hp_percent(&self) -> f32 {
        let max = self.current_vehicle.max_hp();
        if max > 0 {
            self.vehicle_hp as f32 / max as f32
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_vehicle_damaged(&self) -> bool {
        self.vehicle_hp < self.current_vehicle.max_hp()
    }

    #[must_use]
    pub fn vehicle_hp_status(&self) -> &'static str {
        let pct = self.vehicle_hp_percent();
        if pct >= 0.8 {
            "good"
        } else if pct >= 0.5 {
            "damaged"
        } else if pct >= 0.25 {
            "critical"
        } else {
            "totaled"
        }
    }

    /// $3 per missing HP.
    #[must_use]
    pub fn repair_cost(&self) -> i32 {
        (self.current_vehicle.max_hp() - self.vehicle_hp) * REPAIR_COST_PER_HP
    }

    #[must_use]
    pub fn total_speakeasy_income(&self) -> i32 {
        self.speakeasies.values().map(Speakeasy::daily_income).sum()
    }

    #[must_use]
    pub fn total_speakeasy_value(&self) -> i32 {
        self.speakeasies.values().map(|s| s.total_invested).sum()
    }

    #[must_use]
    pub const fn heat_band(&self) -> HeatBand {
        HeatBand::for_heat(self.heat)
    }

    #[must_use]
    pub const fn payoff_cost(&self) -> i32 {
        self.heat * PAYOFF_COST_PER_HEAT
    }

    #[must_use]
    pub const fn can_payoff(&self) -> bool {
        self.heat > 0 && self.payoff_cost() <= self.cash
    }

    #[must_use]
    pub fn reputation_in(&self, district: District) -> i32 {
        self.reputation.get(&district).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn unclaimed_achievements(&self) -> usize {
        self.earned_achievements.len() - self.claimed_achievements.len()
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.game_over
    }

    pub fn push_log(&mut self, key: impl Into<String>) {
        self.logs.push(key.into());
    }

    /// Structural invariants that must hold after every operation.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let heat_ok = (0..=HEAT_MAX).contains(&self.heat);
        let hp_ok = (0..=self.current_vehicle.max_hp()).contains(&self.vehicle_hp);
        let cash_ok = self.cash >= 0;
        let capacity_ok = self.used_capacity() <= self.capacity();
        let basis_ok = self
            .inventory
            .values()
            .all(|item| item.quantity >= 0 && item.total_cost_basis >= 0);
        let dialogs = usize::from(self.pending_event.is_some())
            + usize::from(self.pending_chase.is_some())
            + usize::from(self.pending_encounter.is_some());
        heat_ok && hp_ok && cash_ok && capacity_ok && basis_ok && dialogs <= 1
    }
}
