//! End-of-run scoring: final tally, rank ladder, leaderboard rows.

use serde::{Deserialize, Serialize};

use crate::state::GameState;

const RANK_LADDER: [(i32, &str); 6] = [
    (2_000, "Street Peddler"),
    (5_000, "Small-Time Hustler"),
    (15_000, "Neighborhood Trader"),
    (50_000, "District Boss"),
    (150_000, "Speakeasy King"),
    (500_000, "Chicago Kingpin"),
];
const TOP_RANK: &str = "Al Capone";

/// The final tally of a finished run. Net worth here is liquid: cash plus
/// stock on hand, ignoring venue equity and debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub final_cash: i32,
    pub inventory_value: i32,
    pub net_worth: i32,
    pub rank: String,
    pub profit_from_start: i32,
    pub percent_return: f32,
}

/// A single scoreboard row as published off-device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub wallet_address: String,
    pub net_worth: i32,
    pub rank: String,
    pub timestamp: i64,
}

impl LeaderboardEntry {
    /// `0x1234...abcd` style abbreviation for display.
    #[must_use]
    pub fn short_address(&self) -> String {
        if self.wallet_address.len() > 10 {
            format!(
                "{}...{}",
                &self.wallet_address[..6],
                &self.wallet_address[self.wallet_address.len() - 4..]
            )
        } else {
            self.wallet_address.clone()
        }
    }
}

#[must_use]
pub fn rank_for(net_worth: i32) -> &'static str {
    for (ceiling, rank) in RANK_LADDER {
        if net_worth < ceiling {
            return rank;
        }
    }
    TOP_RANK
}

/// Tally a run. Valid any time, though ranks are only meaningful once the
/// run is over.
#[must_use]
pub fn tally(state: &GameState) -> GameResult {
    let final_cash = state.cash;
    let inventory_value = state.inventory_value();
    let net_worth = final_cash + inventory_value;
    let profit = net_worth - state.starting_cash;
    let percent_return = if state.starting_cash > 0 {
        profit as f32 / state.starting_cash as f32 * 100.0
    } else {
        0.0
    };
    GameResult {
        final_cash,
        inventory_value,
        net_worth,
        rank: rank_for(net_worth).to_string(),
        profit_from_start: profit,
        percent_return,
    }
}
