//! Achievement catalog and the post-operation scan that unlocks them.

use serde::{Deserialize, Serialize};

use crate::state::{GameState, Speakeasy};
use crate::vehicle::Vehicle;

const BIG_SPENDER_THRESHOLD: i32 = 5000;
const SURVIVOR_CHASES: i32 = 5;
const FIGHT_CLUB_WINS: i32 = 3;
const HOT_STREAK_TRADES: i32 = 5;
const WORLD_TRAVELER_DISTRICTS: usize = 6;
const AL_CAPONE_NET_WORTH: i32 = 500_000;

/// Every unlockable badge a run can earn. Rewards are claimed once,
/// explicitly, after the unlock has been acknowledged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstTrade,
    BigSpender,
    TenKClub,
    FiftyKClub,
    HundredKClub,
    Survivor,
    SpeedDemon,
    SkyKing,
    SpeakeasyOwner,
    SpeakeasyMogul,
    FightClub,
    DebtFree,
    WorldTraveler,
    StreetTough,
    HotStreak,
    Untouchable,
    AlCapone,
}

impl Achievement {
    pub const ALL: [Achievement; 17] = [
        Self::FirstTrade,
        Self::BigSpender,
        Self::TenKClub,
        Self::FiftyKClub,
        Self::HundredKClub,
        Self::Survivor,
        Self::SpeedDemon,
        Self::SkyKing,
        Self::SpeakeasyOwner,
        Self::SpeakeasyMogul,
        Self::FightClub,
        Self::DebtFree,
        Self::WorldTraveler,
        Self::StreetTough,
        Self::HotStreak,
        Self::Untouchable,
        Self::AlCapone,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstTrade => "achievement.first_trade",
            Self::TenKClub => "achievement.ten_k_club",
            Self::FiftyKClub => "achievement.fifty_k_club",
            Self::HundredKClub => "achievement.hundred_k_club",
            Self::Survivor => "achievement.survivor",
            Self::SpeedDemon => "achievement.speed_demon",
            Self::SkyKing => "achievement.sky_king",
            Self::SpeakeasyOwner => "achievement.speakeasy_owner",
            Self::SpeakeasyMogul => "achievement.speakeasy_mogul",
            Self::BigSpender => "achievement.big_spender",
            Self::FightClub => "achievement.fight_club",
            Self::WorldTraveler => "achievement.world_traveler",
            Self::StreetTough => "achievement.street_tough",
            Self::HotStreak => "achievement.hot_streak",
            Self::Untouchable => "achievement.untouchable",
            Self::DebtFree => "achievement.debt_free",
            Self::AlCapone => "achievement.al_capone",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FirstTrade => "First Deal",
            Self::TenKClub => "The 10K Club",
            Self::FiftyKClub => "The 50K Club",
            Self::HundredKClub => "The 100K Club",
            Self::Survivor => "Survivor",
            Self::SpeedDemon => "Speed Demon",
            Self::SkyKing => "Sky King",
            Self::SpeakeasyOwner => "Speakeasy Owner",
            Self::SpeakeasyMogul => "Speakeasy Mogul",
            Self::BigSpender => "Big Spender",
            Self::FightClub => "Fight Club",
            Self::WorldTraveler => "World Traveler",
            Self::StreetTough => "Street Tough",
            Self::HotStreak => "Hot Streak",
            Self::Untouchable => "Untouchable",
            Self::DebtFree => "Debt Free",
            Self::AlCapone => "Al Capone",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstTrade => "Complete your first buy",
            Self::TenKClub => "Reach a net worth of $10,000",
            Self::FiftyKClub => "Reach a net worth of $50,000",
            Self::HundredKClub => "Reach a net worth of $100,000",
            Self::Survivor => "Get caught in 5 police chases and live to tell",
            Self::SpeedDemon => "Own a Speedboat or Zeppelin",
            Self::SkyKing => "Own the Zeppelin",
            Self::SpeakeasyOwner => "Invest in your first speakeasy",
            Self::SpeakeasyMogul => "Fully upgrade a speakeasy",
            Self::BigSpender => "Spend $5,000 on a single purchase",
            Self::FightClub => "Fight off the police 3 times",
            Self::WorldTraveler => "Visit every district in the city",
            Self::StreetTough => "Fight off a gang",
            Self::HotStreak => "Turn a profit on 5 consecutive sales",
            Self::Untouchable => "Finish a run with zero heat",
            Self::DebtFree => "Pay off the loan shark in full",
            Self::AlCapone => "Reach a net worth of $500,000",
        }
    }

    /// Cash paid out when the badge is claimed.
    #[must_use]
    pub const fn reward(self) -> i32 {
        match self {
            Self::FirstTrade => 100,
            Self::BigSpender => 250,
            Self::TenKClub => 500,
            Self::FiftyKClub => 1000,
            Self::HundredKClub => 2500,
            Self::Survivor => 500,
            Self::SpeedDemon => 1000,
            Self::SkyKing => 2000,
            Self::SpeakeasyOwner => 300,
            Self::SpeakeasyMogul => 2000,
            Self::FightClub => 750,
            Self::DebtFree => 500,
            Self::WorldTraveler => 300,
            Self::StreetTough => 400,
            Self::HotStreak => 750,
            Self::Untouchable => 1500,
            Self::AlCapone => 5000,
        }
    }
}

/// All scan-detectable achievements in unlock-check order. DebtFree is
/// granted directly by loan repayment and never scanned; BigSpender has a
/// dedicated check at purchase time.
const SCANNED: [Achievement; 15] = [
    Achievement::FirstTrade,
    Achievement::TenKClub,
    Achievement::FiftyKClub,
    Achievement::HundredKClub,
    Achievement::Survivor,
    Achievement::SpeedDemon,
    Achievement::SkyKing,
    Achievement::SpeakeasyOwner,
    Achievement::SpeakeasyMogul,
    Achievement::FightClub,
    Achievement::WorldTraveler,
    Achievement::StreetTough,
    Achievement::HotStreak,
    Achievement::Untouchable,
    Achievement::AlCapone,
];

fn condition_met(achievement: Achievement, state: &GameState) -> bool {
    match achievement {
        Achievement::FirstTrade => state.total_buys >= 1,
        Achievement::TenKClub => state.net_worth() >= 10_000,
        Achievement::FiftyKClub => state.net_worth() >= 50_000,
        Achievement::HundredKClub => state.net_worth() >= 100_000,
        Achievement::Survivor => state.chases_encountered >= SURVIVOR_CHASES,
        Achievement::SpeedDemon => matches!(
            state.current_vehicle,
            Vehicle::Speedboat | Vehicle::Zeppelin
        ),
        Achievement::SkyKing => state.current_vehicle == Vehicle::Zeppelin,
        Achievement::SpeakeasyOwner => state
            .speakeasies
            .values()
            .any(|s| s.investment_level >= 1),
        Achievement::SpeakeasyMogul => state
            .speakeasies
            .values()
            .any(|s| s.investment_level >= Speakeasy::MAX_LEVEL),
        Achievement::BigSpender => false,
        Achievement::FightClub => state.chases_won >= FIGHT_CLUB_WINS,
        Achievement::WorldTraveler => state.districts_visited.len() >= WORLD_TRAVELER_DISTRICTS,
        Achievement::StreetTough => state.gangs_fought_off >= 1,
        Achievement::HotStreak => state.consecutive_profit_trades >= HOT_STREAK_TRADES,
        Achievement::Untouchable => state.game_over && state.heat == 0,
        Achievement::DebtFree => false,
        Achievement::AlCapone => state.net_worth() >= AL_CAPONE_NET_WORTH,
    }
}

/// Walk the catalog in order and unlock the first newly satisfied badge.
/// One unlock per call, even when several predicates turned true in the same
/// transition; later calls pick up the rest.
pub fn scan(state: &mut GameState) {
    for achievement in SCANNED {
        if !state.earned_achievements.contains(&achievement) && condition_met(achievement, state) {
            state.earned_achievements.insert(achievement);
            if state.pending_achievement.is_none() {
                state.pending_achievement = Some(achievement);
            }
            state.push_log(achievement.key());
            return;
        }
    }
}

/// Purchase-time check for the single-transaction spend badge.
pub fn check_big_spender(state: &mut GameState, purchase_cost: i32) {
    if purchase_cost >= BIG_SPENDER_THRESHOLD
        && !state.earned_achievements.contains(&Achievement::BigSpender)
    {
        state.earned_achievements.insert(Achievement::BigSpender);
        if state.pending_achievement.is_none() {
            state.pending_achievement = Some(Achievement::BigSpender);
        }
        state.push_log(Achievement::BigSpender.key());
    }
}
