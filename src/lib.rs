//! Bootleg Rules Engine
//!
//! Platform-agnostic core game logic for the Bootleg prohibition-era trading
//! game. This crate provides all game mechanics without UI or
//! platform-specific dependencies.

pub mod achievements;
pub mod chase;
pub mod config;
pub mod district;
pub mod engine;
pub mod error;
pub mod event;
pub mod gang;
pub mod goods;
pub mod headline;
pub mod heat;
pub mod price;
pub mod score;
pub mod session;
pub mod state;
pub mod vehicle;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types
pub use achievements::Achievement;
pub use chase::{ChaseEncounter, ChaseResult};
pub use config::{GameConfig, default_config};
pub use district::District;
pub use engine::{
    buy, buy_vehicle, claim_achievement, dismiss_achievement, dismiss_chase_result,
    dismiss_encounter, dismiss_event, fight_chase, flee_chase, invest_speakeasy, new_game,
    payoff_heat, repair_vehicle, repay_loan, sell, take_loan, travel,
};
pub use error::Rejection;
pub use event::RandomEvent;
pub use gang::{Gang, GangOutcome};
pub use goods::Good;
pub use headline::{Headline, HeadlineHint};
pub use heat::{HEAT_MAX, HeatBand};
pub use score::{GameResult, LeaderboardEntry, rank_for, tally};
pub use session::Session;
pub use state::{GameState, InventoryItem, LoanShark, Speakeasy};
pub use vehicle::Vehicle;

/// Trait for abstracting save/load operations.
/// Platform-specific implementations should provide this.
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), Self::Error>;

    /// Load game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be loaded.
    fn load_game(&self, save_name: &str) -> Result<Option<GameState>, Self::Error>;

    /// Delete saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error>;
}
