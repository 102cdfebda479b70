//! Single-writer handle pairing a game snapshot with its seeded RNG.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::achievements::Achievement;
use crate::config::GameConfig;
use crate::district::District;
use crate::engine;
use crate::error::Rejection;
use crate::goods::Good;
use crate::state::GameState;
use crate::vehicle::Vehicle;

/// Owns the current state and the run's RNG stream. Two sessions created
/// with the same seed and fed the same calls replay identically.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    rng: ChaCha20Rng,
}

impl Session {
    #[must_use]
    pub fn new(config: &GameConfig, verified: bool, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let state = engine::new_game(config, verified, &mut rng);
        Self { state, rng }
    }

    /// Resume from a persisted snapshot. The RNG restarts from the seed, so
    /// this is for save-game continuation, not replay.
    #[must_use]
    pub fn resume(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    pub fn buy(&mut self, good: Good, quantity: i32) -> Result<(), Rejection> {
        self.state = engine::buy(&self.state, good, quantity)?;
        Ok(())
    }

    pub fn sell(&mut self, good: Good, quantity: i32) -> Result<(), Rejection> {
        self.state = engine::sell(&self.state, good, quantity)?;
        Ok(())
    }

    pub fn travel(&mut self, destination: District) -> Result<(), Rejection> {
        self.state = engine::travel(&self.state, destination, &mut self.rng)?;
        Ok(())
    }

    pub fn fight_chase(&mut self) {
        self.state = engine::fight_chase(&self.state, &mut self.rng);
    }

    pub fn flee_chase(&mut self) {
        self.state = engine::flee_chase(&self.state, &mut self.rng);
    }

    pub fn dismiss_chase_result(&mut self) {
        self.state = engine::dismiss_chase_result(&self.state);
    }

    pub fn dismiss_event(&mut self) {
        self.state = engine::dismiss_event(&self.state);
    }

    pub fn dismiss_encounter(&mut self) {
        self.state = engine::dismiss_encounter(&self.state);
    }

    pub fn dismiss_achievement(&mut self) {
        self.state = engine::dismiss_achievement(&self.state);
    }

    pub fn buy_vehicle(&mut self, vehicle: Vehicle) -> Result<(), Rejection> {
        self.state = engine::buy_vehicle(&self.state, vehicle)?;
        Ok(())
    }

    pub fn repair_vehicle(&mut self) -> Result<(), Rejection> {
        self.state = engine::repair_vehicle(&self.state)?;
        Ok(())
    }

    pub fn payoff_heat(&mut self, amount: i32) -> Result<(), Rejection> {
        self.state = engine::payoff_heat(&self.state, amount)?;
        Ok(())
    }

    pub fn take_loan(&mut self, amount: i32) -> Result<(), Rejection> {
        self.state = engine::take_loan(&self.state, amount)?;
        Ok(())
    }

    pub fn repay_loan(&mut self, amount: i32) -> Result<(), Rejection> {
        self.state = engine::repay_loan(&self.state, amount)?;
        Ok(())
    }

    pub fn invest_speakeasy(&mut self, district: District) -> Result<(), Rejection> {
        self.state = engine::invest_speakeasy(&self.state, district)?;
        Ok(())
    }

    pub fn claim_achievement(&mut self, achievement: Achievement) -> Result<(), Rejection> {
        self.state = engine::claim_achievement(&self.state, achievement)?;
        Ok(())
    }

    /// Resolve any pending dialog the cheapest way, so drivers can always
    /// get back to an actionable state.
    pub fn acknowledge_all(&mut self) {
        if self.state.pending_chase.is_some() {
            self.flee_chase();
        }
        self.dismiss_chase_result();
        self.dismiss_event();
        self.dismiss_encounter();
        self.dismiss_achievement();
    }
}
