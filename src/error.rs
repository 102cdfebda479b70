//! Typed validation failures returned by engine operations.

use thiserror::Error;

use crate::achievements::Achievement;
use crate::district::District;
use crate::vehicle::Vehicle;

/// Why an operation refused to produce a successor state. The offered state
/// is untouched whenever one of these comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i32),
    #[error("need ${required}, only ${available} on hand")]
    InsufficientCash { required: i32, available: i32 },
    #[error("need {required} capacity, only {available} free")]
    InsufficientCapacity { required: i32, available: i32 },
    #[error("tried to sell {requested} but only {held} held")]
    InsufficientStock { requested: i32, held: i32 },
    #[error("already driving a {0:?}")]
    VehicleAlreadyOwned(Vehicle),
    #[error("refusing to downgrade capacity from {current} to {offered}")]
    CapacityDowngrade { current: i32, offered: i32 },
    #[error("vehicle is not damaged")]
    VehicleUndamaged,
    #[error("cannot pay off {requested} heat with {current} on the books")]
    InvalidHeatPayoff { requested: i32, current: i32 },
    #[error("a loan is already outstanding")]
    LoanAlreadyActive,
    #[error("loan amount {requested} outside 1..={cap}")]
    InvalidLoanAmount { requested: i32, cap: i32 },
    #[error("no active loan to repay")]
    NoActiveLoan,
    #[error("speakeasy in {0:?} is fully built out")]
    SpeakeasyMaxed(District),
    #[error("achievement {0:?} has not been earned")]
    AchievementNotEarned(Achievement),
    #[error("achievement {0:?} was already claimed")]
    AchievementAlreadyClaimed(Achievement),
    #[error("the run is already over")]
    GameOver,
}
