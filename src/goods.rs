//! Tradable contraband catalog.

use serde::{Deserialize, Serialize};

/// A tradable good. Attributes are fixed; only market prices move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Good {
    BathtubGin,
    Whiskey,
    Rum,
    Moonshine,
    Champagne,
}

impl Good {
    pub const ALL: [Good; 5] = [
        Good::BathtubGin,
        Good::Whiskey,
        Good::Rum,
        Good::Moonshine,
        Good::Champagne,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BathtubGin => "bathtub_gin",
            Self::Whiskey => "whiskey",
            Self::Rum => "rum",
            Self::Moonshine => "moonshine",
            Self::Champagne => "champagne",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BathtubGin => "Bathtub Gin",
            Self::Whiskey => "Whiskey",
            Self::Rum => "Rum",
            Self::Moonshine => "Moonshine",
            Self::Champagne => "Champagne",
        }
    }

    #[must_use]
    pub const fn base_price(self) -> i32 {
        match self {
            Self::BathtubGin => 50,
            Self::Whiskey => 120,
            Self::Rum => 80,
            Self::Moonshine => 200,
            Self::Champagne => 300,
        }
    }

    #[must_use]
    pub const fn min_price(self) -> i32 {
        match self {
            Self::BathtubGin => 15,
            Self::Whiskey => 40,
            Self::Rum => 25,
            Self::Moonshine => 60,
            Self::Champagne => 100,
        }
    }

    #[must_use]
    pub const fn max_price(self) -> i32 {
        match self {
            Self::BathtubGin => 200,
            Self::Whiskey => 400,
            Self::Rum => 300,
            Self::Moonshine => 700,
            Self::Champagne => 1000,
        }
    }

    /// Daily price swing factor, 0..1. Higher means wilder markets.
    #[must_use]
    pub const fn volatility(self) -> f32 {
        match self {
            Self::BathtubGin => 0.6,
            Self::Whiskey => 0.5,
            Self::Rum => 0.55,
            Self::Moonshine => 0.7,
            Self::Champagne => 0.4,
        }
    }

    /// Cargo slots per unit. Every good is crate-sized for now.
    #[must_use]
    pub const fn capacity_per_unit(self) -> i32 {
        1
    }

    /// Clamp a computed price into this good's legal band.
    #[must_use]
    pub fn clamp_price(self, price: i32) -> i32 {
        price.clamp(self.min_price(), self.max_price())
    }
}
