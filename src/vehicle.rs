//! Vehicle tiers and their trading/escape attributes.

use serde::{Deserialize, Serialize};

/// Owned ride. Capacity drives what you can haul; the rest drives how well
/// you shake pursuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vehicle {
    OnFoot,
    Bicycle,
    ModelT,
    DeliveryTruck,
    ArmoredCar,
    Speedboat,
    Zeppelin,
}

impl Vehicle {
    pub const ALL: [Vehicle; 7] = [
        Vehicle::OnFoot,
        Vehicle::Bicycle,
        Vehicle::ModelT,
        Vehicle::DeliveryTruck,
        Vehicle::ArmoredCar,
        Vehicle::Speedboat,
        Vehicle::Zeppelin,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OnFoot => "on_foot",
            Self::Bicycle => "bicycle",
            Self::ModelT => "model_t",
            Self::DeliveryTruck => "delivery_truck",
            Self::ArmoredCar => "armored_car",
            Self::Speedboat => "speedboat",
            Self::Zeppelin => "zeppelin",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::OnFoot => "On Foot",
            Self::Bicycle => "Bicycle",
            Self::ModelT => "Model T",
            Self::DeliveryTruck => "Delivery Truck",
            Self::ArmoredCar => "Armored Car",
            Self::Speedboat => "Speedboat",
            Self::Zeppelin => "Zeppelin",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OnFoot => "Just your pockets. Low profile but can't carry much.",
            Self::Bicycle => "Quick and quiet. Basket holds a bit more.",
            Self::ModelT => "A reliable Ford. Blends in with traffic.",
            Self::DeliveryTruck => "Hide your goods behind \"Laundry Service\" signs.",
            Self::ArmoredCar => "Reinforced and intimidating. They think twice before pursuing.",
            Self::Speedboat => "Run the lakefront. Nobody catches you on the water.",
            Self::Zeppelin => "The ultimate trading machine. You own the skies of Chicago.",
        }
    }

    #[must_use]
    pub const fn capacity(self) -> i32 {
        match self {
            Self::OnFoot => 30,
            Self::Bicycle => 60,
            Self::ModelT => 120,
            Self::DeliveryTruck => 250,
            Self::ArmoredCar => 400,
            Self::Speedboat => 500,
            Self::Zeppelin => 1_000,
        }
    }

    /// Extra heat shed per day on top of the base decay.
    #[must_use]
    pub const fn heat_decay_bonus(self) -> i32 {
        match self {
            Self::OnFoot => 0,
            Self::Bicycle => 1,
            Self::ModelT => 2,
            Self::DeliveryTruck => 3,
            Self::ArmoredCar => 5,
            Self::Speedboat => 8,
            Self::Zeppelin => 15,
        }
    }

    /// Subtracted from the heat band's intercept chance.
    #[must_use]
    pub const fn evasion_bonus(self) -> f32 {
        match self {
            Self::OnFoot => 0.0,
            Self::Bicycle => 0.05,
            Self::ModelT => 0.10,
            Self::DeliveryTruck => 0.15,
            Self::ArmoredCar => 0.25,
            Self::Speedboat => 0.35,
            Self::Zeppelin => 0.50,
        }
    }

    #[must_use]
    pub const fn max_hp(self) -> i32 {
        match self {
            Self::OnFoot => 20,
            Self::Bicycle => 30,
            Self::ModelT => 60,
            Self::DeliveryTruck => 100,
            Self::ArmoredCar => 180,
            Self::Speedboat => 130,
            Self::Zeppelin => 250,
        }
    }

    /// 1-10, feeds flee odds.
    #[must_use]
    pub const fn speed(self) -> i32 {
        match self {
            Self::OnFoot => 3,
            Self::Bicycle => 5,
            Self::ModelT => 6,
            Self::DeliveryTruck => 4,
            Self::ArmoredCar => 5,
            Self::Speedboat => 9,
            Self::Zeppelin => 10,
        }
    }

    /// Additive bonus to fight power.
    #[must_use]
    pub const fn fight_bonus(self) -> f32 {
        match self {
            Self::OnFoot => 0.0,
            Self::Bicycle => 0.0,
            Self::ModelT => 0.05,
            Self::DeliveryTruck => 0.10,
            Self::ArmoredCar => 0.20,
            Self::Speedboat => 0.15,
            Self::Zeppelin => 0.30,
        }
    }

    #[must_use]
    pub const fn price(self) -> i32 {
        match self {
            Self::OnFoot => 0,
            Self::Bicycle => 1_500,
            Self::ModelT => 8_000,
            Self::DeliveryTruck => 25_000,
            Self::ArmoredCar => 60_000,
            Self::Speedboat => 120_000,
            Self::Zeppelin => 500_000,
        }
    }
}
