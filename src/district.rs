//! City districts the player trades across.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum District {
    SouthSide,
    NorthSide,
    WestSide,
    Downtown,
    TheDocks,
    Uptown,
}

impl District {
    pub const ALL: [District; 6] = [
        District::SouthSide,
        District::NorthSide,
        District::WestSide,
        District::Downtown,
        District::TheDocks,
        District::Uptown,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SouthSide => "south_side",
            Self::NorthSide => "north_side",
            Self::WestSide => "west_side",
            Self::Downtown => "downtown",
            Self::TheDocks => "the_docks",
            Self::Uptown => "uptown",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SouthSide => "South Side",
            Self::NorthSide => "North Side",
            Self::WestSide => "West Side",
            Self::Downtown => "Downtown",
            Self::TheDocks => "The Docks",
            Self::Uptown => "Uptown",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::SouthSide => "Rough territory, cheap goods",
            Self::NorthSide => "Wealthy clientele, premium prices",
            Self::WestSide => "Industrial district, bulk deals",
            Self::Downtown => "High risk, high reward",
            Self::TheDocks => "Import hub, rare finds",
            Self::Uptown => "Speakeasy central, steady trade",
        }
    }

    /// Scales the heat gained per unit bought in this district.
    #[must_use]
    pub const fn heat_modifier(self) -> f32 {
        match self {
            Self::SouthSide => 1.2,
            Self::NorthSide => 0.8,
            Self::WestSide => 1.0,
            Self::Downtown => 1.5,
            Self::TheDocks => 1.1,
            Self::Uptown => 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downtown_is_the_hottest_district() {
        let max = District::ALL
            .iter()
            .map(|d| d.heat_modifier())
            .fold(0.0f32, f32::max);
        assert!((District::Downtown.heat_modifier() - max).abs() < f32::EPSILON);
    }
}
