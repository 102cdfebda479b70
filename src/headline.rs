//! Daily newspaper headlines hinting at specials and risks.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::district::District;
use crate::gang::Gang;
use crate::goods::Good;

const PRICE_UP_THRESHOLD: f32 = 0.30;
const PRICE_DOWN_THRESHOLD: f32 = 0.55;
const HEAT_WARNING_THRESHOLD: f32 = 0.70;
const GANG_NEWS_THRESHOLD: f32 = 0.85;

const GENERAL_HEADLINES: [&str; 7] = [
    "PROHIBITION ENFORCEMENT DOUBLED - President demands results!",
    "NEW SPEAKEASIES OPEN NIGHTLY - Chicago can't stop the party!",
    "JAZZ AGE IN FULL SWING - Music fills the underground!",
    "MAYOR PROMISES CLEAN STREETS - Election season rhetoric!",
    "STOCK MARKET SOARS - Wall Street celebrating!",
    "LABOR STRIKES SPREAD - Workers demand fair wages!",
    "BABE RUTH HITS ANOTHER - Yankees dominate the diamond!",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub text: String,
    pub hint: HeadlineHint,
}

/// What the headline is actually telling the player, for UI emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HeadlineHint {
    PriceUp { good: Good },
    PriceDown { good: Good },
    HeatWarning { district: District },
    GangActivity { gang: Gang },
    GeneralNews,
}

/// Bucket a single draw into one of five mutually exclusive headline
/// categories tied to the day's specials.
pub fn generate_headline(hot: Good, crackdown: Good, rng: &mut impl Rng) -> Headline {
    let roll: f32 = rng.random();
    if roll < PRICE_UP_THRESHOLD {
        price_up_hint(hot)
    } else if roll < PRICE_DOWN_THRESHOLD {
        price_down_hint(crackdown)
    } else if roll < HEAT_WARNING_THRESHOLD {
        heat_warning(rng)
    } else if roll < GANG_NEWS_THRESHOLD {
        gang_news(rng)
    } else {
        general_news(rng)
    }
}

fn price_up_hint(good: Good) -> Headline {
    let text = match good {
        Good::BathtubGin => "SOCIALITES DEMAND MORE GIN - Cocktail parties sweep the city!",
        Good::Whiskey => "WHISKEY SHORTAGE LOOMS - Irish imports running dry!",
        Good::Rum => "CARIBBEAN CONNECTIONS CUT - Rum supply dwindles!",
        Good::Moonshine => "MOUNTAIN MEN DISAPPEAR - Moonshine supplies vanish!",
        Good::Champagne => "FRENCH LUXURY IN DEMAND - High society thirsty for bubbles!",
    };
    Headline {
        text: text.to_string(),
        hint: HeadlineHint::PriceUp { good },
    }
}

fn price_down_hint(good: Good) -> Headline {
    let text = match good {
        Good::BathtubGin => "FEDS CRACK DOWN ON GIN - Multiple bathtub operations shut down!",
        Good::Whiskey => "WHISKEY WAREHOUSES SEIZED - Agents celebrate major haul!",
        Good::Rum => "COAST GUARD INTERCEPTS RUM RUNNERS - Prices expected to tumble!",
        Good::Moonshine => "MOONSHINE STILLS FOUND - Revenue agents on the warpath!",
        Good::Champagne => "CHAMPAGNE TRADE DISRUPTED - Luxury goods supply flooded!",
    };
    Headline {
        text: text.to_string(),
        hint: HeadlineHint::PriceDown { good },
    }
}

fn heat_warning(rng: &mut impl Rng) -> Headline {
    let district = District::ALL[rng.random_range(0..District::ALL.len())];
    let text = match district {
        District::SouthSide => "SOUTH SIDE UNDER WATCH - Extra patrols deployed!",
        District::NorthSide => "NORTH SIDE CRACKDOWN - Wealthy residents demand action!",
        District::WestSide => "WEST SIDE WAREHOUSES WATCHED - Feds stake out industrial zone!",
        District::Downtown => "DOWNTOWN SWEEP PLANNED - Commissioner vows cleanup!",
        District::TheDocks => "HARBOR PATROL DOUBLED - Coast Guard on high alert!",
        District::Uptown => "UPTOWN SPEAKEASIES TARGETED - Agents going undercover!",
    };
    Headline {
        text: text.to_string(),
        hint: HeadlineHint::HeatWarning { district },
    }
}

fn gang_news(rng: &mut impl Rng) -> Headline {
    let gang = Gang::ALL[rng.random_range(0..Gang::ALL.len())];
    let text = match gang {
        Gang::SouthSideBoys => "SOUTH SIDE BOYS EXPAND TERRITORY - Rival traders beware!",
        Gang::NorthShoreSyndicate => "NORTH SHORE SYNDICATE FLEXES - High-end operations tighten!",
        Gang::DockRats => "DOCK RATS CONTROL WATERFRONT - Traders pay the toll!",
        Gang::DowntownOutfit => "DOWNTOWN OUTFIT GROWING BOLD - Territory disputes heat up!",
    };
    Headline {
        text: text.to_string(),
        hint: HeadlineHint::GangActivity { gang },
    }
}

fn general_news(rng: &mut impl Rng) -> Headline {
    let text = GENERAL_HEADLINES[rng.random_range(0..GENERAL_HEADLINES.len())];
    Headline {
        text: text.to_string(),
        hint: HeadlineHint::GeneralNews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn buckets_follow_documented_thresholds() {
        let mut rng = ScriptedRng::from_f32s(&[0.10]);
        let headline = generate_headline(Good::Rum, Good::Whiskey, &mut rng);
        assert_eq!(headline.hint, HeadlineHint::PriceUp { good: Good::Rum });

        let mut rng = ScriptedRng::from_f32s(&[0.40]);
        let headline = generate_headline(Good::Rum, Good::Whiskey, &mut rng);
        assert_eq!(
            headline.hint,
            HeadlineHint::PriceDown {
                good: Good::Whiskey
            }
        );

        let mut rng = ScriptedRng::from_f32s(&[0.60, 0.0]);
        let headline = generate_headline(Good::Rum, Good::Whiskey, &mut rng);
        assert!(matches!(headline.hint, HeadlineHint::HeatWarning { .. }));

        let mut rng = ScriptedRng::from_f32s(&[0.80, 0.0]);
        let headline = generate_headline(Good::Rum, Good::Whiskey, &mut rng);
        assert!(matches!(headline.hint, HeadlineHint::GangActivity { .. }));

        let mut rng = ScriptedRng::from_f32s(&[0.90, 0.0]);
        let headline = generate_headline(Good::Rum, Good::Whiskey, &mut rng);
        assert_eq!(headline.hint, HeadlineHint::GeneralNews);
    }

    #[test]
    fn headline_text_is_never_empty() {
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        for _ in 0..200 {
            let headline = generate_headline(Good::Moonshine, Good::Champagne, &mut rng);
            assert!(!headline.text.is_empty());
        }
    }
}
