//! Daily market price generation.

use std::collections::BTreeMap;

use rand::Rng;

use crate::district::District;
use crate::goods::Good;

const FLUCTUATION_SCALE: f32 = 0.7;
const HOT_MULT_MIN: f32 = 1.4;
const HOT_MULT_SPAN: f32 = 0.4;
const CRACKDOWN_MULT_MIN: f32 = 0.4;
const CRACKDOWN_MULT_SPAN: f32 = 0.25;

/// Generate the day's price sheet for a district. The hot commodity spikes
/// 1.4-1.8x; the crackdown good collapses to 0.4-0.65x. Everything lands
/// inside the good's legal price band.
pub fn generate_prices(
    district: District,
    hot_commodity: Option<Good>,
    crackdown_good: Option<Good>,
    rng: &mut impl Rng,
) -> BTreeMap<Good, i32> {
    let mut prices = BTreeMap::new();
    for good in Good::ALL {
        let mut price = good.base_price() as f32;
        price *= district_modifier(district, good);

        let fluctuation = 1.0 + (rng.random::<f32>() - 0.5) * good.volatility() * FLUCTUATION_SCALE;
        price *= fluctuation;

        if Some(good) == hot_commodity {
            price *= HOT_MULT_MIN + rng.random::<f32>() * HOT_MULT_SPAN;
        }
        if Some(good) == crackdown_good {
            price *= CRACKDOWN_MULT_MIN + rng.random::<f32>() * CRACKDOWN_MULT_SPAN;
        }

        prices.insert(good, good.clamp_price(price as i32));
    }
    prices
}

/// Fixed district/good multiplier table. Asymmetric on purpose: luxury goods
/// price up where the money lives, import goods price down at the source.
#[must_use]
pub fn district_modifier(district: District, good: Good) -> f32 {
    match district {
        District::SouthSide => match good {
            Good::BathtubGin => 0.7,
            Good::Moonshine => 0.8,
            _ => 1.0,
        },
        District::NorthSide => match good {
            Good::Champagne => 1.3,
            Good::Whiskey => 1.2,
            Good::BathtubGin => 0.8,
            _ => 1.1,
        },
        District::WestSide => match good {
            Good::Moonshine => 1.1,
            Good::Rum => 0.9,
            _ => 1.0,
        },
        District::Downtown => match good {
            Good::Champagne => 1.4,
            Good::Whiskey => 1.3,
            _ => 1.2,
        },
        District::TheDocks => match good {
            Good::Rum => 0.6,
            Good::Champagne => 0.7,
            Good::Moonshine => 1.2,
            _ => 0.9,
        },
        District::Uptown => match good {
            Good::Whiskey => 1.1,
            Good::Champagne => 1.2,
            Good::BathtubGin => 0.9,
            _ => 1.0,
        },
    }
}

/// Pick the day's hot commodity and crackdown good: two distinct goods,
/// uniform. Selecting by offset keeps the pair distinct in one pass instead
/// of rejection-looping.
pub fn select_daily_specials(rng: &mut impl Rng) -> (Good, Good) {
    let hot_idx = rng.random_range(0..Good::ALL.len());
    let offset = rng.random_range(1..Good::ALL.len());
    let crackdown_idx = (hot_idx + offset) % Good::ALL.len();
    (Good::ALL[hot_idx], Good::ALL[crackdown_idx])
}
