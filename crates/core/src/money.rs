//! Currency and measurement rounding conventions.
//!
//! Two currencies flow through the books: US dollars on the purchasing side
//! and guaraníes (G$) locally. USD amounts keep 2 decimal places; G$ has no
//! subunit in practical use and rounds to the whole unit. Shipment weights
//! are recorded to the gram (3 dp) and the per-kilogram distribution factor
//! to 2 dp. Ties round away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a USD amount to cents.
pub fn round_usd(amount: Decimal) -> Decimal {
    round_half_up(amount, 2)
}

/// Round a guaraní amount to the whole unit.
pub fn round_gs(amount: Decimal) -> Decimal {
    round_half_up(amount, 0)
}

/// Round a weight in kilograms to the gram.
pub fn round_weight(kg: Decimal) -> Decimal {
    round_half_up(kg, 3)
}

/// Round a G$/kg distribution factor.
pub fn round_factor(factor: Decimal) -> Decimal {
    round_half_up(factor, 2)
}

/// Round an average landed unit cost. Averages keep 2 decimal places even
/// in G$.
pub fn round_avg_gs(amount: Decimal) -> Decimal {
    round_half_up(amount, 2)
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn usd_rounds_to_cents() {
        assert_eq!(round_usd(dec!(12.345)), dec!(12.35));
        assert_eq!(round_usd(dec!(12.344)), dec!(12.34));
    }

    #[test]
    fn gs_rounds_to_whole_units() {
        assert_eq!(round_gs(dec!(409999.5)), dec!(410000));
        assert_eq!(round_gs(dec!(409999.4)), dec!(409999));
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_usd(dec!(0.125)), dec!(0.13));
        assert_eq!(round_usd(dec!(-0.125)), dec!(-0.13));
        assert_eq!(round_gs(dec!(-2.5)), dec!(-3));
    }

    #[test]
    fn weight_keeps_three_places() {
        assert_eq!(round_weight(dec!(15.0004)), dec!(15.000));
        assert_eq!(round_weight(dec!(0.1235)), dec!(0.124));
    }
}
