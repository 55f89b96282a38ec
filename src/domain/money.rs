//! Monetary types for player prices and budgets.

use rust_decimal::Decimal;

/// Market cost in currency units (e.g. `5.5` for a player listed at 55 tenths).
pub type Cost = Decimal;

/// Convert an upstream price expressed in tenths into a [`Cost`].
#[must_use]
pub fn cost_from_tenths(tenths: i64) -> Cost {
    Decimal::new(tenths, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cost_from_tenths_scales_by_ten() {
        assert_eq!(cost_from_tenths(55), dec!(5.5));
        assert_eq!(cost_from_tenths(130), dec!(13.0));
        assert_eq!(cost_from_tenths(0), Decimal::ZERO);
    }

    #[test]
    fn costs_add_exactly() {
        let total: Cost = [dec!(4.5), dec!(5.5), dec!(0.1)].iter().sum();
        assert_eq!(total, dec!(10.1));
    }
}
