//! Peso Formatting
//!
//! Every price in the shop is Philippine pesos; amounts are `Decimal` end to
//! end and only become strings at the edge of the view.

use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// Format an amount for display, e.g. `₱1,234.56`.
pub fn peso(amount: Decimal) -> String {
    Money::from_decimal(amount.round_dp(2), iso::PHP).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(minor: i64) -> Decimal {
        Decimal::new(minor, 2)
    }

    #[test]
    fn formats_with_symbol_and_padding() {
        assert_eq!(peso(dec(10_000)), "₱100.00");
        assert_eq!(peso(dec(5)), "₱0.05");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(peso(dec(123_456)), "₱1,234.56");
    }

    #[test]
    fn rounds_to_centavos() {
        assert_eq!(peso(Decimal::new(99_999, 3)), "₱100.00");
    }
}
