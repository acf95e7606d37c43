//! Presentation helpers for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

const GROUPING_SEPARATOR: char = ',';

/// Renders `amount` with two decimals, thousands grouping and a leading
/// symbol, e.g. `$1,234.50` or `-$20.00`.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.2}", rounded.abs());
    let (int_part, fraction) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let grouped = group_digits(int_part, GROUPING_SEPARATOR);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{fraction}")
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_amount(dec!(20), "$"), "$20.00");
        assert_eq!(format_amount(dec!(4.5), "$"), "$4.50");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.891), "$"), "$1,234,567.89");
        assert_eq!(format_amount(dec!(999), "$"), "$999.00");
    }

    #[test]
    fn negative_sign_precedes_symbol() {
        assert_eq!(format_amount(dec!(-20), "$"), "-$20.00");
        assert_eq!(format_amount(dec!(-0.001), "$"), "$0.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.125), "€"), "€0.13");
    }
}
