use bigdecimal::{BigDecimal, RoundingMode};

/// Round a monetary amount to two decimal places, half away from zero.
///
/// All per-line VAT and gross amounts are rounded with this function before
/// they are accumulated into order totals, so totals are sums of already
/// rounded cents rather than a rounding of the exact aggregate.
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(&dec("1.005")), dec("1.01"));
        assert_eq!(round2(&dec("1.004")), dec("1.00"));
        assert_eq!(round2(&dec("-1.005")), dec("-1.01"));
    }

    #[test]
    fn keeps_two_decimal_values_unchanged() {
        assert_eq!(round2(&dec("48.80")), dec("48.80"));
        assert_eq!(round2(&dec("0.00")), dec("0.00"));
    }

    #[test]
    fn pads_scale_to_two_decimals() {
        assert_eq!(round2(&dec("10")).to_string(), "10.00");
        assert_eq!(round2(&dec("4.4")).to_string(), "4.40");
    }
}
