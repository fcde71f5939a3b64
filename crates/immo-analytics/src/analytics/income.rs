//! Per-property income and yield formulas.
//!
//! Every aggregate that needs a net figure goes through these two functions,
//! so KPIs, the performance ranking and property cards always agree.

use immo_core::PropertyRecord;

/// Net monthly income: rent minus charges minus the management share of rent.
///
/// The management fee applies to rent only. The result is not clamped and is
/// negative when charges exceed rent.
#[must_use]
pub fn net_monthly_income(property: &PropertyRecord) -> f64 {
    let rent = property.rent();
    rent - property.charges() - property.management_fee() * rent
}

/// Net annual yield in percent of purchase price.
///
/// Returns exactly `0.0` when the purchase price is zero, absent or negative.
#[must_use]
pub fn net_annual_yield_pct(property: &PropertyRecord) -> f64 {
    let price = property.purchase_price();
    if price > 0.0 {
        net_monthly_income(property) * 12.0 / price * 100.0
    } else {
        0.0
    }
}

/// Rounds half-up to an integer (`floor(x + 0.5)`).
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to one decimal place from the exact binary value.
///
/// `0.15` is stored as `0.1499...` and rounds to `0.1`. Exact ties (values
/// whose fraction is a multiple of a quarter, such as `0.25`) round away from
/// zero. A result of zero is returned as `+0.0`.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    let quarters = magnitude * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        // x.x5 exactly: magnitude * 10 is an exact half
        (magnitude * 10.0 + 0.5).floor() / 10.0
    } else {
        format!("{magnitude:.1}").parse().unwrap_or(magnitude)
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded.copysign(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn paris() -> PropertyRecord {
        PropertyRecord::builder("Paris")
            .rent(2600.0)
            .charges(220.0)
            .management_fee(0.06)
            .purchase_price(720_000.0)
            .build()
    }

    #[test]
    fn test_net_monthly_income() {
        assert_relative_eq!(net_monthly_income(&paris()), 2224.0, epsilon = 1e-9);
    }

    #[test]
    fn test_net_monthly_income_negative_is_unclamped() {
        let p = PropertyRecord::builder("Money pit").rent(100.0).charges(300.0).build();
        assert_relative_eq!(net_monthly_income(&p), -200.0);
    }

    #[test]
    fn test_fee_applies_to_rent_only() {
        let p = PropertyRecord::builder("Fee")
            .rent(1000.0)
            .charges(500.0)
            .management_fee(0.1)
            .build();
        assert_relative_eq!(net_monthly_income(&p), 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_net_annual_yield() {
        assert_relative_eq!(net_annual_yield_pct(&paris()), 3.706_666_666, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_price_yields_zero() {
        let p = PropertyRecord::builder("Inherited").rent(900.0).build();
        let y = net_annual_yield_pct(&p);
        assert_eq!(y, 0.0);
        assert!(y.is_finite());
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_half_up(7742.5), 7743.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_to_tenth(4.257_931), 4.3);
        assert_eq!(round_to_tenth(4.033_333), 4.0);
    }

    #[test]
    fn test_round_to_tenth_uses_stored_value() {
        // Both are stored just below the decimal tie.
        assert_eq!(round_to_tenth(0.15), 0.1);
        assert_eq!(round_to_tenth(0.95), 0.9);
        assert_eq!(round_to_tenth(-0.15), -0.1);
        assert_eq!(round_to_tenth(0.150_000_1), 0.2);
    }

    #[test]
    fn test_round_to_tenth_exact_ties_round_away_from_zero() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
    }

    #[test]
    fn test_round_to_tenth_zero_has_no_sign() {
        let r = round_to_tenth(-0.04);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_small_yield_rounds_down() {
        let p = PropertyRecord::builder("Parking")
            .rent(120.0)
            .charges(90.0)
            .purchase_price(240_000.0)
            .build();
        assert_eq!(round_to_tenth(net_annual_yield_pct(&p)), 0.1);
    }
}
