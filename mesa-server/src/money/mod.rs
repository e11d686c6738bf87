//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done using `Decimal` internally, then
//! converted to `f64` for storage/serialization. Stored values are always
//! rounded to 2 decimal places, half-up.

use rust_decimal::prelude::*;

use crate::utils::AppError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed amount per price or payment (€1,000,000)
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Round a decimal to the monetary precision
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an f64 price to Decimal, rejecting NaN/Infinity
fn to_decimal(value: f64, field: &str) -> Result<Decimal, AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| AppError::validation(format!("{field} is not representable: {value}")))
}

/// Validate a monetary amount: finite, non-negative, below the cap
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    to_decimal(value, field)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}

/// Sum unit prices into a rounded total (cart totals, order totals)
pub fn sum_prices(prices: &[f64]) -> f64 {
    let total = prices
        .iter()
        .filter_map(|p| Decimal::from_f64(*p))
        .fold(Decimal::ZERO, |acc, p| acc + p);
    round2(total).to_f64().unwrap_or(0.0)
}

/// Price of one line: unit price × quantity, rounded
pub fn line_price(unit_price: f64, quantity: i64) -> f64 {
    let unit = Decimal::from_f64(unit_price).unwrap_or(Decimal::ZERO);
    round2(unit * Decimal::from(quantity)).to_f64().unwrap_or(0.0)
}

/// Whether two amounts are equal within [`MONEY_TOLERANCE`]
pub fn amounts_match(a: f64, b: f64) -> bool {
    let (Some(da), Some(db)) = (Decimal::from_f64(a), Decimal::from_f64(b)) else {
        return false;
    };
    (da - db).abs() <= MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_avoid_float_drift() {
        // 0.1 + 0.2 style accumulation stays exact at 2dp
        let prices = vec![0.1, 0.2, 10.0, 15.0];
        assert_eq!(sum_prices(&prices), 25.3);
    }

    #[test]
    fn line_price_scales_and_rounds() {
        assert_eq!(line_price(9.99, 3), 29.97);
        assert_eq!(line_price(0.005, 1), 0.01); // half-up
    }

    #[test]
    fn amount_validation() {
        assert!(validate_amount(12.5, "amount").is_ok());
        assert!(validate_amount(0.0, "amount").is_ok());
        assert!(validate_amount(-1.0, "amount").is_err());
        assert!(validate_amount(f64::NAN, "amount").is_err());
        assert!(validate_amount(f64::INFINITY, "amount").is_err());
        assert!(validate_amount(2_000_000.0, "amount").is_err());
    }

    #[test]
    fn tolerance_comparison() {
        assert!(amounts_match(25.0, 25.0));
        assert!(amounts_match(25.0, 25.01));
        assert!(!amounts_match(25.0, 25.02));
    }
}
