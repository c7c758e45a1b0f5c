use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::error::{AppError, Result};

/// Number of decimal places carried by every monetary amount
pub const SCALE: u32 = 2;

/// Rounds a monetary amount to the engine scale
///
/// Midpoints round away from zero, so a half-paisa always rounds up on
/// positive amounts. Applied once per derived figure (quotation totals,
/// stat sums), never to stored inputs.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Validates a monetary amount
///
/// Rejects negative values and values carrying more precision than the
/// engine scale.
pub fn validate_amount(label: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::invalid_amount(format!(
            "{} cannot be negative, got {}",
            label, amount
        )));
    }

    if amount.scale() > SCALE {
        return Err(AppError::invalid_amount(format!(
            "{} must have at most {} decimal places, got {}",
            label, SCALE, amount
        )));
    }

    Ok(())
}

/// Validates a percentage rate (tax rates are expressed as 0-100)
pub fn validate_rate(label: &str, rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO {
        return Err(AppError::invalid_amount(format!(
            "{} cannot be negative, got {}",
            label, rate
        )));
    }

    if rate > Decimal::from(100) {
        return Err(AppError::invalid_amount(format!(
            "{} cannot exceed 100, got {}",
            label, rate
        )));
    }

    Ok(())
}

/// Applies a percentage tax rate to a net amount and rounds the result
///
/// Formula: gross = net × (1 + rate / 100)
pub fn apply_tax(net: Decimal, rate: Decimal) -> Decimal {
    let gross = net * (Decimal::ONE + rate / Decimal::from(100));
    round(gross)
}
