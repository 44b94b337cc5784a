//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic on monetary values goes through `Decimal` internally and
//! is converted back to `f64` for storage/serialization, so floating error
//! never reaches a stored total.

use rust_decimal::prelude::*;

use super::OrderError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per line (1 000 000 kr)
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: u32 = 999;

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

fn to_money(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round a raw f64 to money precision.
pub fn round2(value: f64) -> f64 {
    to_money(to_decimal(value))
}

/// Line total = unit price × quantity.
pub fn line_total(unit_price: f64, quantity: u32) -> f64 {
    to_money(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Order total = sum of line totals.
pub fn order_total(line_totals: impl IntoIterator<Item = f64>) -> f64 {
    let sum = line_totals
        .into_iter()
        .fold(Decimal::ZERO, |acc, t| acc + to_decimal(t));
    to_money(sum)
}

/// Validate a unit price before it enters an order line.
pub fn validate_price(price: f64) -> Result<(), OrderError> {
    if !price.is_finite() {
        return Err(OrderError::InvalidAmount(format!(
            "price must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(OrderError::InvalidAmount(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(OrderError::InvalidAmount(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Validate a line quantity.
pub fn validate_quantity(quantity: u32) -> Result<(), OrderError> {
    if quantity == 0 {
        return Err(OrderError::InvalidQuantity(
            "quantity must be positive".to_string(),
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(OrderError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}
