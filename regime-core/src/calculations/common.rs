//! Shared arithmetic helpers for the calculation modules.

use rust_decimal::Decimal;

/// Rounds a rupee amount to two decimal places, half-up (away from zero at
/// the midpoint). Applied at the boundary of every worksheet step so that
/// reported figures follow financial rounding conventions.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts. Used to clamp intermediate
/// differences (income minus deductions, rent minus 10% of basic) to zero.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
