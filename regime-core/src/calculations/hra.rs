//! HRA exemption under the statutory minimum-of-three rule.
//!
//! The exempt portion of House Rent Allowance is the least of:
//!
//! 1. the HRA actually received,
//! 2. rent paid in excess of 10% of basic salary,
//! 3. 50% of basic salary in a metro city, 40% otherwise.
//!
//! Only the excess-rent term needs a clamp; the minimum of three
//! non-negative amounts is itself non-negative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{max, round_half_up};
use crate::models::CityType;

/// Computes the exempt portion of HRA for one year.
///
/// All amounts are annual rupees and assumed non-negative by the caller.
///
/// # Example
///
/// ```
/// use regime_core::CityType;
/// use regime_core::calculations::hra::compute_hra_exemption;
/// use rust_decimal_macros::dec;
///
/// // Rent of 20,000/month against a 6 lakh basic in a metro:
/// // excess rent (180,000) binds.
/// let exemption = compute_hra_exemption(
///     dec!(600000),
///     dec!(300000),
///     dec!(240000),
///     CityType::Metro,
/// );
/// assert_eq!(exemption, dec!(180000));
/// ```
pub fn compute_hra_exemption(
    basic_salary: Decimal,
    hra_received: Decimal,
    annual_rent: Decimal,
    city_type: CityType,
) -> Decimal {
    let excess_rent = max(annual_rent - basic_salary * dec!(0.10), Decimal::ZERO);
    let city_limit = basic_salary * city_type.hra_limit_factor();
    round_half_up(hra_received.min(excess_rent).min(city_limit))
}
