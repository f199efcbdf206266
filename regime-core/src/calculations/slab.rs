//! Progressive slab tax computation.
//!
//! Applies an ordered marginal-rate slab table to a taxable income. Each
//! band taxes only the income falling inside it; iteration stops at the
//! first band whose lower bound the income does not reach. Because a valid
//! table is contiguous, the short-circuit is exactly equivalent to summing
//! every band (the skipped bands would each contribute zero).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_half_up;
use crate::models::SlabBand;

/// Computes the total tax owed on `income` under an ordered slab table.
///
/// The caller is responsible for clamping `income` to non-negative and for
/// supplying a well-formed table (see
/// [`TaxSchedule::validate`](crate::TaxSchedule::validate)); there are no
/// error conditions here. Income at or below zero yields zero tax, and
/// income exactly on a band's upper bound is taxed entirely within that
/// band.
///
/// # Example
///
/// ```
/// use regime_core::TaxSchedule;
/// use regime_core::calculations::slab::compute_tax;
/// use rust_decimal_macros::dec;
///
/// let old = TaxSchedule::old_regime();
/// // 5% of 250,000 plus 20% of 100,000
/// assert_eq!(compute_tax(dec!(600000), &old.bands), dec!(32500));
/// ```
pub fn compute_tax(
    income: Decimal,
    bands: &[SlabBand],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    for band in bands {
        if income <= band.lower {
            break;
        }
        let top = band.upper.map_or(income, |upper| income.min(upper));
        tax += (top - band.lower) * band.rate / dec!(100);
    }
    round_half_up(tax)
}
