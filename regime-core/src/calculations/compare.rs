//! Final recommendation between the two regimes.

use crate::models::{RegimeChoice, TaxResult};

/// Picks the regime with the strictly lower liability.
///
/// Identical liabilities are reported as [`RegimeChoice::Equal`]; there is
/// no tie-break.
pub fn compare(
    old: &TaxResult,
    new: &TaxResult,
) -> RegimeChoice {
    if old.tax_liability < new.tax_liability {
        RegimeChoice::OldBetter
    } else if new.tax_liability < old.tax_liability {
        RegimeChoice::NewBetter
    } else {
        RegimeChoice::Equal
    }
}
