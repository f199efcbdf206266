//! New-regime evaluation.
//!
//! The New regime allows only its flat standard deduction, and owes nothing
//! at all when total income falls below the full-rebate threshold. The
//! threshold keys off **total** income (not taxable income) with a strict
//! `<`: at exactly the threshold the rebate does not apply, producing a
//! discontinuity that is preserved deliberately.
//!
//! # Example
//!
//! ```
//! use regime_core::calculations::NewRegimeWorksheet;
//! use regime_core::TaxSchedule;
//! use rust_decimal_macros::dec;
//!
//! let schedule = TaxSchedule::new_regime();
//! let worksheet = NewRegimeWorksheet::new(&schedule);
//!
//! // Below the 12.75 lakh threshold: fully rebated.
//! assert_eq!(worksheet.evaluate(dec!(1274999)).tax_liability, dec!(0));
//!
//! // At the threshold the rebate no longer applies.
//! let at_threshold = worksheet.evaluate(dec!(1275000));
//! assert_eq!(at_threshold.taxable_income, dec!(1200000));
//! assert_eq!(at_threshold.tax_liability, dec!(60000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::compute_tax;
use crate::models::{TaxResult, TaxSchedule};

/// Evaluator for the New regime.
#[derive(Debug, Clone)]
pub struct NewRegimeWorksheet<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> NewRegimeWorksheet<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Evaluates the New regime for one total income.
    ///
    /// When the rebate applies, the reported taxable income is the total
    /// income itself: no deduction is taken because none is needed to reach
    /// a zero liability.
    pub fn evaluate(
        &self,
        total_income: Decimal,
    ) -> TaxResult {
        if let Some(threshold) = self.schedule.full_rebate_below {
            if total_income < threshold {
                debug!(%total_income, %threshold, "full rebate applies");
                return TaxResult {
                    regime: self.schedule.regime,
                    taxable_income: total_income,
                    tax_liability: Decimal::ZERO,
                };
            }
        }

        let taxable_income = max(
            round_half_up(total_income - self.schedule.standard_deduction),
            Decimal::ZERO,
        );
        let tax_liability = compute_tax(taxable_income, &self.schedule.bands);

        debug!(%taxable_income, %tax_liability, "evaluated new regime");

        TaxResult {
            regime: self.schedule.regime,
            taxable_income,
            tax_liability,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Regime;

    #[test]
    fn below_threshold_is_fully_rebated() {
        let schedule = TaxSchedule::new_regime();
        let worksheet = NewRegimeWorksheet::new(&schedule);

        let result = worksheet.evaluate(dec!(1274999));

        assert_eq!(result.tax_liability, dec!(0));
        assert_eq!(result.taxable_income, dec!(1274999));
        assert_eq!(result.regime, Regime::New);
    }

    #[test]
    fn rebate_does_not_apply_at_the_threshold() {
        let schedule = TaxSchedule::new_regime();
        let worksheet = NewRegimeWorksheet::new(&schedule);

        let result = worksheet.evaluate(dec!(1275000));

        // 1,275,000 - 75,000 = 1,200,000; 5% of 400,000 + 10% of 400,000
        assert_eq!(result.taxable_income, dec!(1200000));
        assert_eq!(result.tax_liability, dec!(60000));
    }

    #[test]
    fn zero_income_is_rebated() {
        let schedule = TaxSchedule::new_regime();
        let worksheet = NewRegimeWorksheet::new(&schedule);

        let result = worksheet.evaluate(dec!(0));

        assert_eq!(result.tax_liability, dec!(0));
    }

    #[test]
    fn high_income_taxed_through_the_slabs() {
        let schedule = TaxSchedule::new_regime();
        let worksheet = NewRegimeWorksheet::new(&schedule);

        let result = worksheet.evaluate(dec!(3075000));

        // Taxable 3,000,000: 20,000 + 40,000 + 60,000 + 80,000 + 100,000
        // + 30% of 600,000
        assert_eq!(result.taxable_income, dec!(3000000));
        assert_eq!(result.tax_liability, dec!(480000));
    }

    #[test]
    fn schedule_without_rebate_threshold_skips_the_rebate() {
        let mut schedule = TaxSchedule::new_regime();
        schedule.full_rebate_below = None;
        let worksheet = NewRegimeWorksheet::new(&schedule);

        let result = worksheet.evaluate(dec!(500000));

        // 500,000 - 75,000 = 425,000; 5% of 25,000
        assert_eq!(result.taxable_income, dec!(425000));
        assert_eq!(result.tax_liability, dec!(1250));
    }
}
