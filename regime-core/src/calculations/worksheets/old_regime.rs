//! Old-regime evaluation.
//!
//! Reduces gross income by the standard deduction, the HRA exemption, and
//! the itemized deductions, then applies the Old slab table.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annual rent = monthly rent × 12 |
//! | 2    | HRA exemption under the minimum-of-three rule |
//! | 3    | Total deductions = standard deduction + exemption + 80C + 80D + home-loan interest + NPS + voluntary PF + other |
//! | 4    | Taxable income = max(total income − total deductions, 0) |
//! | 5    | Tax via the slab table |
//!
//! # Example
//!
//! ```
//! use regime_core::calculations::OldRegimeWorksheet;
//! use regime_core::{CityType, DeductionInput, SalaryInput, TaxSchedule};
//! use rust_decimal_macros::dec;
//!
//! let schedule = TaxSchedule::old_regime();
//! let salary = SalaryInput {
//!     total_income: dec!(600000),
//!     basic_salary: dec!(180000),
//!     hra_received: dec!(90000),
//!     monthly_rent: dec!(0),
//!     city_type: CityType::Metro,
//! };
//! let deductions = DeductionInput {
//!     section_80c: dec!(150000),
//!     section_80d: dec!(50000),
//!     ..DeductionInput::default()
//! };
//!
//! let result = OldRegimeWorksheet::new(&schedule).evaluate(&salary, &deductions);
//!
//! assert_eq!(result.taxable_income, dec!(350000));
//! assert_eq!(result.tax_liability, dec!(5000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::{compute_hra_exemption, compute_tax};
use crate::models::{DeductionInput, SalaryInput, TaxResult, TaxSchedule};

/// Result of the Old-regime worksheet with its intermediate figures.
///
/// Callers that display the HRA exemption or the deduction total read them
/// from here instead of re-deriving them alongside the worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldRegimeBreakdown {
    /// Exempt portion of HRA (step 2).
    pub hra_exemption: Decimal,
    /// Standard deduction plus exemption plus itemized deductions (step 3).
    pub total_deductions: Decimal,
    pub result: TaxResult,
}

/// Evaluator for the Old regime.
///
/// The schedule is expected to be the built-in Old table (or a validated
/// equivalent); the worksheet does not re-check it.
#[derive(Debug, Clone)]
pub struct OldRegimeWorksheet<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> OldRegimeWorksheet<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Evaluates the Old regime for one salary and deduction set.
    pub fn evaluate(
        &self,
        salary: &SalaryInput,
        deductions: &DeductionInput,
    ) -> TaxResult {
        self.evaluate_detailed(salary, deductions).result
    }

    /// Evaluates the Old regime and keeps the intermediate figures.
    pub fn evaluate_detailed(
        &self,
        salary: &SalaryInput,
        deductions: &DeductionInput,
    ) -> OldRegimeBreakdown {
        let annual_rent = salary.monthly_rent * dec!(12);
        let hra_exemption = compute_hra_exemption(
            salary.basic_salary,
            salary.hra_received,
            annual_rent,
            salary.city_type,
        );
        let total_deductions = self.total_deductions(hra_exemption, deductions);
        let taxable_income = self.taxable_income(salary.total_income, total_deductions);
        let tax_liability = compute_tax(taxable_income, &self.schedule.bands);

        debug!(
            %hra_exemption,
            %total_deductions,
            %taxable_income,
            %tax_liability,
            "evaluated old regime"
        );

        OldRegimeBreakdown {
            hra_exemption,
            total_deductions,
            result: TaxResult {
                regime: self.schedule.regime,
                taxable_income,
                tax_liability,
            },
        }
    }

    /// Sums the standard deduction, the HRA exemption, and every itemized
    /// deduction. No caps are applied here; the input layer enforces them.
    fn total_deductions(
        &self,
        hra_exemption: Decimal,
        deductions: &DeductionInput,
    ) -> Decimal {
        round_half_up(
            self.schedule.standard_deduction
                + hra_exemption
                + deductions.section_80c
                + deductions.section_80d
                + deductions.home_loan_interest
                + deductions.nps
                + deductions.voluntary_pf
                + deductions.other,
        )
    }

    /// Taxable income, clamped so deductions never produce a negative base.
    fn taxable_income(
        &self,
        total_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(round_half_up(total_income - total_deductions), Decimal::ZERO)
    }
}
