//! Input validation for the comparison run.
//!
//! The calculation engine assumes pre-validated, non-negative inputs; this
//! module is the layer that earns that assumption. It enforces the
//! statutory caps (1.5 lakh on Section 80C, 2 lakh on home-loan interest),
//! the percentage ranges, and non-negativity, then resolves the raw
//! percent-or-amount forms into the engine's records.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use regime_core::{CityType, DeductionInput, SalaryInput};

use crate::input::RawInput;

/// Errors produced while validating raw inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("basic salary percentage must be between 10 and 50, got {0}")]
    BasicPercentOutOfRange(Decimal),

    #[error("HRA percentage must be between 0 and 100, got {0}")]
    HraPercentOutOfRange(Decimal),

    #[error("section 80C deduction is capped at 150,000, got {0}")]
    Section80cOverCap(Decimal),

    #[error("home-loan interest deduction is capped at 200,000, got {0}")]
    HomeLoanOverCap(Decimal),

    #[error("unknown city type '{0}', expected 'metro' or 'non-metro'")]
    UnknownCity(String),

    #[error("basic salary given both as a percentage and as an amount")]
    ConflictingBasic,

    #[error("HRA given both as a percentage and as an amount")]
    ConflictingHra,
}

/// Validates a [`RawInput`] and resolves it into the engine's records.
///
/// Percentage forms default to the customary 30% basic and 50% HRA when
/// neither form is given, matching the typical salary split.
pub fn resolve(raw: &RawInput) -> Result<(SalaryInput, DeductionInput), InputError> {
    non_negative("CTC", raw.ctc)?;
    non_negative("bonus", raw.bonus)?;
    non_negative("monthly rent", raw.monthly_rent)?;
    non_negative("section 80C deduction", raw.section_80c)?;
    non_negative("section 80D deduction", raw.section_80d)?;
    non_negative("home-loan interest deduction", raw.home_loan_interest)?;
    non_negative("NPS deduction", raw.nps)?;
    non_negative("voluntary PF deduction", raw.voluntary_pf)?;
    non_negative("other deductions", raw.other_deductions)?;

    if raw.section_80c > dec!(150000) {
        return Err(InputError::Section80cOverCap(raw.section_80c));
    }
    if raw.home_loan_interest > dec!(200000) {
        return Err(InputError::HomeLoanOverCap(raw.home_loan_interest));
    }

    let city_type =
        CityType::parse(&raw.city).ok_or_else(|| InputError::UnknownCity(raw.city.clone()))?;

    let total_income = raw.ctc + raw.bonus;

    let basic_salary = match (raw.basic_percent, raw.basic_amount) {
        (Some(_), Some(_)) => return Err(InputError::ConflictingBasic),
        (Some(percent), None) => {
            if percent < dec!(10) || percent > dec!(50) {
                return Err(InputError::BasicPercentOutOfRange(percent));
            }
            total_income * percent / dec!(100)
        }
        (None, Some(amount)) => {
            non_negative("basic salary", amount)?;
            amount
        }
        (None, None) => total_income * dec!(30) / dec!(100),
    };

    let hra_received = match (raw.hra_percent, raw.hra_amount) {
        (Some(_), Some(_)) => return Err(InputError::ConflictingHra),
        (Some(percent), None) => {
            if percent < Decimal::ZERO || percent > dec!(100) {
                return Err(InputError::HraPercentOutOfRange(percent));
            }
            basic_salary * percent / dec!(100)
        }
        (None, Some(amount)) => {
            non_negative("HRA received", amount)?;
            amount
        }
        (None, None) => basic_salary * dec!(50) / dec!(100),
    };

    debug!(%total_income, %basic_salary, %hra_received, "resolved salary inputs");

    Ok((
        SalaryInput {
            total_income,
            basic_salary,
            hra_received,
            monthly_rent: raw.monthly_rent,
            city_type,
        },
        DeductionInput {
            section_80c: raw.section_80c,
            section_80d: raw.section_80d,
            home_loan_interest: raw.home_loan_interest,
            nps: raw.nps,
            voluntary_pf: raw.voluntary_pf,
            other: raw.other_deductions,
        },
    ))
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), InputError> {
    if value < Decimal::ZERO {
        Err(InputError::Negative { field, value })
    } else {
        Ok(())
    }
}
