use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Regime;

/// Outcome of evaluating one regime. Derived once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: Regime,
    pub taxable_income: Decimal,
    pub tax_liability: Decimal,
}
