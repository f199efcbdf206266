use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CityType;

/// Salary-side inputs for a single comparison run.
///
/// All amounts are annual rupees except `monthly_rent`. Values are assumed
/// non-negative and pre-validated by the input layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross annual income (CTC plus bonus).
    pub total_income: Decimal,
    pub basic_salary: Decimal,
    /// HRA component actually received over the year.
    pub hra_received: Decimal,
    pub monthly_rent: Decimal,
    pub city_type: CityType,
}
