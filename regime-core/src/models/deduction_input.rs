use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized deductions claimed under the Old regime.
///
/// Each amount is independently non-negative. The statutory caps (1.5 lakh
/// on Section 80C, 2 lakh on home-loan interest) are enforced by the input
/// layer; the engine sums whatever it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionInput {
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub home_loan_interest: Decimal,
    pub nps: Decimal,
    pub voluntary_pf: Decimal,
    pub other: Decimal,
}
