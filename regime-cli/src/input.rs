//! Raw, unvalidated inputs for one comparison run.
//!
//! [`RawInput`] mirrors the CLI flags and doubles as the schema of the
//! optional TOML input file; [`crate::validate::resolve`] turns it into the
//! engine's validated records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct RawInput {
    /// Annual CTC in rupees.
    pub ctc: Decimal,
    pub bonus: Decimal,
    /// Basic salary as a percentage of total income; mutually exclusive
    /// with `basic_amount`. Defaults to 30% when neither is given.
    pub basic_percent: Option<Decimal>,
    pub basic_amount: Option<Decimal>,
    /// HRA as a percentage of basic salary; mutually exclusive with
    /// `hra_amount`. Defaults to 50% when neither is given.
    pub hra_percent: Option<Decimal>,
    pub hra_amount: Option<Decimal>,
    pub monthly_rent: Decimal,
    /// "metro" or "non-metro".
    pub city: String,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub home_loan_interest: Decimal,
    pub nps: Decimal,
    pub voluntary_pf: Decimal,
    pub other_deductions: Decimal,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            ctc: Decimal::ZERO,
            bonus: Decimal::ZERO,
            basic_percent: None,
            basic_amount: None,
            hra_percent: None,
            hra_amount: None,
            monthly_rent: Decimal::ZERO,
            city: "metro".to_string(),
            section_80c: Decimal::ZERO,
            section_80d: Decimal::ZERO,
            home_loan_interest: Decimal::ZERO,
            nps: Decimal::ZERO,
            voluntary_pf: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }
}

impl RawInput {
    /// Reads and deserializes a TOML input file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse TOML: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn toml_with_every_field() {
        let raw: RawInput = toml::from_str(
            r#"
            ctc = 1200000
            bonus = 100000
            basic_percent = 40
            hra_amount = 240000
            monthly_rent = 20000
            city = "non-metro"
            section_80c = 150000
            section_80d = 25000
            home_loan_interest = 200000
            nps = 50000
            voluntary_pf = 10000
            other_deductions = 5000
            "#,
        )
        .unwrap();

        assert_eq!(raw.ctc, dec!(1200000));
        assert_eq!(raw.basic_percent, Some(dec!(40)));
        assert_eq!(raw.basic_amount, None);
        assert_eq!(raw.hra_amount, Some(dec!(240000)));
        assert_eq!(raw.city, "non-metro");
    }

    #[test]
    fn toml_defaults_missing_fields() {
        let raw: RawInput = toml::from_str("ctc = 600000").unwrap();

        assert_eq!(raw.ctc, dec!(600000));
        assert_eq!(raw.bonus, dec!(0));
        assert_eq!(raw.city, "metro");
        assert_eq!(raw.monthly_rent, dec!(0));
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        let result: Result<RawInput, _> = toml::from_str("ctc = 600000\npan_number = \"x\"");

        assert!(result.is_err());
    }
}
