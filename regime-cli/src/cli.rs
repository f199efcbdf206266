use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use crate::input::RawInput;

/// Compare income tax liability under the Old and New regimes.
///
/// Collects one year's salary figures and Old-regime deductions, evaluates
/// both slab schedules, and reports which regime yields the lower tax.
#[derive(Parser, Debug)]
#[command(name = "regime-compare")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Read all inputs from a TOML file instead of flags
    #[arg(
        long,
        conflicts_with_all = [
            "ctc", "bonus", "basic_percent", "basic_amount", "hra_percent", "hra_amount",
            "rent", "city", "section_80c", "section_80d", "home_loan_interest", "nps",
            "voluntary_pf", "other_deductions",
        ]
    )]
    pub input: Option<PathBuf>,

    /// Annual CTC in rupees
    #[arg(long, required_unless_present = "input")]
    pub ctc: Option<Decimal>,

    /// Annual bonus in rupees
    #[arg(long, default_value = "0")]
    pub bonus: Decimal,

    /// Basic salary as a percentage of total income (10-50, default 30)
    #[arg(long, conflicts_with = "basic_amount")]
    pub basic_percent: Option<Decimal>,

    /// Basic salary as an annual amount
    #[arg(long)]
    pub basic_amount: Option<Decimal>,

    /// HRA received as a percentage of basic salary (0-100, default 50)
    #[arg(long, conflicts_with = "hra_amount")]
    pub hra_percent: Option<Decimal>,

    /// HRA received as an annual amount
    #[arg(long)]
    pub hra_amount: Option<Decimal>,

    /// Monthly rent paid in rupees
    #[arg(long, default_value = "0")]
    pub rent: Decimal,

    /// City classification: metro or non-metro
    #[arg(long, default_value = "metro")]
    pub city: String,

    /// Section 80C deduction (capped at 150,000)
    #[arg(long, default_value = "0")]
    pub section_80c: Decimal,

    /// Section 80D insurance deduction
    #[arg(long, default_value = "0")]
    pub section_80d: Decimal,

    /// Home-loan interest deduction (capped at 200,000)
    #[arg(long, default_value = "0")]
    pub home_loan_interest: Decimal,

    /// NPS deduction
    #[arg(long, default_value = "0")]
    pub nps: Decimal,

    /// Voluntary PF deduction
    #[arg(long, default_value = "0")]
    pub voluntary_pf: Decimal,

    /// Other deductions
    #[arg(long, default_value = "0")]
    pub other_deductions: Decimal,
}

impl Args {
    /// Collects the flag values into a [`RawInput`].
    pub fn to_raw_input(&self) -> Result<RawInput> {
        let ctc = self
            .ctc
            .context("--ctc is required unless --input is given")?;
        Ok(RawInput {
            ctc,
            bonus: self.bonus,
            basic_percent: self.basic_percent,
            basic_amount: self.basic_amount,
            hra_percent: self.hra_percent,
            hra_amount: self.hra_amount,
            monthly_rent: self.rent,
            city: self.city.clone(),
            section_80c: self.section_80c,
            section_80d: self.section_80d,
            home_loan_interest: self.home_loan_interest,
            nps: self.nps,
            voluntary_pf: self.voluntary_pf,
            other_deductions: self.other_deductions,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn minimal_invocation_uses_defaults() {
        let args = Args::parse_from(["regime-compare", "--ctc", "600000"]);
        let raw = args.to_raw_input().unwrap();

        assert_eq!(raw.ctc, dec!(600000));
        assert_eq!(raw.bonus, dec!(0));
        assert_eq!(raw.basic_percent, None);
        assert_eq!(raw.city, "metro");
    }

    #[test]
    fn percent_and_amount_forms_conflict() {
        let result = Args::try_parse_from([
            "regime-compare",
            "--ctc",
            "600000",
            "--basic-percent",
            "30",
            "--basic-amount",
            "180000",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn input_file_conflicts_with_ctc() {
        let result = Args::try_parse_from([
            "regime-compare",
            "--input",
            "salary.toml",
            "--ctc",
            "600000",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn input_file_conflicts_with_every_value_flag() {
        // Defaulted-but-unset flags never trigger a clap conflict, so each
        // explicitly supplied flag must be rejected rather than silently
        // losing to the file's values.
        for (flag, value) in [
            ("--bonus", "50000"),
            ("--rent", "20000"),
            ("--city", "non-metro"),
            ("--section-80c", "100000"),
            ("--section-80d", "25000"),
            ("--home-loan-interest", "150000"),
            ("--nps", "50000"),
            ("--voluntary-pf", "10000"),
            ("--other-deductions", "5000"),
        ] {
            let result =
                Args::try_parse_from(["regime-compare", "--input", "salary.toml", flag, value]);

            assert!(result.is_err(), "{flag} was accepted alongside --input");
        }
    }

    #[test]
    fn input_file_alone_parses() {
        let args = Args::try_parse_from(["regime-compare", "--input", "salary.toml"]);

        assert!(args.is_ok());
    }

    #[test]
    fn ctc_required_without_input_file() {
        let result = Args::try_parse_from(["regime-compare", "--bonus", "10000"]);

        assert!(result.is_err());
    }
}
