//! Plain-text rendering of the comparison result.

use std::fmt::Write;

use rust_decimal::Decimal;

use regime_core::{Regime, RegimeChoice, TaxResult};

/// Formats a rupee amount with thousands separators, dropping the paise
/// when they are zero.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("₹{sign}{grouped}.{frac}"),
        None => format!("₹{sign}{grouped}"),
    }
}

/// Renders the side-by-side comparison and the recommendation line.
pub fn render(
    old: &TaxResult,
    new: &TaxResult,
    hra_exemption: Decimal,
    choice: RegimeChoice,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", Regime::Old.display_name());
    let _ = writeln!(out, "  HRA exemption:  {}", format_inr(hra_exemption));
    let _ = writeln!(out, "  Taxable income: {}", format_inr(old.taxable_income));
    let _ = writeln!(out, "  Tax liability:  {}", format_inr(old.tax_liability));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", Regime::New.display_name());
    let _ = writeln!(out, "  Taxable income: {}", format_inr(new.taxable_income));
    let _ = writeln!(out, "  Tax liability:  {}", format_inr(new.tax_liability));
    let _ = writeln!(out);

    let recommendation = match choice {
        RegimeChoice::OldBetter => {
            "Based on the details provided, the Old Tax Regime is better for you."
        }
        RegimeChoice::NewBetter => {
            "Based on the details provided, the New Tax Regime is better for you."
        }
        RegimeChoice::Equal => "Both regimes yield the same tax liability.",
    };
    let _ = writeln!(out, "{recommendation}");

    out
}
