//! End-to-end tests driving both worksheets and the comparison together.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use regime_core::calculations::{NewRegimeWorksheet, OldRegimeWorksheet, compare, compute_tax};
use regime_core::{CityType, DeductionInput, RegimeChoice, SalaryInput, TaxSchedule};

fn evaluate_both(
    salary: &SalaryInput,
    deductions: &DeductionInput,
) -> (regime_core::TaxResult, regime_core::TaxResult) {
    let old_schedule = TaxSchedule::old_regime();
    let new_schedule = TaxSchedule::new_regime();
    let old = OldRegimeWorksheet::new(&old_schedule).evaluate(salary, deductions);
    let new = NewRegimeWorksheet::new(&new_schedule).evaluate(salary.total_income);
    (old, new)
}

#[test]
fn six_lakh_ctc_with_heavy_deductions_is_a_tie() {
    // CTC 600,000, no bonus, basic 30%, HRA 50% of basic, no rent, Metro,
    // 80C 150,000, 80D 50,000.
    let salary = SalaryInput {
        total_income: dec!(600000),
        basic_salary: dec!(180000),
        hra_received: dec!(90000),
        monthly_rent: dec!(0),
        city_type: CityType::Metro,
    };
    let deductions = DeductionInput {
        section_80c: dec!(150000),
        section_80d: dec!(50000),
        ..DeductionInput::default()
    };

    let (old, new) = evaluate_both(&salary, &deductions);

    // Old: 600,000 - 250,000 = 200,000 taxable, inside the nil band.
    assert_eq!(old.taxable_income, dec!(200000));
    assert_eq!(old.tax_liability, dec!(0));
    // New: under the 12.75 lakh threshold, fully rebated.
    assert_eq!(new.tax_liability, dec!(0));
    assert_eq!(compare(&old, &new), RegimeChoice::Equal);
}

#[test]
fn high_income_with_full_deductions_favours_the_old_regime() {
    // 20 lakh income with every deduction maxed out and substantial rent.
    let salary = SalaryInput {
        total_income: dec!(2000000),
        basic_salary: dec!(800000),
        hra_received: dec!(400000),
        monthly_rent: dec!(30000),
        city_type: CityType::Metro,
    };
    let deductions = DeductionInput {
        section_80c: dec!(150000),
        section_80d: dec!(75000),
        home_loan_interest: dec!(200000),
        nps: dec!(50000),
        voluntary_pf: dec!(0),
        other: dec!(0),
    };

    let (old, new) = evaluate_both(&salary, &deductions);

    // HRA exemption: min(400,000, 360,000 - 80,000, 400,000) = 280,000.
    // Old taxable: 2,000,000 - (50,000 + 280,000 + 475,000) = 1,195,000.
    assert_eq!(old.taxable_income, dec!(1195000));
    // 12,500 + 100,000 + 30% of 195,000
    assert_eq!(old.tax_liability, dec!(171000));
    // New taxable: 1,925,000; 20,000 + 40,000 + 60,000 + 20% of 325,000
    assert_eq!(new.taxable_income, dec!(1925000));
    assert_eq!(new.tax_liability, dec!(185000));
    assert_eq!(compare(&old, &new), RegimeChoice::OldBetter);
}

#[test]
fn moderate_income_without_deductions_favours_the_new_regime() {
    // 11 lakh, no rent, nothing itemized: the rebate wipes the New liability
    // while the Old regime still owes tax.
    let salary = SalaryInput {
        total_income: dec!(1100000),
        basic_salary: dec!(330000),
        hra_received: dec!(165000),
        monthly_rent: dec!(0),
        city_type: CityType::NonMetro,
    };

    let (old, new) = evaluate_both(&salary, &DeductionInput::default());

    // Old taxable: 1,050,000; 12,500 + 100,000 + 30% of 50,000
    assert_eq!(old.tax_liability, dec!(127500));
    assert_eq!(new.tax_liability, dec!(0));
    assert_eq!(compare(&old, &new), RegimeChoice::NewBetter);
}

#[test]
fn rebate_boundary_is_a_strict_less_than() {
    let schedule = TaxSchedule::new_regime();
    let worksheet = NewRegimeWorksheet::new(&schedule);

    assert_eq!(worksheet.evaluate(dec!(1274999)).tax_liability, dec!(0));

    let at_boundary = worksheet.evaluate(dec!(1275000));
    assert_eq!(
        at_boundary.tax_liability,
        compute_tax(dec!(1200000), &schedule.bands)
    );
}

#[test]
fn comparison_is_antisymmetric() {
    let salary = SalaryInput {
        total_income: dec!(2000000),
        basic_salary: dec!(600000),
        hra_received: dec!(300000),
        monthly_rent: dec!(25000),
        city_type: CityType::Metro,
    };
    let deductions = DeductionInput {
        section_80c: dec!(150000),
        section_80d: dec!(50000),
        home_loan_interest: dec!(200000),
        ..DeductionInput::default()
    };

    let (old, new) = evaluate_both(&salary, &deductions);

    match compare(&old, &new) {
        RegimeChoice::OldBetter => {
            assert!(old.tax_liability < new.tax_liability);
            assert_eq!(compare(&new, &old), RegimeChoice::NewBetter);
        }
        RegimeChoice::NewBetter => {
            assert!(new.tax_liability < old.tax_liability);
            assert_eq!(compare(&new, &old), RegimeChoice::OldBetter);
        }
        RegimeChoice::Equal => {
            assert_eq!(old.tax_liability, new.tax_liability);
            assert_eq!(compare(&new, &old), RegimeChoice::Equal);
        }
    }
}

#[test]
fn slab_tax_is_monotone_over_a_fine_sweep() {
    let old = TaxSchedule::old_regime();

    let mut previous = Decimal::ZERO;
    for step in 0..=60 {
        let income = Decimal::from(step * 25000);
        let tax = compute_tax(income, &old.bands);
        assert!(
            tax >= previous,
            "tax fell from {previous} to {tax} at income {income}"
        );
        previous = tax;
    }
}

#[test]
fn slab_tax_has_no_jump_at_any_old_band_boundary() {
    let old = TaxSchedule::old_regime();

    for band in &old.bands {
        let Some(upper) = band.upper else { continue };
        let at = compute_tax(upper, &old.bands);
        let below = compute_tax(upper - dec!(1), &old.bands);

        // One rupee below the boundary costs exactly one rupee at the
        // band's own marginal rate less.
        assert_eq!(at - below, band.rate / dec!(100));
    }
}
