use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use regime_core::TaxSchedule;
use regime_core::calculations::{NewRegimeWorksheet, OldRegimeWorksheet, compare};

mod cli;
mod input;
mod report;
mod validate;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();

    let raw = match &args.input {
        Some(path) => input::RawInput::from_toml_file(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => args.to_raw_input()?,
    };

    let (salary, deductions) = validate::resolve(&raw)?;

    let old_schedule = TaxSchedule::old_regime();
    let new_schedule = TaxSchedule::new_regime();
    old_schedule
        .validate()
        .context("old regime schedule is malformed")?;
    new_schedule
        .validate()
        .context("new regime schedule is malformed")?;

    let old = OldRegimeWorksheet::new(&old_schedule).evaluate_detailed(&salary, &deductions);
    let new = NewRegimeWorksheet::new(&new_schedule).evaluate(salary.total_income);
    let choice = compare(&old.result, &new);

    print!(
        "{}",
        report::render(&old.result, &new, old.hra_exemption, choice)
    );

    Ok(())
}
