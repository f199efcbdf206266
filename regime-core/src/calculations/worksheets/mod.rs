//! Per-regime evaluation worksheets.
//!
//! Each worksheet borrows a [`TaxSchedule`](crate::TaxSchedule) and turns
//! validated inputs into a [`TaxResult`](crate::TaxResult).

pub mod new_regime;
pub mod old_regime;

pub use new_regime::NewRegimeWorksheet;
pub use old_regime::{OldRegimeBreakdown, OldRegimeWorksheet};
