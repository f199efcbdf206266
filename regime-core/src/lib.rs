//! Pure calculation engine for comparing Indian income tax regimes.
//!
//! Given one year's salary figures and itemized deductions, this crate
//! evaluates the tax liability under both the Old and New slab regimes and
//! reports which one is cheaper. All computations are synchronous,
//! side-effect-free, and operate on pass-by-value records; any validation
//! of the inputs is the caller's responsibility.

pub mod calculations;
pub mod models;

pub use calculations::{
    NewRegimeWorksheet, OldRegimeBreakdown, OldRegimeWorksheet, compare, compute_hra_exemption,
    compute_tax,
};
pub use models::*;
