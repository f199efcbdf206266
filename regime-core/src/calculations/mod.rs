//! Calculation modules for the Old/New regime comparison.
//!
//! Everything here is a pure function of its inputs: the slab tax
//! computation, the HRA exemption rule, the per-regime worksheets, and the
//! final comparison.

pub mod common;
pub mod compare;
pub mod hra;
pub mod slab;
pub mod worksheets;

pub use compare::compare;
pub use hra::compute_hra_exemption;
pub use slab::compute_tax;
pub use worksheets::{NewRegimeWorksheet, OldRegimeBreakdown, OldRegimeWorksheet};
