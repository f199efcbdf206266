use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One contiguous income range taxed at a single marginal rate.
///
/// Within a schedule, bands are ordered ascending by `lower`, contiguous,
/// and non-overlapping; only the final band may be unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabBand {
    /// Inclusive lower bound of the band.
    pub lower: Decimal,
    /// Exclusive upper bound of the band, `None` for the unbounded top band.
    pub upper: Option<Decimal>,
    /// Marginal rate as a percentage in `[0, 100]`.
    pub rate: Decimal,
}
