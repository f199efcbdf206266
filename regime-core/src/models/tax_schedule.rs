use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Regime, SlabBand};

/// Errors reported by [`TaxSchedule::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule has no slab bands at all.
    #[error("schedule has no slab bands")]
    Empty,

    /// The first band does not start at zero.
    #[error("first slab band must start at zero, got {0}")]
    NonZeroStart(Decimal),

    /// A band's lower bound does not match the previous band's upper bound.
    #[error("slab band starting at {found} is not contiguous with previous upper bound {expected}")]
    NotContiguous { expected: Decimal, found: Decimal },

    /// A marginal rate falls outside the percentage range.
    #[error("slab rate must be between 0 and 100, got {0}")]
    RateOutOfRange(Decimal),

    /// An unbounded band appears before the final position.
    #[error("only the final slab band may be unbounded")]
    UnboundedBeforeLast,

    /// The final band has an upper bound instead of covering all remaining income.
    #[error("final slab band must be unbounded")]
    BoundedLast,

    /// The standard deduction is negative.
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeStandardDeduction(Decimal),
}

/// A complete slab table for one regime.
///
/// Carries the ordered marginal-rate bands, the flat standard deduction
/// applied before tax computation, and (New regime only) the full-rebate
/// threshold below which no tax is owed at all.
///
/// The two statutory instances are built by [`TaxSchedule::old_regime`] and
/// [`TaxSchedule::new_regime`]; call sites should never re-declare the slab
/// tables themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    pub regime: Regime,
    pub bands: Vec<SlabBand>,
    pub standard_deduction: Decimal,
    /// Total incomes strictly below this threshold owe no tax. `None` for
    /// schedules without a rebate rule.
    pub full_rebate_below: Option<Decimal>,
}

impl TaxSchedule {
    /// Returns the built-in schedule for the given regime.
    pub fn for_regime(regime: Regime) -> Self {
        match regime {
            Regime::Old => Self::old_regime(),
            Regime::New => Self::new_regime(),
        }
    }

    /// The Old regime: four slabs and a 50,000 standard deduction.
    pub fn old_regime() -> Self {
        Self {
            regime: Regime::Old,
            bands: vec![
                SlabBand {
                    lower: dec!(0),
                    upper: Some(dec!(250000)),
                    rate: dec!(0),
                },
                SlabBand {
                    lower: dec!(250000),
                    upper: Some(dec!(500000)),
                    rate: dec!(5),
                },
                SlabBand {
                    lower: dec!(500000),
                    upper: Some(dec!(1000000)),
                    rate: dec!(20),
                },
                SlabBand {
                    lower: dec!(1000000),
                    upper: None,
                    rate: dec!(30),
                },
            ],
            standard_deduction: dec!(50000),
            full_rebate_below: None,
        }
    }

    /// The New regime: seven slabs, a 75,000 standard deduction, and a full
    /// rebate for total incomes below 12.75 lakh.
    pub fn new_regime() -> Self {
        Self {
            regime: Regime::New,
            bands: vec![
                SlabBand {
                    lower: dec!(0),
                    upper: Some(dec!(400000)),
                    rate: dec!(0),
                },
                SlabBand {
                    lower: dec!(400000),
                    upper: Some(dec!(800000)),
                    rate: dec!(5),
                },
                SlabBand {
                    lower: dec!(800000),
                    upper: Some(dec!(1200000)),
                    rate: dec!(10),
                },
                SlabBand {
                    lower: dec!(1200000),
                    upper: Some(dec!(1600000)),
                    rate: dec!(15),
                },
                SlabBand {
                    lower: dec!(1600000),
                    upper: Some(dec!(2000000)),
                    rate: dec!(20),
                },
                SlabBand {
                    lower: dec!(2000000),
                    upper: Some(dec!(2400000)),
                    rate: dec!(25),
                },
                SlabBand {
                    lower: dec!(2400000),
                    upper: None,
                    rate: dec!(30),
                },
            ],
            standard_deduction: dec!(75000),
            full_rebate_below: Some(dec!(1275000)),
        }
    }

    /// Validates that the slab table is well-formed.
    ///
    /// The calculation path assumes a valid schedule and performs no checks
    /// of its own; callers constructing schedules by hand should validate
    /// once up front and treat a failure as a precondition violation.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - the band list is empty
    /// - the first band does not start at zero
    /// - any band is not contiguous with its predecessor
    /// - any rate is outside `[0, 100]`
    /// - any band other than the last is unbounded, or the last is bounded
    /// - the standard deduction is negative
    ///
    /// # Example
    ///
    /// ```
    /// use regime_core::{Regime, ScheduleError, SlabBand, TaxSchedule};
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(TaxSchedule::old_regime().validate(), Ok(()));
    ///
    /// let gapped = TaxSchedule {
    ///     regime: Regime::Old,
    ///     bands: vec![
    ///         SlabBand { lower: dec!(0), upper: Some(dec!(250000)), rate: dec!(0) },
    ///         SlabBand { lower: dec!(300000), upper: None, rate: dec!(5) },
    ///     ],
    ///     standard_deduction: dec!(50000),
    ///     full_rebate_below: None,
    /// };
    /// assert_eq!(
    ///     gapped.validate(),
    ///     Err(ScheduleError::NotContiguous {
    ///         expected: dec!(250000),
    ///         found: dec!(300000),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let Some(first) = self.bands.first() else {
            return Err(ScheduleError::Empty);
        };
        if first.lower != Decimal::ZERO {
            return Err(ScheduleError::NonZeroStart(first.lower));
        }
        if self.standard_deduction < Decimal::ZERO {
            return Err(ScheduleError::NegativeStandardDeduction(
                self.standard_deduction,
            ));
        }

        let last_index = self.bands.len() - 1;
        let mut previous_upper: Option<Decimal> = None;
        for (index, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > dec!(100) {
                return Err(ScheduleError::RateOutOfRange(band.rate));
            }
            if let Some(expected) = previous_upper {
                if band.lower != expected {
                    return Err(ScheduleError::NotContiguous {
                        expected,
                        found: band.lower,
                    });
                }
            }
            match band.upper {
                Some(upper) => previous_upper = Some(upper),
                None if index < last_index => return Err(ScheduleError::UnboundedBeforeLast),
                None => previous_upper = None,
            }
        }
        if self.bands[last_index].upper.is_some() {
            return Err(ScheduleError::BoundedLast);
        }
        Ok(())
    }
}
