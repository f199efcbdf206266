use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive tax computation policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Old => "Old Tax Regime",
            Self::New => "New Tax Regime",
        }
    }
}

/// Outcome of comparing the two regimes' liabilities.
///
/// Equality is a distinct outcome, never tie-broken to either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegimeChoice {
    OldBetter,
    NewBetter,
    Equal,
}
