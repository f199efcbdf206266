use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// City classification for the HRA exemption rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CityType {
    Metro,
    NonMetro,
}

impl CityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::NonMetro => "non-metro",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "metro" => Some(Self::Metro),
            "non-metro" => Some(Self::NonMetro),
            _ => None,
        }
    }

    /// Fraction of basic salary that caps the HRA exemption for this city
    /// class: 50% in a metro, 40% elsewhere.
    pub fn hra_limit_factor(&self) -> Decimal {
        match self {
            Self::Metro => dec!(0.50),
            Self::NonMetro => dec!(0.40),
        }
    }
}
