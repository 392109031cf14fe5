use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Rating;

/// How long the venture needs to earn back its initial investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaybackPeriod {
    /// Whole days of operation, rounded up.
    Days(Decimal),
    /// Daily profit is zero or negative.
    Never,
}

impl PaybackPeriod {
    /// Day count renderers show for [`PaybackPeriod::Never`].
    pub const NEVER_DAYS: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

    /// Day count, with `Never` mapped to [`Self::NEVER_DAYS`].
    pub fn as_days(&self) -> Decimal {
        match self {
            Self::Days(days) => *days,
            Self::Never => Self::NEVER_DAYS,
        }
    }
}

/// The five sub-scores, each already capped at its own maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactors {
    pub margin: Decimal,
    pub demand: Decimal,
    pub profitability: Decimal,
    pub scalability: Decimal,
    pub stability: Decimal,
}

impl ScoreFactors {
    /// Sum of all factors, saturating at the `Decimal` range.
    pub fn total(&self) -> Decimal {
        [self.demand, self.profitability, self.scalability, self.stability]
            .into_iter()
            .fold(self.margin, Decimal::saturating_add)
    }
}

/// Metrics and composite score for one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Per-unit margin, two decimal places.
    pub margin: Decimal,

    /// Margin as a percent of price, one decimal place.
    /// `None` when the price is zero.
    pub margin_pct: Option<Decimal>,

    /// Expected buyers per day, whole number.
    pub daily_buyers: Decimal,

    /// Two decimal places.
    pub daily_profit: Decimal,

    /// Whole currency units.
    pub monthly_profit: Decimal,

    pub payback: PaybackPeriod,

    pub factors: ScoreFactors,

    /// Composite score in `0..=100`.
    pub score: u8,

    pub rating: Rating,
}
