use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`ScoringConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringConfigError {
    /// A value used as a divisor must be strictly positive.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: Decimal },

    /// Weights and fixed factor scores cannot be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },
}

/// Weights and thresholds of the viability score.
///
/// Missing keys in a configuration file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Days in a month when extrapolating daily profit.
    pub days_per_month: Decimal,

    /// Initial investment assumed when the answer is missing or unusable.
    pub default_investment: Decimal,

    pub margin: MarginFactor,
    pub demand: DemandFactor,
    pub profitability: ProfitabilityFactor,
    pub scalability: ScalabilityFactor,
    pub stability: StabilityFactor,
}

/// Linear credit for margin percent, capped at `weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginFactor {
    pub weight: Decimal,
    /// Margin percent that earns the full weight.
    pub full_credit_pct: Decimal,
}

/// Linear credit for daily buyers, capped at `weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandFactor {
    pub weight: Decimal,
    /// Daily buyers that earn the full weight.
    pub full_credit_buyers: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitabilityFactor {
    pub profitable: Decimal,
    pub unprofitable: Decimal,
}

/// Both thresholds are strict: traffic and conversion must exceed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalabilityFactor {
    pub min_traffic: Decimal,
    pub min_conversion_pct: Decimal,
    pub scalable: Decimal,
    pub limited: Decimal,
}

/// `stable` is awarded when payback takes fewer than `max_payback_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityFactor {
    pub max_payback_days: Decimal,
    pub stable: Decimal,
    pub unstable: Decimal,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            days_per_month: Decimal::from(30),
            default_investment: Decimal::from(1000),
            margin: MarginFactor::default(),
            demand: DemandFactor::default(),
            profitability: ProfitabilityFactor::default(),
            scalability: ScalabilityFactor::default(),
            stability: StabilityFactor::default(),
        }
    }
}

impl Default for MarginFactor {
    fn default() -> Self {
        Self {
            weight: Decimal::from(30),
            full_credit_pct: Decimal::from(50),
        }
    }
}

impl Default for DemandFactor {
    fn default() -> Self {
        Self {
            weight: Decimal::from(20),
            full_credit_buyers: Decimal::from(10),
        }
    }
}

impl Default for ProfitabilityFactor {
    fn default() -> Self {
        Self {
            profitable: Decimal::from(20),
            unprofitable: Decimal::from(5),
        }
    }
}

impl Default for ScalabilityFactor {
    fn default() -> Self {
        Self {
            min_traffic: Decimal::from(1000),
            min_conversion_pct: Decimal::TWO,
            scalable: Decimal::from(15),
            limited: Decimal::from(8),
        }
    }
}

impl Default for StabilityFactor {
    fn default() -> Self {
        Self {
            max_payback_days: Decimal::from(90),
            stable: Decimal::from(15),
            unstable: Decimal::from(5),
        }
    }
}

impl ScoringConfig {
    /// Checks divisors and weights.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ScoringConfigError`].
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        positive("days_per_month", self.days_per_month)?;
        positive("margin.full_credit_pct", self.margin.full_credit_pct)?;
        positive("demand.full_credit_buyers", self.demand.full_credit_buyers)?;

        let weights = [
            ("margin.weight", self.margin.weight),
            ("demand.weight", self.demand.weight),
            ("profitability.profitable", self.profitability.profitable),
            ("profitability.unprofitable", self.profitability.unprofitable),
            ("scalability.scalable", self.scalability.scalable),
            ("scalability.limited", self.scalability.limited),
            ("stability.stable", self.stability.stable),
            ("stability.unstable", self.stability.unstable),
        ];
        for (field, value) in weights {
            non_negative(field, value)?;
        }

        Ok(())
    }

    /// Highest score the factors can add up to before the 0..=100 clamp.
    pub fn max_total(&self) -> Decimal {
        [
            self.margin.weight,
            self.demand.weight,
            self.profitability.profitable.max(self.profitability.unprofitable),
            self.scalability.scalable.max(self.scalability.limited),
            self.stability.stable.max(self.stability.unstable),
        ]
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

fn positive(
    field: &'static str,
    value: Decimal,
) -> Result<(), ScoringConfigError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ScoringConfigError::NonPositive { field, value })
    }
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), ScoringConfigError> {
    if value < Decimal::ZERO {
        Err(ScoringConfigError::Negative { field, value })
    } else {
        Ok(())
    }
}
