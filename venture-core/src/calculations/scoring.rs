//! Venture viability scoring.
//!
//! Turns the numeric questionnaire answers into unit economics and a
//! composite 0..=100 score.
//!
//! # Derivation
//!
//! | Metric | Formula |
//! |--------|---------|
//! | margin | price - cost |
//! | margin percent | margin / price × 100, one decimal place (`None` when price is 0) |
//! | daily buyers | round(traffic × conversion / 100) |
//! | daily profit | daily buyers × margin |
//! | monthly profit | daily profit × 30 - monthly expenses |
//! | payback | ceil(investment / daily profit), or never when daily profit ≤ 0 |
//!
//! # Score
//!
//! | Factor | Formula | Cap |
//! |--------|---------|-----|
//! | margin | margin percent / 50 × 30 | 30 |
//! | demand | daily buyers / 10 × 20 | 20 |
//! | profitability | 20 if monthly profit > 0, else 5 | fixed |
//! | scalability | 15 if traffic > 1000 and conversion > 2, else 8 | fixed |
//! | stability | 15 if payback < 90 days, else 5 | fixed |
//!
//! Each factor is capped before summation; the sum is clamped to 0..=100 and
//! rounded. All weights and thresholds come from [`ScoringConfig`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use venture_core::{AnswerSet, FieldId, PaybackPeriod, Rating, VentureScorer};
//!
//! let answers = AnswerSet::new()
//!     .with(FieldId::PricePoint, "5")
//!     .with(FieldId::CostPrice, "1.5")
//!     .with(FieldId::DailyTraffic, "1500")
//!     .with(FieldId::ConversionRate, "2")
//!     .with(FieldId::MonthlyExpenses, "500")
//!     .with(FieldId::InitialInvestment, "1000");
//!
//! let result = VentureScorer::default().score(&answers);
//!
//! assert_eq!(result.margin, dec!(3.50));
//! assert_eq!(result.margin_pct, Some(dec!(70.0)));
//! assert_eq!(result.daily_buyers, dec!(30));
//! assert_eq!(result.monthly_profit, dec!(2650));
//! assert_eq!(result.payback, PaybackPeriod::Days(dec!(10)));
//! assert_eq!(result.score, 93);
//! assert_eq!(result.rating, Rating::Excellent);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::calculations::common::{cap_at, round_dp, round_half_up, round_whole};
use crate::models::{
    AnswerSet, PaybackPeriod, Rating, ScoreFactors, ScoringConfig, ScoringConfigError,
    ScoringResult, VentureInputs,
};

/// Scores answer sets against a validated [`ScoringConfig`].
///
/// Scoring is pure: the same answers always produce the same result, and no
/// answer text can make it fail.
#[derive(Debug, Clone, Default)]
pub struct VentureScorer {
    config: ScoringConfig,
}

/// Scores `answers` with the default weights and thresholds.
pub fn score(answers: &AnswerSet) -> ScoringResult {
    VentureScorer::default().score(answers)
}

impl VentureScorer {
    /// Creates a scorer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringConfigError`] if a divisor is not positive or a
    /// weight is negative.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Parses the numeric answers and scores them.
    pub fn score(
        &self,
        answers: &AnswerSet,
    ) -> ScoringResult {
        let inputs = VentureInputs::from_answers(answers, self.config.default_investment);
        let result = self.score_inputs(&inputs);
        debug!(
            score = result.score,
            rating = %result.rating,
            daily_buyers = %result.daily_buyers,
            monthly_profit = %result.monthly_profit,
            "venture scored"
        );
        result
    }

    /// Scores already-parsed inputs.
    pub fn score_inputs(
        &self,
        inputs: &VentureInputs,
    ) -> ScoringResult {
        let margin = self.margin(inputs.price, inputs.cost);
        let margin_pct = self.margin_pct(margin, inputs.price);
        let daily_buyers = self.daily_buyers(inputs.traffic, inputs.conversion_pct);
        let daily_profit = self.daily_profit(daily_buyers, margin);
        let monthly_profit = self.monthly_profit(daily_profit, inputs.monthly_expenses);
        let payback = self.payback(inputs.initial_investment, daily_profit);

        let factors = ScoreFactors {
            margin: self.margin_factor(margin_pct),
            demand: self.demand_factor(daily_buyers),
            profitability: self.profitability_factor(monthly_profit),
            scalability: self.scalability_factor(inputs.traffic, inputs.conversion_pct),
            stability: self.stability_factor(payback),
        };
        let score = self.composite_score(&factors);

        ScoringResult {
            margin: money(margin),
            margin_pct,
            daily_buyers,
            daily_profit: money(daily_profit),
            monthly_profit: round_whole(monthly_profit),
            payback,
            factors,
            score,
            rating: Rating::from_score(score),
        }
    }

    /// Per-unit margin. May be negative.
    fn margin(
        &self,
        price: Decimal,
        cost: Decimal,
    ) -> Decimal {
        price.saturating_sub(cost)
    }

    /// Margin as a percent of price, one decimal place. Undefined for a zero price.
    fn margin_pct(
        &self,
        margin: Decimal,
        price: Decimal,
    ) -> Option<Decimal> {
        if price.is_zero() {
            return None;
        }
        let mut pct = round_dp(
            saturating_div(margin, price).saturating_mul(Decimal::ONE_HUNDRED),
            1,
        );
        pct.rescale(1);
        Some(pct)
    }

    /// Expected buyers per day, whole number. Conversion is a percent.
    fn daily_buyers(
        &self,
        traffic: Decimal,
        conversion_pct: Decimal,
    ) -> Decimal {
        round_whole(saturating_div(
            traffic.saturating_mul(conversion_pct),
            Decimal::ONE_HUNDRED,
        ))
    }

    fn daily_profit(
        &self,
        daily_buyers: Decimal,
        margin: Decimal,
    ) -> Decimal {
        daily_buyers.saturating_mul(margin)
    }

    /// Unrounded monthly profit after expenses.
    fn monthly_profit(
        &self,
        daily_profit: Decimal,
        monthly_expenses: Decimal,
    ) -> Decimal {
        daily_profit
            .saturating_mul(self.config.days_per_month)
            .saturating_sub(monthly_expenses)
    }

    /// Days to earn back the investment, rounded up.
    fn payback(
        &self,
        investment: Decimal,
        daily_profit: Decimal,
    ) -> PaybackPeriod {
        if daily_profit > Decimal::ZERO {
            PaybackPeriod::Days(saturating_div(investment, daily_profit).ceil())
        } else {
            PaybackPeriod::Never
        }
    }

    /// Linear in margin percent, capped at the margin weight. Zero when the
    /// margin percent is undefined.
    fn margin_factor(
        &self,
        margin_pct: Option<Decimal>,
    ) -> Decimal {
        let factor = &self.config.margin;
        margin_pct
            .map(|pct| {
                let credit =
                    saturating_div(pct, factor.full_credit_pct).saturating_mul(factor.weight);
                cap_at(credit, factor.weight)
            })
            .unwrap_or(Decimal::ZERO)
    }

    /// Linear in daily buyers, capped at the demand weight.
    fn demand_factor(
        &self,
        daily_buyers: Decimal,
    ) -> Decimal {
        let factor = &self.config.demand;
        let credit =
            saturating_div(daily_buyers, factor.full_credit_buyers).saturating_mul(factor.weight);
        cap_at(credit, factor.weight)
    }

    fn profitability_factor(
        &self,
        monthly_profit: Decimal,
    ) -> Decimal {
        let factor = &self.config.profitability;
        if monthly_profit > Decimal::ZERO {
            factor.profitable
        } else {
            factor.unprofitable
        }
    }

    fn scalability_factor(
        &self,
        traffic: Decimal,
        conversion_pct: Decimal,
    ) -> Decimal {
        let factor = &self.config.scalability;
        if traffic > factor.min_traffic && conversion_pct > factor.min_conversion_pct {
            factor.scalable
        } else {
            factor.limited
        }
    }

    fn stability_factor(
        &self,
        payback: PaybackPeriod,
    ) -> Decimal {
        let factor = &self.config.stability;
        match payback {
            PaybackPeriod::Days(days) if days < factor.max_payback_days => factor.stable,
            _ => factor.unstable,
        }
    }

    /// Sum of the factors clamped to 0..=100 and rounded.
    fn composite_score(
        &self,
        factors: &ScoreFactors,
    ) -> u8 {
        let clamped = factors.total().clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        round_whole(clamped).to_u8().unwrap_or(0)
    }
}

/// Rounds to cents and always carries two decimal places.
fn money(value: Decimal) -> Decimal {
    let mut cents = round_half_up(value);
    cents.rescale(2);
    cents
}

/// Division that saturates instead of overflowing. `divisor` must be non-zero.
fn saturating_div(
    dividend: Decimal,
    divisor: Decimal,
) -> Decimal {
    dividend.checked_div(divisor).unwrap_or_else(|| {
        if dividend.is_sign_negative() == divisor.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}
