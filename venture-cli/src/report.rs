//! Rendering of scoring results as plain text and as CSV rows.

use std::fmt;
use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use venture_core::{AnswerSet, FieldId, PaybackPeriod, ScoringResult};

use crate::utils::{group_thousands, money_display, opt_pct_display};

const CURRENCY: &str = "EUR";

/// A scoring result ready for display, optionally headed by the product answers.
pub struct Report<'a> {
    result: &'a ScoringResult,
    answers: Option<&'a AnswerSet>,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a ScoringResult) -> Self {
        Self {
            result,
            answers: None,
        }
    }

    pub fn with_answers(
        mut self,
        answers: &'a AnswerSet,
    ) -> Self {
        self.answers = Some(answers);
        self
    }
}

/// Payback in days, or "never" when the venture does not earn back its investment.
pub fn payback_display(payback: &PaybackPeriod) -> String {
    match payback {
        PaybackPeriod::Days(days) => format!("{} days", group_thousands(*days)),
        PaybackPeriod::Never => "never".to_string(),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.result;

        if let Some(answers) = self.answers {
            let product = answers
                .get(FieldId::ProductName)
                .filter(|p| !p.trim().is_empty());
            if let Some(product) = product {
                writeln!(f, "Idea:            {}", product.trim())?;
            }
            if let Some(kind) = answers.get(FieldId::BusinessType).filter(|k| !k.is_empty()) {
                writeln!(f, "Business type:   {kind}")?;
            }
        }

        writeln!(
            f,
            "{} {}/100  {}",
            result.rating.emoji(),
            result.score,
            result.rating.label()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Margin per unit: {} ({})",
            money_display(result.margin, CURRENCY),
            opt_pct_display(&result.margin_pct)
        )?;
        writeln!(f, "Buyers per day:  {}", group_thousands(result.daily_buyers))?;
        writeln!(f, "Profit per day:  {}", money_display(result.daily_profit, CURRENCY))?;
        writeln!(
            f,
            "Profit/month:    {} {CURRENCY}",
            group_thousands(result.monthly_profit)
        )?;
        writeln!(f, "Payback:         {}", payback_display(&result.payback))?;
        writeln!(f)?;

        let factors = &result.factors;
        writeln!(f, "Score breakdown:")?;
        writeln!(f, "  margin         {}", factors.margin.normalize())?;
        writeln!(f, "  demand         {}", factors.demand.normalize())?;
        writeln!(f, "  profitability  {}", factors.profitability.normalize())?;
        writeln!(f, "  scalability    {}", factors.scalability.normalize())?;
        write!(f, "  stability      {}", factors.stability.normalize())
    }
}

/// One output row of batch scoring.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultRow<'a> {
    row: usize,
    product_name: Option<&'a str>,
    score: u8,
    rating: &'static str,
    margin: Decimal,
    margin_pct: Option<Decimal>,
    daily_buyers: Decimal,
    daily_profit: Decimal,
    monthly_profit: Decimal,
    /// `999` when the investment is never earned back.
    payback_days: Decimal,
}

/// Writes one CSV row per scored answer set, numbered from 1 in input order.
pub fn write_csv<W: Write>(
    writer: W,
    scored: &[(AnswerSet, ScoringResult)],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (idx, (answers, result)) in scored.iter().enumerate() {
        csv_writer.serialize(ResultRow {
            row: idx + 1,
            product_name: answers.get(FieldId::ProductName),
            score: result.score,
            rating: result.rating.as_str(),
            margin: result.margin,
            margin_pct: result.margin_pct,
            daily_buyers: result.daily_buyers,
            daily_profit: result.daily_profit,
            monthly_profit: result.monthly_profit,
            payback_days: result.payback.as_days(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
