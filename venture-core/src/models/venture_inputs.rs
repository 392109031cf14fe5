use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AnswerSet, FieldId};
use crate::calculations::common::{parse_number, parse_number_or_default};

/// The six numeric answers, parsed and defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentureInputs {
    pub price: Decimal,
    pub cost: Decimal,
    pub traffic: Decimal,
    /// Percent of visitors who buy, e.g. `2` for 2%.
    pub conversion_pct: Decimal,
    pub monthly_expenses: Decimal,
    pub initial_investment: Decimal,
}

impl VentureInputs {
    /// Reads the numeric answers, substituting `0` for anything unusable and
    /// `default_investment` for an unusable initial investment.
    pub fn from_answers(
        answers: &AnswerSet,
        default_investment: Decimal,
    ) -> Self {
        let read = |field: FieldId, fallback: Decimal| {
            let raw = answers.get(field);
            if let Some(raw) = raw.filter(|r| !r.trim().is_empty() && parse_number(r).is_none()) {
                tracing::warn!(
                    field = field.as_str(),
                    input = %raw,
                    %fallback,
                    "answer is not a number, using default"
                );
            }
            parse_number_or_default(raw, fallback)
        };

        Self {
            price: read(FieldId::PricePoint, Decimal::ZERO),
            cost: read(FieldId::CostPrice, Decimal::ZERO),
            traffic: read(FieldId::DailyTraffic, Decimal::ZERO),
            conversion_pct: read(FieldId::ConversionRate, Decimal::ZERO),
            monthly_expenses: read(FieldId::MonthlyExpenses, Decimal::ZERO),
            initial_investment: read(FieldId::InitialInvestment, default_investment),
        }
    }
}
