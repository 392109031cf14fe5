use serde::{Deserialize, Serialize};

use super::FieldId;

/// Raw answers collected by the questionnaire.
///
/// Every value is kept exactly as the renderer supplied it. Numeric fields
/// are only interpreted at scoring time, see [`VentureInputs`](super::VentureInputs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    // Display-only answers
    pub product_name: Option<String>,
    pub business_type: Option<String>,
    pub target_customer: Option<String>,
    pub problem_solved: Option<String>,

    // Answers read by the scoring engine
    pub price_point: Option<String>,
    pub cost_price: Option<String>,
    pub daily_traffic: Option<String>,
    pub conversion_rate: Option<String>,
    pub monthly_expenses: Option<String>,
    pub initial_investment: Option<String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `field`, replacing any earlier answer.
    pub fn set(
        &mut self,
        field: FieldId,
        value: impl Into<String>,
    ) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Forgets the answer for `field`, returning it.
    pub fn remove(
        &mut self,
        field: FieldId,
    ) -> Option<String> {
        self.slot_mut(field).take()
    }

    pub fn get(
        &self,
        field: FieldId,
    ) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(
        mut self,
        field: FieldId,
        value: impl Into<String>,
    ) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.slot(*field).is_none())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(
        &self,
        field: FieldId,
    ) -> &Option<String> {
        match field {
            FieldId::ProductName => &self.product_name,
            FieldId::BusinessType => &self.business_type,
            FieldId::TargetCustomer => &self.target_customer,
            FieldId::ProblemSolved => &self.problem_solved,
            FieldId::PricePoint => &self.price_point,
            FieldId::CostPrice => &self.cost_price,
            FieldId::DailyTraffic => &self.daily_traffic,
            FieldId::ConversionRate => &self.conversion_rate,
            FieldId::MonthlyExpenses => &self.monthly_expenses,
            FieldId::InitialInvestment => &self.initial_investment,
        }
    }

    fn slot_mut(
        &mut self,
        field: FieldId,
    ) -> &mut Option<String> {
        match field {
            FieldId::ProductName => &mut self.product_name,
            FieldId::BusinessType => &mut self.business_type,
            FieldId::TargetCustomer => &mut self.target_customer,
            FieldId::ProblemSolved => &mut self.problem_solved,
            FieldId::PricePoint => &mut self.price_point,
            FieldId::CostPrice => &mut self.cost_price,
            FieldId::DailyTraffic => &mut self.daily_traffic,
            FieldId::ConversionRate => &mut self.conversion_rate,
            FieldId::MonthlyExpenses => &mut self.monthly_expenses,
            FieldId::InitialInvestment => &mut self.initial_investment,
        }
    }
}
