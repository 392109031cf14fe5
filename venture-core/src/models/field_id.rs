use serde::{Deserialize, Serialize};

/// Identifier of one questionnaire answer.
///
/// The wire names (`as_str`) are the keys a form renderer uses when it hands
/// answers to the wizard, and the column headers of batch CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    ProductName,
    BusinessType,
    TargetCustomer,
    ProblemSolved,
    PricePoint,
    CostPrice,
    DailyTraffic,
    ConversionRate,
    MonthlyExpenses,
    InitialInvestment,
}

impl FieldId {
    pub const ALL: [FieldId; 10] = [
        Self::ProductName,
        Self::BusinessType,
        Self::TargetCustomer,
        Self::ProblemSolved,
        Self::PricePoint,
        Self::CostPrice,
        Self::DailyTraffic,
        Self::ConversionRate,
        Self::MonthlyExpenses,
        Self::InitialInvestment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::BusinessType => "businessType",
            Self::TargetCustomer => "targetCustomer",
            Self::ProblemSolved => "problemSolved",
            Self::PricePoint => "pricePoint",
            Self::CostPrice => "costPrice",
            Self::DailyTraffic => "dailyTraffic",
            Self::ConversionRate => "conversionRate",
            Self::MonthlyExpenses => "monthlyExpenses",
            Self::InitialInvestment => "initialInvestment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }

    /// True for the six fields the scoring engine reads.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::PricePoint
                | Self::CostPrice
                | Self::DailyTraffic
                | Self::ConversionRate
                | Self::MonthlyExpenses
                | Self::InitialInvestment
        )
    }
}
