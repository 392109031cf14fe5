//! Field descriptors for each questionnaire step.
//!
//! The wizard itself knows nothing about labels or input kinds; this table
//! is what the terminal renderer walks to ask its questions.

use venture_core::{FieldId, WizardStep};

/// One entry of a single-choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, possibly several sentences.
    Text,
    /// A number; parsed leniently at scoring time.
    Number,
    /// Exactly one of the listed options.
    Choice(&'static [ChoiceOption]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Example answer shown as a hint.
    pub placeholder: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepForm {
    pub step: WizardStep,
    pub title: &'static str,
    pub fields: &'static [FieldDescriptor],
}

pub const BUSINESS_TYPES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "street",
        label: "🏪 Street vending",
    },
    ChoiceOption {
        value: "shop",
        label: "🏬 Retail shop",
    },
    ChoiceOption {
        value: "online",
        label: "💻 Online store",
    },
    ChoiceOption {
        value: "service",
        label: "👨‍💼 Services",
    },
];

static STEP_FORMS: [StepForm; 5] = [
    StepForm {
        step: WizardStep::Step1,
        title: "What are you selling?",
        fields: &[
            FieldDescriptor {
                id: FieldId::ProductName,
                label: "Product description",
                kind: FieldKind::Text,
                placeholder: Some("Coffee at a street kiosk"),
            },
            FieldDescriptor {
                id: FieldId::BusinessType,
                label: "Business type",
                kind: FieldKind::Choice(BUSINESS_TYPES),
                placeholder: None,
            },
        ],
    },
    StepForm {
        step: WizardStep::Step2,
        title: "Customer and demand",
        fields: &[
            FieldDescriptor {
                id: FieldId::TargetCustomer,
                label: "Target customer",
                kind: FieldKind::Text,
                placeholder: Some("Working people aged 18-35"),
            },
            FieldDescriptor {
                id: FieldId::ProblemSolved,
                label: "What problem do you solve?",
                kind: FieldKind::Text,
                placeholder: Some("No time to wait, they need coffee fast"),
            },
        ],
    },
    StepForm {
        step: WizardStep::Step3,
        title: "Unit economics",
        fields: &[
            FieldDescriptor {
                id: FieldId::PricePoint,
                label: "Price (EUR)",
                kind: FieldKind::Number,
                placeholder: Some("5"),
            },
            FieldDescriptor {
                id: FieldId::CostPrice,
                label: "Unit cost (EUR)",
                kind: FieldKind::Number,
                placeholder: Some("1.5"),
            },
        ],
    },
    StepForm {
        step: WizardStep::Step4,
        title: "Traffic and conversion",
        fields: &[
            FieldDescriptor {
                id: FieldId::DailyTraffic,
                label: "Potential customers per day",
                kind: FieldKind::Number,
                placeholder: Some("1500"),
            },
            FieldDescriptor {
                id: FieldId::ConversionRate,
                label: "Conversion (%)",
                kind: FieldKind::Number,
                placeholder: Some("2"),
            },
        ],
    },
    StepForm {
        step: WizardStep::Step5,
        title: "Costs and investment",
        fields: &[
            FieldDescriptor {
                id: FieldId::MonthlyExpenses,
                label: "Monthly expenses (EUR)",
                kind: FieldKind::Number,
                placeholder: Some("500"),
            },
            FieldDescriptor {
                id: FieldId::InitialInvestment,
                label: "Initial investment (EUR)",
                kind: FieldKind::Number,
                placeholder: Some("1000"),
            },
        ],
    },
];

/// Form shown on `step`, or `None` for the welcome and results screens.
pub fn form_for(step: WizardStep) -> Option<&'static StepForm> {
    STEP_FORMS.iter().find(|form| form.step == step)
}

impl FieldKind {
    /// Resolves a typed answer to a choice value.
    ///
    /// Accepts the 1-based option number or the option value itself. Other
    /// kinds pass the input through unchanged.
    pub fn resolve_input<'a>(
        &self,
        input: &'a str,
    ) -> Option<&'a str> {
        match self {
            Self::Text | Self::Number => Some(input),
            Self::Choice(options) => {
                if let Ok(n) = input.parse::<usize>() {
                    return n.checked_sub(1).and_then(|idx| options.get(idx)).map(|opt| opt.value);
                }
                options.iter().find(|opt| opt.value == input).map(|opt| opt.value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_data_step_has_a_form() {
        for step in WizardStep::ALL {
            assert_eq!(form_for(step).is_some(), step.is_data_entry(), "{step}");
        }
    }

    #[test]
    fn every_field_appears_exactly_once() {
        let mut seen: Vec<FieldId> = STEP_FORMS
            .iter()
            .flat_map(|form| form.fields.iter().map(|f| f.id))
            .collect();
        seen.sort_by_key(|f| f.as_str());
        seen.dedup();

        assert_eq!(seen.len(), FieldId::ALL.len());
    }

    #[test]
    fn numeric_fields_use_number_inputs() {
        for form in &STEP_FORMS {
            for field in form.fields {
                assert_eq!(
                    field.id.is_numeric(),
                    field.kind == FieldKind::Number,
                    "{}",
                    field.id.as_str()
                );
            }
        }
    }

    #[test]
    fn choice_accepts_number_or_value() {
        let kind = FieldKind::Choice(BUSINESS_TYPES);

        assert_eq!(kind.resolve_input("1"), Some("street"));
        assert_eq!(kind.resolve_input("4"), Some("service"));
        assert_eq!(kind.resolve_input("online"), Some("online"));
    }

    #[test]
    fn choice_rejects_unknown_input() {
        let kind = FieldKind::Choice(BUSINESS_TYPES);

        assert_eq!(kind.resolve_input("0"), None);
        assert_eq!(kind.resolve_input("5"), None);
        assert_eq!(kind.resolve_input("kiosk"), None);
    }

    #[test]
    fn text_passes_input_through() {
        assert_eq!(FieldKind::Text.resolve_input("anything"), Some("anything"));
        assert_eq!(FieldKind::Number.resolve_input("5 EUR"), Some("5 EUR"));
    }
}
