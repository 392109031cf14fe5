use serde::{Deserialize, Serialize};

/// Number of data-entry steps between the welcome and results screens.
pub const DATA_STEPS: u8 = 5;

/// A screen of the questionnaire, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Welcome,
    Step1,
    Step2,
    Step3,
    Step4,
    Step5,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        Self::Welcome,
        Self::Step1,
        Self::Step2,
        Self::Step3,
        Self::Step4,
        Self::Step5,
        Self::Results,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Step1 => "step1",
            Self::Step2 => "step2",
            Self::Step3 => "step3",
            Self::Step4 => "step4",
            Self::Step5 => "step5",
            Self::Results => "results",
        }
    }

    /// The following step, or `None` past `Results`.
    pub fn next(&self) -> Option<Self> {
        let idx = self.index();
        Self::ALL.get(idx + 1).copied()
    }

    /// The preceding step, or `None` before `Welcome`.
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|idx| Self::ALL[idx])
    }

    /// 1-based position among the data-entry steps.
    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Step1 => Some(1),
            Self::Step2 => Some(2),
            Self::Step3 => Some(3),
            Self::Step4 => Some(4),
            Self::Step5 => Some(5),
            Self::Welcome | Self::Results => None,
        }
    }

    pub fn is_data_entry(&self) -> bool {
        self.number().is_some()
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
