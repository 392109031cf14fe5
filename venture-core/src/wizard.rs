//! Questionnaire state machine.
//!
//! A [`Wizard`] owns one session: the current step, the answers collected so
//! far and, once the last data step is submitted, the scoring result. Data
//! flows between steps in memory only and is discarded on [`Wizard::reset`].

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::VentureScorer;
use crate::models::{AnswerSet, DATA_STEPS, FieldId, ScoringResult, WizardStep};

/// Errors raised by the wizard's string-keyed entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Outcome of [`Wizard::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the given step.
    Moved(WizardStep),
    /// The last data step was submitted; the wizard is now on `Results`.
    Scored(ScoringResult),
    /// Nothing to advance to; the wizard stays on the given step.
    Unchanged(WizardStep),
}

impl Transition {
    /// Step the wizard is on after the transition.
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Moved(step) | Self::Unchanged(step) => *step,
            Self::Scored(_) => WizardStep::Results,
        }
    }
}

/// One questionnaire session.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    answers: AnswerSet,
    result: Option<ScoringResult>,
    scorer: VentureScorer,
}

impl Wizard {
    /// Creates a session on the welcome step with the default scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that scores with `scorer`.
    pub fn with_scorer(scorer: VentureScorer) -> Self {
        Self {
            scorer,
            ..Default::default()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Scoring result of the last completed pass, if the session is on `Results`.
    pub fn result(&self) -> Option<&ScoringResult> {
        self.result.as_ref()
    }

    /// Stores an answer. The last write for a field wins.
    pub fn set_answer(
        &mut self,
        field: FieldId,
        value: impl Into<String>,
    ) {
        self.answers.set(field, value);
    }

    /// Clears an answer so the field reads as unanswered again.
    pub fn clear_answer(
        &mut self,
        field: FieldId,
    ) {
        self.answers.remove(field);
    }

    /// Stores an answer keyed by its wire name (e.g. `"pricePoint"`).
    pub fn set_answer_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        let field =
            FieldId::parse(name).ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        self.set_answer(field, value);
        Ok(())
    }

    /// Moves one step forward.
    ///
    /// Submitting `Step5` scores the collected answers and moves to
    /// `Results`. `Results` only exits through [`reset`](Self::reset).
    pub fn advance(&mut self) -> Transition {
        match self.step {
            WizardStep::Results => Transition::Unchanged(self.step),
            WizardStep::Step5 => {
                let result = self.scorer.score(&self.answers);
                self.result = Some(result.clone());
                self.move_to(WizardStep::Results);
                Transition::Scored(result)
            }
            current => match current.next() {
                Some(next) => {
                    self.move_to(next);
                    Transition::Moved(next)
                }
                None => Transition::Unchanged(current),
            },
        }
    }

    /// Moves one step back. No-op on `Welcome`, `Step1` and `Results`.
    pub fn retreat(&mut self) -> WizardStep {
        if !self.can_retreat() {
            return self.step;
        }
        if let Some(previous) = self.step.previous() {
            self.move_to(previous);
        }
        self.step
    }

    /// Discards answers and result and returns to `Welcome`.
    pub fn reset(&mut self) {
        debug!(from = %self.step, "wizard reset");
        self.answers.clear();
        self.result = None;
        self.step = WizardStep::Welcome;
    }

    pub fn can_advance(&self) -> bool {
        self.step != WizardStep::Results
    }

    /// Back navigation is only offered between data-entry steps.
    pub fn can_retreat(&self) -> bool {
        self.step.is_data_entry() && self.step != WizardStep::Step1
    }

    /// Completion of the data-entry steps as a percentage.
    ///
    /// `0` on the welcome step, `100` on the results step.
    pub fn progress_percent(&self) -> Decimal {
        let completed = match self.step {
            WizardStep::Welcome => 0,
            WizardStep::Results => DATA_STEPS,
            step => step.number().unwrap_or(0),
        };
        Decimal::from(completed) * Decimal::ONE_HUNDRED / Decimal::from(DATA_STEPS)
    }

    fn move_to(
        &mut self,
        step: WizardStep,
    ) {
        debug!(from = %self.step, to = %step, "wizard transition");
        self.step = step;
    }
}
