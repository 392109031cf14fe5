mod answer_set;
mod field_id;
mod rating;
mod scoring_config;
mod scoring_result;
mod venture_inputs;
mod wizard_step;

pub use answer_set::AnswerSet;
pub use field_id::FieldId;
pub use rating::Rating;
pub use scoring_config::{
    DemandFactor, MarginFactor, ProfitabilityFactor, ScalabilityFactor, ScoringConfig,
    ScoringConfigError, StabilityFactor,
};
pub use scoring_result::{PaybackPeriod, ScoreFactors, ScoringResult};
pub use venture_inputs::VentureInputs;
pub use wizard_step::{DATA_STEPS, WizardStep};
