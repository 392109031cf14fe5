pub mod calculations;
pub mod models;
pub mod wizard;

pub use calculations::{VentureScorer, score};
pub use models::*;
pub use wizard::{Transition, Wizard, WizardError};
