//! Wizard domain module.
//!
//! This module defines the onboarding wizard steps and state machine types.

pub mod state_machine;
pub mod step;

pub use state_machine::{WizardAction, WizardEvent, WizardMachine, WizardPolicy, WizardState};
pub use step::WizardStep;
