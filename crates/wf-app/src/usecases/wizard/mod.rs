//! Onboarding wizard use case.
//!
//! This module exposes the wizard orchestrator and its settings.

mod context;
pub mod orchestrator;
pub mod settings;

pub use orchestrator::{WizardError, WizardOrchestrator};
pub use settings::{WizardSettings, DEFAULT_COUNTRY_CODE, DEFAULT_PHONE_CHECK_DEBOUNCE};
