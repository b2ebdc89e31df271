//! Workforce console application orchestration layer
//!
//! This crate contains the onboarding use cases and the wizard orchestrator.
//! It talks to the outside world only through `wf_core::ports`.

pub mod usecases;

pub use usecases::wizard::{WizardError, WizardOrchestrator, WizardSettings};
