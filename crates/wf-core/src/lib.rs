//! # wf-core
//!
//! Core domain models and business rules for the officer onboarding wizard.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the form model, field validators, the wizard state machine,
//! the draft snapshot format, the creation request mapping and the ports the
//! application layer talks through.

pub mod config;
pub mod directory;
pub mod draft;
pub mod ids;
pub mod officer;
pub mod ports;
pub mod submission;
pub mod validation;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::ConsoleConfig;
pub use directory::{Area, AreaManager, AreaRef, ManagerRef};
pub use draft::{DraftSnapshot, DraftVersionPolicy};
pub use ids::{AgencyId, AreaId, ManagerId, OfficerId};
pub use officer::{FormError, FormState, OfficerSummary};
pub use submission::SubmissionFailure;
pub use validation::{Field, FieldError, ValidationReport};
pub use wizard::{WizardAction, WizardEvent, WizardState, WizardStep};
