//! Field validation for the onboarding form.
//!
//! Rules are declarative: each wizard step names the fields it owns, and each
//! field maps to one rule over the current [`FormState`](crate::officer::FormState).
//! Asynchronous checks (phone uniqueness) live in the application layer and
//! contribute errors through [`ValidationReport::push`].

pub mod error;
pub mod field;
pub mod rules;
pub mod step;

pub use error::{FieldError, StepFailure, ValidationErrorKind, ValidationReport};
pub use field::{AddressField, Field};
pub use step::{step_fields, validate_field, validate_form, validate_step, ValidationContext};
