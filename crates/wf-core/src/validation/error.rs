use serde::{Deserialize, Serialize};

use crate::officer::DocumentType;
use crate::validation::field::Field;
use crate::wizard::WizardStep;

/// Why a single field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    Required,
    LettersOnly,
    InvalidEmail,
    NotDigits,
    WrongLength { expected: usize },
    InvalidLeadingDigit,
    TooManyDigits { max: usize },
    NotInPast,
    Underage { min_age: u32 },
    BeforeDateOfBirth,
    SameAsPrimary,
    MissingMandatoryDocuments { missing: Vec<DocumentType> },
    PhoneTaken { owner_name: Option<String> },
    PhoneCheckPending,
    ManagerNotInArea,
}

impl ValidationErrorKind {
    pub fn describe(&self, field: &Field) -> String {
        let label = field.label();
        match self {
            ValidationErrorKind::Required => format!("{label} is required"),
            ValidationErrorKind::LettersOnly => {
                format!("{label} must contain only letters and spaces")
            }
            ValidationErrorKind::InvalidEmail => format!("{label} is not a valid email address"),
            ValidationErrorKind::NotDigits => format!("{label} must contain only digits"),
            ValidationErrorKind::WrongLength { expected } => {
                format!("{label} must be exactly {expected} digits")
            }
            ValidationErrorKind::InvalidLeadingDigit => {
                format!("{label} must start with 6,7,8,9")
            }
            ValidationErrorKind::TooManyDigits { max } => {
                format!("{label} must be at most {max} digits")
            }
            ValidationErrorKind::NotInPast => format!("{label} must be in the past"),
            ValidationErrorKind::Underage { min_age } => {
                format!("Officer must be at least {min_age} years old")
            }
            ValidationErrorKind::BeforeDateOfBirth => {
                format!("{label} cannot be before the date of birth")
            }
            ValidationErrorKind::SameAsPrimary => {
                format!("{label} must differ from the primary phone number")
            }
            ValidationErrorKind::MissingMandatoryDocuments { missing } => {
                let names: Vec<&str> = missing.iter().map(|d| d.label()).collect();
                format!("Mandatory documents not selected: {}", names.join(", "))
            }
            ValidationErrorKind::PhoneTaken { owner_name } => match owner_name {
                Some(name) => format!("{label} is already registered to {name}"),
                None => format!("{label} is already registered"),
            },
            ValidationErrorKind::PhoneCheckPending => {
                format!("{label} is still being verified")
            }
            ValidationErrorKind::ManagerNotInArea => {
                format!("{label} does not manage the selected duty area")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, kind: ValidationErrorKind) -> Self {
        let message = kind.describe(&field);
        Self {
            field,
            kind,
            message,
        }
    }
}

/// Outcome of validating a set of fields; empty means the set passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.error_for(field).is_some()
    }
}

impl FromIterator<FieldError> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// First step that failed whole-form validation, with its errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub step: WizardStep,
    pub report: ValidationReport,
}
