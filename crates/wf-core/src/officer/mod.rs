//! Officer onboarding form model.
//!
//! One [`FormState`] tree holds everything the wizard collects. Slices map
//! one-to-one onto wizard steps.

pub mod address;
pub mod documents;
pub mod enums;
pub mod form;

use serde::{Deserialize, Serialize};

pub use address::{Address, AddressDetails};
pub use documents::{DocumentPolicy, DocumentRecord, DocumentVerification};
pub use enums::{BloodGroup, Designation, DocumentType, Gender, MaritalStatus, Relationship};
pub use form::{
    ContactDetails, EmergencyContact, EmploymentDetails, FormState, PersonalDetails, PhotoRef,
};

use crate::ids::OfficerId;

/// Errors raised by direct form mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("field is read-only: {0}")]
    ReadOnlyField(&'static str),
    #[error("manager {manager} does not belong to area {area}")]
    ManagerNotInArea { manager: String, area: String },
}

/// Row of the officer listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerSummary {
    pub id: OfficerId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub area_name: Option<String>,
}
