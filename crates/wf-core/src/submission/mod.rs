//! Officer creation request model.
//!
//! The wizard collects a nested [`FormState`](crate::officer::FormState); the
//! backend expects flat, tagged collections and backend enum tokens. This
//! module owns that mapping and the failure taxonomy of the creation call.

pub mod error;
pub mod phone;
pub mod request;

pub use error::SubmissionFailure;
pub use phone::normalize_phone;
pub use request::{
    AddressPayload, ContactPayload, CreateOfficerRequest, CreateOfficerResponse,
    DocumentVerificationPayload, EmergencyContactPayload, EmploymentPayload, FamilyMemberPayload,
    PersonalDetailsPayload, EXPECTED_USER_TYPE,
};
