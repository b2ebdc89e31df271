//! Business logic use cases
//!
//! The wizard orchestrator is the only stateful entry point; the other use
//! cases are small, single-purpose and injected into it (or used directly by
//! the shell, e.g. to fill the assignment dropdowns).

pub mod assignment;
pub mod draft;
pub mod officer_list;
pub mod phone_check;
pub mod submit_officer;
pub mod wizard;

pub use assignment::{AssignmentOptions, LoadAssignmentOptions};
pub use draft::{ClearDraft, LoadDraft, SaveDraft};
pub use officer_list::{OfficerListSnapshot, OfficerListStore};
pub use phone_check::{Debouncer, PhoneCheckStatus, PhoneUniquenessChecker};
pub use submit_officer::SubmitOfficer;
