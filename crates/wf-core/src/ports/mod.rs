//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding use cases and the
//! infrastructure adapters (draft file, REST API, clock). Use cases depend on
//! these traits only, so every adapter can be replaced in tests.

mod clock;
pub mod directory;
pub mod draft_store;
pub mod errors;
pub mod officer_registration;
pub mod phone_lookup;

pub use clock::ClockPort;
pub use directory::{AssignmentDirectoryPort, OfficerListPort};
pub use draft_store::DraftStorePort;
pub use errors::DraftStoreError;
pub use officer_registration::OfficerRegistrationPort;
pub use phone_lookup::{PhoneLookup, PhoneLookupPort};
