//! Draft store port
//!
//! Single-slot persistence for the in-progress onboarding form. The port
//! stores raw JSON text; parsing and version handling stay in the use case so
//! a corrupt slot can be reported and cleared there.

use async_trait::async_trait;

use crate::ports::errors::DraftStoreError;

#[async_trait]
pub trait DraftStorePort: Send + Sync {
    /// Read the stored draft, if any.
    async fn load(&self) -> Result<Option<String>, DraftStoreError>;

    /// Overwrite the slot.
    async fn save(&self, raw: &str) -> Result<(), DraftStoreError>;

    /// Remove the slot. Clearing an empty slot succeeds.
    async fn clear(&self) -> Result<(), DraftStoreError>;
}
