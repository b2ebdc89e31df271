//! Draft use cases: save, load and clear the single onboarding draft.

use std::sync::Arc;

use tracing::{debug, info, warn};

use wf_core::draft::{DraftSnapshot, DraftVersionPolicy};
use wf_core::officer::FormState;
use wf_core::ports::{ClockPort, DraftStoreError, DraftStorePort};
use wf_core::wizard::WizardStep;

/// Use case for persisting the in-progress form.
pub struct SaveDraft {
    store: Arc<dyn DraftStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveDraft {
    pub fn new(store: Arc<dyn DraftStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    pub async fn execute(
        &self,
        form: &FormState,
        step: WizardStep,
    ) -> Result<DraftSnapshot, DraftStoreError> {
        let snapshot = DraftSnapshot::new(form.clone(), step, self.clock.now());
        let raw = snapshot
            .to_json()
            .map_err(|e| DraftStoreError::Storage(format!("serialize draft: {e}")))?;
        self.store.save(&raw).await?;
        debug!(step = step.number(), "draft saved");
        Ok(snapshot)
    }
}

/// Use case for reading the draft at wizard mount.
///
/// A slot that does not parse, or that the version policy rejects, is
/// cleared and reported as absent.
pub struct LoadDraft {
    store: Arc<dyn DraftStorePort>,
    version_policy: DraftVersionPolicy,
}

impl LoadDraft {
    pub fn new(store: Arc<dyn DraftStorePort>, version_policy: DraftVersionPolicy) -> Self {
        Self {
            store,
            version_policy,
        }
    }

    pub async fn execute(&self) -> Result<Option<DraftSnapshot>, DraftStoreError> {
        let Some(raw) = self.store.load().await? else {
            return Ok(None);
        };

        let snapshot = match DraftSnapshot::from_json(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "stored draft is corrupt, discarding");
                self.discard().await;
                return Ok(None);
            }
        };

        if !self.version_policy.accepts(&snapshot) {
            info!(
                version = %snapshot.metadata.version,
                "stored draft has another schema version, discarding"
            );
            self.discard().await;
            return Ok(None);
        }

        Ok(Some(snapshot))
    }

    async fn discard(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear rejected draft");
        }
    }
}

/// Use case for removing the draft.
pub struct ClearDraft {
    store: Arc<dyn DraftStorePort>,
}

impl ClearDraft {
    pub fn new(store: Arc<dyn DraftStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<(), DraftStoreError> {
        self.store.clear().await
    }
}
