//! # Console Runtime
//!
//! Owns the wired ports and the application-wide officer-list store, and
//! hands out fresh wizard orchestrators with their use cases pre-wired.
//!
//! ```rust,no_run
//! # async fn demo() -> anyhow::Result<()> {
//! let config = workforce_console::bootstrap::load_config("console.toml")?;
//! let runtime = workforce_console::bootstrap::build_runtime(&config)?;
//! let wizard = runtime.new_wizard();
//! wizard.mount().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use wf_app::usecases::{
    AssignmentOptions, ClearDraft, LoadAssignmentOptions, LoadDraft, OfficerListStore,
    PhoneUniquenessChecker, SaveDraft, SubmitOfficer,
};
use wf_app::{WizardOrchestrator, WizardSettings};
use wf_core::config::ConsoleConfig;
use wf_core::ids::AgencyId;

use crate::bootstrap::wiring::{wire_dependencies, ConsoleDeps, WiringResult};

pub struct ConsoleRuntime {
    deps: ConsoleDeps,
    /// Shared by every wizard and listing view of this process.
    officer_list: Arc<OfficerListStore>,
}

impl ConsoleRuntime {
    pub fn new(deps: ConsoleDeps) -> Self {
        let officer_list = Arc::new(OfficerListStore::new(
            deps.officer_list.clone(),
            deps.officer_list_ttl,
        ));
        Self { deps, officer_list }
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.deps.settings
    }

    pub fn agency_id(&self) -> Option<&AgencyId> {
        self.deps.agency_id.as_ref()
    }

    pub fn officer_list(&self) -> Arc<OfficerListStore> {
        self.officer_list.clone()
    }

    /// A new wizard session. Each call starts from its own state; the draft
    /// slot and officer-list store are shared.
    pub fn new_wizard(&self) -> Arc<WizardOrchestrator> {
        let deps = &self.deps;
        let settings = deps.settings.clone();
        let phone_checker =
            PhoneUniquenessChecker::new(deps.phone_lookup.clone(), settings.phone_check_debounce);
        let submit_officer = SubmitOfficer::new(deps.registration.clone(), settings.country_code.clone());

        Arc::new(WizardOrchestrator::new(
            settings,
            Arc::new(SaveDraft::new(deps.draft_store.clone(), deps.clock.clone())),
            Arc::new(LoadDraft::new(deps.draft_store.clone(), deps.draft_policy)),
            Arc::new(ClearDraft::new(deps.draft_store.clone())),
            Arc::new(submit_officer),
            phone_checker,
            self.officer_list.clone(),
            deps.clock.clone(),
        ))
    }

    pub async fn load_assignment_options(
        &self,
        agency: &AgencyId,
    ) -> anyhow::Result<AssignmentOptions> {
        LoadAssignmentOptions::new(self.deps.directory.clone())
            .execute(agency)
            .await
    }
}

/// Wire dependencies from configuration and build the runtime.
pub fn build_runtime(config: &ConsoleConfig) -> WiringResult<ConsoleRuntime> {
    let deps = wire_dependencies(config)?;
    tracing::info!(
        agency = ?deps.agency_id,
        autosave_on_advance = deps.settings.autosave_on_advance,
        cancel_inflight_on_close = deps.settings.cancel_inflight_on_close,
        "console runtime ready"
    );
    Ok(ConsoleRuntime::new(deps))
}
