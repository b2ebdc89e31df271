//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create infra implementations (HTTP client, draft file, clock)
//! - Resolve configuration facts into wizard settings, applying defaults
//! - Hand everything to the runtime as `Arc<dyn Port>`
//!
//! ## Architecture Principle
//!
//! > **This is the only place allowed to depend on wf-infra and wf-app simultaneously.**
//! > The privilege is for assembly, not for decision making.

use std::sync::Arc;
use std::time::Duration;

use wf_app::usecases::wizard::settings::{DEFAULT_COUNTRY_CODE, DEFAULT_PHONE_CHECK_DEBOUNCE};
use wf_app::WizardSettings;
use wf_core::config::ConsoleConfig;
use wf_core::draft::DraftVersionPolicy;
use wf_core::ids::AgencyId;
use wf_core::officer::DocumentPolicy;
use wf_core::ports::{
    AssignmentDirectoryPort, ClockPort, DraftStorePort, OfficerListPort, OfficerRegistrationPort,
    PhoneLookupPort,
};
use wf_infra::{FileDraftRepository, HttpClientConfig, HttpConsoleClient, SystemClock};

pub const DEFAULT_OFFICER_LIST_TTL: Duration = Duration::from_secs(300);

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Every port the console needs, already bound to its implementation.
#[derive(Clone)]
pub struct ConsoleDeps {
    pub registration: Arc<dyn OfficerRegistrationPort>,
    pub phone_lookup: Arc<dyn PhoneLookupPort>,
    pub directory: Arc<dyn AssignmentDirectoryPort>,
    pub officer_list: Arc<dyn OfficerListPort>,
    pub draft_store: Arc<dyn DraftStorePort>,
    pub clock: Arc<dyn ClockPort>,
    pub settings: WizardSettings,
    pub draft_policy: DraftVersionPolicy,
    pub officer_list_ttl: Duration,
    /// Agency the console operates for, when configured.
    pub agency_id: Option<AgencyId>,
}

/// Applies defaults to the wizard tunables.
pub fn resolve_settings(config: &ConsoleConfig) -> WizardSettings {
    let wizard = &config.wizard;
    let defaults = WizardSettings::default();
    WizardSettings {
        phone_check_debounce: wizard
            .phone_check_debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_PHONE_CHECK_DEBOUNCE),
        country_code: wizard
            .country_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COUNTRY_CODE)
            .to_string(),
        cancel_inflight_on_close: wizard
            .cancel_inflight_on_close
            .unwrap_or(defaults.cancel_inflight_on_close),
        autosave_on_advance: wizard
            .autosave_on_advance
            .unwrap_or(defaults.autosave_on_advance),
        documents: config
            .documents
            .mandatory
            .clone()
            .map(DocumentPolicy::new)
            .unwrap_or_default(),
    }
}

fn http_client_config(config: &ConsoleConfig) -> WiringResult<HttpClientConfig> {
    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        return Err(WiringError::InvalidConfig("api.base_url is not set".into()));
    }
    let token = config.api.auth_token.trim();
    Ok(HttpClientConfig {
        base_url: base_url.to_string(),
        timeout: config
            .api
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(HttpClientConfig::DEFAULT_TIMEOUT),
        auth_token: (!token.is_empty()).then(|| token.to_string()),
    })
}

/// Wire all dependencies together.
///
/// # Errors
///
/// - `InvalidConfig` when the API base URL or the draft directory is missing
/// - `HttpClientInit` when the HTTP client cannot be built
pub fn wire_dependencies(config: &ConsoleConfig) -> WiringResult<ConsoleDeps> {
    if config.drafts.dir.as_os_str().is_empty() {
        return Err(WiringError::InvalidConfig("drafts.dir is not set".into()));
    }

    let client = HttpConsoleClient::new(http_client_config(config)?)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    let client = Arc::new(client);
    let draft_store = Arc::new(FileDraftRepository::with_defaults(&config.drafts.dir));

    let agency_id = Some(config.api.agency_id.trim())
        .filter(|id| !id.is_empty())
        .map(AgencyId::from);

    tracing::debug!(
        base_url = client.base_url(),
        draft_file = %draft_store.path().display(),
        agency = ?agency_id,
        "console dependencies wired"
    );

    Ok(ConsoleDeps {
        registration: client.clone(),
        phone_lookup: client.clone(),
        directory: client.clone(),
        officer_list: client,
        draft_store,
        clock: Arc::new(SystemClock),
        settings: resolve_settings(config),
        draft_policy: config.drafts.version_policy.unwrap_or_default(),
        officer_list_ttl: config
            .cache
            .officer_list_ttl_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_OFFICER_LIST_TTL),
        agency_id,
    })
}
