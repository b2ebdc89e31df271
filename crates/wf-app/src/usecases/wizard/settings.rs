use std::time::Duration;

use wf_core::officer::DocumentPolicy;

pub const DEFAULT_PHONE_CHECK_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Resolved wizard behaviour (configuration with defaults applied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub phone_check_debounce: Duration,
    /// Prefix used when normalising phone numbers for submission.
    pub country_code: String,
    /// Abort in-flight work on close instead of ignoring its result.
    pub cancel_inflight_on_close: bool,
    /// Write a draft on every successful "Next".
    pub autosave_on_advance: bool,
    pub documents: DocumentPolicy,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            phone_check_debounce: DEFAULT_PHONE_CHECK_DEBOUNCE,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            cancel_inflight_on_close: true,
            autosave_on_advance: true,
            documents: DocumentPolicy::default(),
        }
    }
}
