//! Draft snapshot model.
//!
//! A draft is the whole [`FormState`] with a `_draftMetadata` object merged
//! into the same JSON document. Only one draft exists at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::officer::FormState;
use crate::wizard::WizardStep;

/// Schema version written into every new draft.
pub const DRAFT_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftMetadata {
    pub saved_at: DateTime<Utc>,
    /// 1-based step the operator was on when the draft was written.
    pub current_step: u8,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    #[serde(flatten)]
    pub form: FormState,
    #[serde(rename = "_draftMetadata")]
    pub metadata: DraftMetadata,
}

impl DraftSnapshot {
    pub fn new(form: FormState, step: WizardStep, saved_at: DateTime<Utc>) -> Self {
        Self {
            form,
            metadata: DraftMetadata {
                saved_at,
                current_step: step.number(),
                version: DRAFT_SCHEMA_VERSION.to_string(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut snapshot: DraftSnapshot = serde_json::from_str(raw)?;
        snapshot.form.normalize();
        Ok(snapshot)
    }

    /// Step to resume at: the highest step that holds any input, which may be
    /// ahead of the stored `currentStep`.
    pub fn resume_step(&self) -> WizardStep {
        self.form.highest_populated_step()
    }

    pub fn is_current_version(&self) -> bool {
        self.metadata.version == DRAFT_SCHEMA_VERSION
    }
}

/// What to do with a draft written under another schema version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftVersionPolicy {
    /// Load whatever parses; missing fields take their defaults.
    #[default]
    KeepAny,
    /// Clear the draft and start empty.
    DiscardMismatched,
}

impl DraftVersionPolicy {
    pub fn accepts(self, snapshot: &DraftSnapshot) -> bool {
        match self {
            DraftVersionPolicy::KeepAny => true,
            DraftVersionPolicy::DiscardMismatched => snapshot.is_current_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn snapshot_flattens_form_and_metadata() {
        let mut form = FormState::default();
        form.personal_details.first_name = "Asha".into();
        let snapshot = DraftSnapshot::new(form, WizardStep::Personal, saved_at());

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["personalDetails"]["firstName"], "Asha");
        assert_eq!(value["_draftMetadata"]["currentStep"], 1);
        assert_eq!(value["_draftMetadata"]["version"], DRAFT_SCHEMA_VERSION);
    }

    #[test]
    fn resume_step_follows_populated_data() {
        let mut form = FormState::default();
        form.personal_details.first_name = "Asha".into();
        form.address.update_local(|a| a.city = "Pune".into());
        let snapshot = DraftSnapshot::new(form, WizardStep::Personal, saved_at());

        assert_eq!(snapshot.resume_step(), WizardStep::Address);
    }

    #[test]
    fn old_draft_with_missing_fields_loads_with_defaults() {
        let raw = r#"{
            "personalDetails": {"firstName": "Asha"},
            "_draftMetadata": {"savedAt": "2024-01-01T00:00:00Z", "currentStep": 1, "version": "0.9"}
        }"#;
        let snapshot = DraftSnapshot::from_json(raw).unwrap();

        assert_eq!(snapshot.form.personal_details.first_name, "Asha");
        assert_eq!(snapshot.form.document_verification.records().len(), 8);
        assert!(DraftVersionPolicy::KeepAny.accepts(&snapshot));
        assert!(!DraftVersionPolicy::DiscardMismatched.accepts(&snapshot));
    }

    #[test]
    fn snapshot_without_metadata_is_rejected() {
        assert!(DraftSnapshot::from_json(r#"{"personalDetails": {}}"#).is_err());
    }
}
