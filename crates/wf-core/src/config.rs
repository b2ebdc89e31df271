//! # Console configuration DTO
//!
//! Data only: TOML is mapped field by field. Missing tunables stay `None` and
//! missing strings stay empty; the bootstrap layer decides what a missing
//! value means. Unknown enum spellings are reported as errors because they
//! cannot be represented.

use std::path::PathBuf;

use anyhow::anyhow;

use crate::draft::DraftVersionPolicy;
use crate::officer::DocumentType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub agency_id: String,
    /// Bearer token; empty means unauthenticated requests.
    pub auth_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftsConfig {
    pub dir: PathBuf,
    pub version_policy: Option<DraftVersionPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardConfig {
    pub phone_check_debounce_ms: Option<u64>,
    pub country_code: Option<String>,
    pub cancel_inflight_on_close: Option<bool>,
    pub autosave_on_advance: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentsConfig {
    /// `None` when the key is absent; an explicit empty list is kept as a fact.
    pub mandatory: Option<Vec<DocumentType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheConfig {
    pub officer_list_ttl_secs: Option<u64>,
}

/// Console configuration DTO (pure data, no policy)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub drafts: DraftsConfig,
    pub wizard: WizardConfig,
    pub documents: DocumentsConfig,
    pub cache: CacheConfig,
}

fn get<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}

fn get_str(value: &toml::Value, section: &str, key: &str) -> Option<String> {
    get(value, section, key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn get_u64(value: &toml::Value, section: &str, key: &str) -> Option<u64> {
    get(value, section, key)
        .and_then(|v| v.as_integer())
        .and_then(|v| u64::try_from(v).ok())
}

fn get_bool(value: &toml::Value, section: &str, key: &str) -> Option<bool> {
    get(value, section, key).and_then(|v| v.as_bool())
}

impl ConsoleConfig {
    /// Create ConsoleConfig from a parsed TOML document.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let version_policy = match get_str(toml_value, "drafts", "version_policy").as_deref() {
            None => None,
            Some("keep_any") => Some(DraftVersionPolicy::KeepAny),
            Some("discard_mismatched") => Some(DraftVersionPolicy::DiscardMismatched),
            Some(other) => return Err(anyhow!("unknown drafts.version_policy: {other}")),
        };

        let mandatory = match get(toml_value, "documents", "mandatory") {
            None => None,
            Some(value) => {
                let entries = value
                    .as_array()
                    .ok_or_else(|| anyhow!("documents.mandatory must be an array"))?;
                let mut types = Vec::with_capacity(entries.len());
                for entry in entries {
                    let token = entry
                        .as_str()
                        .ok_or_else(|| anyhow!("documents.mandatory entries must be strings"))?;
                    let document_type = DocumentType::from_token(token)
                        .ok_or_else(|| anyhow!("unknown document type: {token}"))?;
                    types.push(document_type);
                }
                Some(types)
            }
        };

        Ok(Self {
            api: ApiConfig {
                base_url: get_str(toml_value, "api", "base_url").unwrap_or_default(),
                timeout_secs: get_u64(toml_value, "api", "timeout_secs"),
                agency_id: get_str(toml_value, "api", "agency_id").unwrap_or_default(),
                auth_token: get_str(toml_value, "api", "auth_token").unwrap_or_default(),
            },
            drafts: DraftsConfig {
                dir: PathBuf::from(get_str(toml_value, "drafts", "dir").unwrap_or_default()),
                version_policy,
            },
            wizard: WizardConfig {
                phone_check_debounce_ms: get_u64(toml_value, "wizard", "phone_check_debounce_ms"),
                country_code: get_str(toml_value, "wizard", "country_code"),
                cancel_inflight_on_close: get_bool(toml_value, "wizard", "cancel_inflight_on_close"),
                autosave_on_advance: get_bool(toml_value, "wizard", "autosave_on_advance"),
            },
            documents: DocumentsConfig { mandatory },
            cache: CacheConfig {
                officer_list_ttl_secs: get_u64(toml_value, "cache", "officer_list_ttl_secs"),
            },
        })
    }
}
