//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read the TOML configuration file
//! - Parse TOML into the `ConsoleConfig` DTO
//! - Report I/O and parsing errors with context
//!
//! Defaults and validation belong to wiring; this module accepts whatever the
//! file says.

use std::path::Path;

use anyhow::Context;
use wf_core::config::ConsoleConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A value cannot be represented (unknown document type or version policy)
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<ConsoleConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ConsoleConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use wf_core::draft::DraftVersionPolicy;
    use wf_core::officer::DocumentType;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [api]
            base_url = "https://api.example.com/v1"
            timeout_secs = 20
            agency_id = "AG-001"
            auth_token = "token"

            [drafts]
            dir = "/var/lib/console"
            version_policy = "discard_mismatched"

            [wizard]
            phone_check_debounce_ms = 250
            country_code = "+91"

            [documents]
            mandatory = ["AADHAAR_CARD"]
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.api.timeout_secs, Some(20));
        assert_eq!(config.drafts.dir, PathBuf::from("/var/lib/console"));
        assert_eq!(
            config.drafts.version_policy,
            Some(DraftVersionPolicy::DiscardMismatched)
        );
        assert_eq!(config.wizard.phone_check_debounce_ms, Some(250));
        assert_eq!(
            config.documents.mandatory,
            Some(vec![DocumentType::AadhaarCard])
        );
        assert_eq!(config.cache.officer_list_ttl_secs, None);
    }

    #[test]
    fn test_load_config_keeps_missing_values_empty() {
        let temp_file = write_config("[api]\n");

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api.base_url, "");
        assert_eq!(config.drafts.dir, PathBuf::new());
        assert_eq!(config.wizard.autosave_on_advance, None);
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let temp_file = write_config("[api\nbase_url = ");

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_unknown_document_type() {
        let temp_file = write_config("[documents]\nmandatory = [\"LIBRARY_CARD\"]\n");

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(format!("{err:#}").contains("LIBRARY_CARD"));
    }

    #[test]
    fn test_load_config_returns_error_when_file_missing() {
        let err = load_config("/nonexistent/console.toml").unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}
