use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a phone-number ownership lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLookup {
    pub exists: bool,
    #[serde(default)]
    pub name: Option<String>,
}

#[async_trait]
pub trait PhoneLookupPort: Send + Sync {
    /// Look up whether `number` (10 national digits) belongs to an officer.
    async fn lookup(&self, number: &str) -> anyhow::Result<PhoneLookup>;
}
