use async_trait::async_trait;

use crate::directory::{Area, AreaManager};
use crate::ids::AgencyId;
use crate::officer::OfficerSummary;

/// Areas and area managers an officer can be assigned to.
#[async_trait]
pub trait AssignmentDirectoryPort: Send + Sync {
    async fn list_areas(&self, agency: &AgencyId) -> anyhow::Result<Vec<Area>>;

    async fn list_area_managers(&self, agency: &AgencyId) -> anyhow::Result<Vec<AreaManager>>;
}

/// Officer listing shown after onboarding.
#[async_trait]
pub trait OfficerListPort: Send + Sync {
    async fn list_officers(&self, agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>>;
}
