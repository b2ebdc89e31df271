//! Duty area and area manager options for the employment step.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use wf_core::directory::{Area, AreaManager};
use wf_core::ids::{AgencyId, AreaId, ManagerId};
use wf_core::ports::AssignmentDirectoryPort;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentOptions {
    pub areas: Vec<Area>,
    pub managers: Vec<AreaManager>,
}

impl AssignmentOptions {
    pub fn area(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| &a.id == id)
    }

    pub fn manager(&self, id: &ManagerId) -> Option<&AreaManager> {
        self.managers.iter().find(|m| &m.id == id)
    }

    /// Managers offered once `area` is selected. A manager without a known
    /// area is never offered, matching the clearing rule on area change.
    pub fn managers_for(&self, area: &AreaId) -> Vec<&AreaManager> {
        self.managers.iter().filter(|m| m.belongs_to(area)).collect()
    }
}

/// Use case for fetching the assignment dropdown contents of one agency.
pub struct LoadAssignmentOptions {
    directory: Arc<dyn AssignmentDirectoryPort>,
}

impl LoadAssignmentOptions {
    pub fn new(directory: Arc<dyn AssignmentDirectoryPort>) -> Self {
        Self { directory }
    }

    pub async fn execute(&self, agency: &AgencyId) -> anyhow::Result<AssignmentOptions> {
        let span = info_span!("usecase.load_assignment_options.execute", agency = %agency);
        async {
            let (areas, managers) = tokio::try_join!(
                self.directory.list_areas(agency),
                self.directory.list_area_managers(agency)
            )?;
            debug!(areas = areas.len(), managers = managers.len(), "assignment options loaded");
            Ok(AssignmentOptions { areas, managers })
        }
        .instrument(span)
        .await
    }
}
