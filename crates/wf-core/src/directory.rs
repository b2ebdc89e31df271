//! Organisational assignment references: duty areas and their managers.
//!
//! The form keeps both a display name and the backend id for each reference
//! so the dropdowns can show names while the request carries ids.

use serde::{Deserialize, Serialize};

use crate::ids::{AreaId, ManagerId};

/// Duty area as listed by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
}

/// Area manager as listed by the directory endpoint.
///
/// `area_id` is absent for managers the backend has not yet assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaManager {
    pub id: ManagerId,
    pub name: String,
    #[serde(default)]
    pub area_id: Option<AreaId>,
}

impl AreaManager {
    pub fn belongs_to(&self, area: &AreaId) -> bool {
        self.area_id.as_ref() == Some(area)
    }
}

/// Selected duty area, as stored in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRef {
    pub id: AreaId,
    pub name: String,
}

impl From<&Area> for AreaRef {
    fn from(area: &Area) -> Self {
        Self {
            id: area.id.clone(),
            name: area.name.clone(),
        }
    }
}

/// Selected area manager, as stored in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerRef {
    pub id: ManagerId,
    pub name: String,
    #[serde(default)]
    pub area_id: Option<AreaId>,
}

impl ManagerRef {
    pub fn belongs_to(&self, area: &AreaId) -> bool {
        self.area_id.as_ref() == Some(area)
    }
}

impl From<&AreaManager> for ManagerRef {
    fn from(manager: &AreaManager) -> Self {
        Self {
            id: manager.id.clone(),
            name: manager.name.clone(),
            area_id: manager.area_id.clone(),
        }
    }
}
