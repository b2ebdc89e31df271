use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::directory::{Area, AreaManager, AreaRef, ManagerRef};
use crate::ids::AgencyId;
use crate::officer::address::AddressDetails;
use crate::officer::documents::DocumentVerification;
use crate::officer::enums::{BloodGroup, Designation, Gender, MaritalStatus, Relationship};
use crate::officer::FormError;
use crate::wizard::WizardStep;

/// Reference to the profile photo on local disk. The bytes are read only when
/// the creation request is packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: String,
}

impl PhotoRef {
    pub fn new(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());
        Self {
            path,
            file_name,
            content_type: content_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    /// Raw input, validated as at most three digits.
    pub height_cm: String,
    /// Raw input, validated as at most three digits.
    pub weight_kg: String,
    pub identification_mark: String,
    pub father_name: String,
    pub mother_name: String,
    pub marital_status: Option<MaritalStatus>,
    pub spouse_name: String,
    pub spouse_date_of_birth: Option<NaiveDate>,
    pub profile_photo: Option<PhotoRef>,
}

impl PersonalDetails {
    pub fn is_married(&self) -> bool {
        self.marital_status == Some(MaritalStatus::Married)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyContact {
    pub first_name: String,
    pub last_name: String,
    pub relationship: Option<Relationship>,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDetails {
    pub primary_phone: String,
    pub alternate_phone: String,
    pub emergency_contact: EmergencyContact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentDetails {
    pub agency_id: Option<AgencyId>,
    pub date_of_joining: Option<NaiveDate>,
    pub designation: Option<Designation>,
    pub assigned_duty_area: Option<AreaRef>,
    pub area_manager: Option<ManagerRef>,
    pub referred_by_name: String,
    pub referred_by_phone: String,
}

impl EmploymentDetails {
    /// Selects a duty area. A manager that does not belong to the new area is
    /// cleared; returns whether that happened.
    pub fn select_area(&mut self, area: &Area) -> bool {
        self.assigned_duty_area = Some(AreaRef::from(area));
        let foreign = self
            .area_manager
            .as_ref()
            .is_some_and(|m| !m.belongs_to(&area.id));
        if foreign {
            self.area_manager = None;
        }
        foreign
    }

    /// Selects an area manager. Once an area is chosen, only managers of that
    /// area are accepted.
    pub fn select_manager(&mut self, manager: &AreaManager) -> Result<(), FormError> {
        if let Some(area) = &self.assigned_duty_area {
            if !manager.belongs_to(&area.id) {
                return Err(FormError::ManagerNotInArea {
                    manager: manager.id.to_string(),
                    area: area.id.to_string(),
                });
            }
        }
        self.area_manager = Some(ManagerRef::from(manager));
        Ok(())
    }

    pub fn clear_area(&mut self) {
        self.assigned_duty_area = None;
        self.area_manager = None;
    }
}

/// The whole in-progress onboarding input, one slice per wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub personal_details: PersonalDetails,
    pub contact_details: ContactDetails,
    pub address: AddressDetails,
    pub employment_details: EmploymentDetails,
    pub document_verification: DocumentVerification,
}

impl FormState {
    pub fn is_step_populated(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Personal => self.personal_details != PersonalDetails::default(),
            WizardStep::Contact => self.contact_details != ContactDetails::default(),
            WizardStep::Address => self.address.is_populated(),
            WizardStep::Employment => self.employment_details != EmploymentDetails::default(),
            WizardStep::Documents => self.document_verification.is_populated(),
        }
    }

    /// Highest step holding any input; `Personal` for an empty form.
    pub fn highest_populated_step(&self) -> WizardStep {
        WizardStep::ALL
            .iter()
            .rev()
            .copied()
            .find(|step| self.is_step_populated(*step))
            .unwrap_or(WizardStep::Personal)
    }

    /// Restores derived values after the state was deserialised.
    pub fn normalize(&mut self) {
        self.address.normalize();
    }
}
