//! Mapping from the nested form into the officer creation payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::OfficerId;
use crate::officer::{Address, FormState};
use crate::submission::error::SubmissionFailure;
use crate::submission::phone::normalize_phone;

/// `userType` sent with every creation request and expected back.
pub const EXPECTED_USER_TYPE: &str = "GUARD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetailsPayload {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<&'static str>,
    pub height: u16,
    pub weight: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_mark: Option<String>,
    pub marital_status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub phone_number: String,
    pub contact_type: &'static str,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub address_type: &'static str,
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub city: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberPayload {
    pub relationship: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub relationship: &'static str,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentPayload {
    pub agency_id: String,
    pub date_of_joining: NaiveDate,
    pub designation: &'static str,
    pub assigned_duty_area_id: String,
    pub area_manager_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_by_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_by_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVerificationPayload {
    pub document_type: &'static str,
    pub is_verified: bool,
}

/// Flat, backend-shaped officer creation request (without the photo bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOfficerRequest {
    pub personal_details: PersonalDetailsPayload,
    pub contacts: Vec<ContactPayload>,
    pub addresses: Vec<AddressPayload>,
    pub family_members: Vec<FamilyMemberPayload>,
    pub emergency_contacts: Vec<EmergencyContactPayload>,
    pub employment_details: EmploymentPayload,
    pub document_verifications: Vec<DocumentVerificationPayload>,
    pub user_type: &'static str,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn require<T>(value: Option<T>, what: &str) -> Result<T, SubmissionFailure> {
    value.ok_or_else(|| SubmissionFailure::InvalidForm(format!("{what} is missing")))
}

fn phone(raw: &str, country_code: &str, what: &str) -> Result<String, SubmissionFailure> {
    normalize_phone(raw, country_code)
        .ok_or_else(|| SubmissionFailure::InvalidForm(format!("{what} is not a valid phone number")))
}

fn measure(raw: &str, what: &str) -> Result<u16, SubmissionFailure> {
    raw.trim()
        .parse()
        .map_err(|_| SubmissionFailure::InvalidForm(format!("{what} is not a number")))
}

fn address(address_type: &'static str, address: &Address) -> AddressPayload {
    AddressPayload {
        address_type,
        line1: address.line1.trim().to_string(),
        line2: non_blank(&address.line2),
        landmark: non_blank(&address.landmark),
        city: address.city.trim().to_string(),
        district: address.district.trim().to_string(),
        state: address.state.trim().to_string(),
        pincode: address.pincode.trim().to_string(),
    }
}

impl CreateOfficerRequest {
    /// Builds the request from a form that already passed validation.
    ///
    /// Values the validators guarantee are still checked here, so a form that
    /// skipped validation yields `SubmissionFailure::InvalidForm` rather than a
    /// malformed request.
    pub fn from_form(form: &FormState, country_code: &str) -> Result<Self, SubmissionFailure> {
        let personal = &form.personal_details;
        let contact = &form.contact_details;
        let employment = &form.employment_details;

        let personal_details = PersonalDetailsPayload {
            first_name: personal.first_name.trim().to_string(),
            middle_name: non_blank(&personal.middle_name),
            last_name: personal.last_name.trim().to_string(),
            email: personal.email.trim().to_string(),
            date_of_birth: require(personal.date_of_birth, "date of birth")?,
            gender: require(personal.gender, "gender")?.backend_token(),
            blood_group: personal.blood_group.map(|g| g.backend_token()),
            height: measure(&personal.height_cm, "height")?,
            weight: measure(&personal.weight_kg, "weight")?,
            identification_mark: non_blank(&personal.identification_mark),
            marital_status: require(personal.marital_status, "marital status")?.backend_token(),
        };

        let mut contacts = vec![ContactPayload {
            phone_number: phone(&contact.primary_phone, country_code, "primary phone")?,
            contact_type: "PRIMARY",
            is_primary: true,
        }];
        if non_blank(&contact.alternate_phone).is_some() {
            contacts.push(ContactPayload {
                phone_number: phone(&contact.alternate_phone, country_code, "alternate phone")?,
                contact_type: "ALTERNATE",
                is_primary: false,
            });
        }

        let addresses = vec![
            address("LOCAL", form.address.local()),
            address("PERMANENT", form.address.permanent()),
        ];

        let mut family_members = vec![
            FamilyMemberPayload {
                relationship: "FATHER",
                name: personal.father_name.trim().to_string(),
                date_of_birth: None,
            },
            FamilyMemberPayload {
                relationship: "MOTHER",
                name: personal.mother_name.trim().to_string(),
                date_of_birth: None,
            },
        ];
        if personal.is_married() {
            family_members.push(FamilyMemberPayload {
                relationship: "SPOUSE",
                name: personal.spouse_name.trim().to_string(),
                date_of_birth: personal.spouse_date_of_birth,
            });
        }

        let emergency = &contact.emergency_contact;
        let emergency_contacts = vec![EmergencyContactPayload {
            first_name: emergency.first_name.trim().to_string(),
            last_name: emergency.last_name.trim().to_string(),
            relationship: require(emergency.relationship, "emergency contact relationship")?
                .backend_token(),
            phone_number: phone(&emergency.phone, country_code, "emergency contact phone")?,
        }];

        let referred_by_name = non_blank(&employment.referred_by_name);
        let referred_by_phone = match referred_by_name {
            Some(_) => Some(phone(
                &employment.referred_by_phone,
                country_code,
                "referrer phone",
            )?),
            None => None,
        };
        let employment_details = EmploymentPayload {
            agency_id: require(employment.agency_id.as_ref(), "agency")?
                .as_str()
                .to_string(),
            date_of_joining: require(employment.date_of_joining, "date of joining")?,
            designation: require(employment.designation, "designation")?.backend_token(),
            assigned_duty_area_id: require(employment.assigned_duty_area.as_ref(), "duty area")?
                .id
                .as_str()
                .to_string(),
            area_manager_id: require(employment.area_manager.as_ref(), "area manager")?
                .id
                .as_str()
                .to_string(),
            referred_by_name,
            referred_by_phone,
        };

        let document_verifications = form
            .document_verification
            .selected()
            .map(|document_type| DocumentVerificationPayload {
                document_type: document_type.backend_token(),
                is_verified: true,
            })
            .collect();

        Ok(Self {
            personal_details,
            contacts,
            addresses,
            family_members,
            emergency_contacts,
            employment_details,
            document_verifications,
            user_type: EXPECTED_USER_TYPE,
        })
    }

    /// Text parts of the multipart body: each sub-object JSON-stringified,
    /// plus the scalar `userType`. The photo part is added by the transport.
    pub fn to_multipart_fields(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        Ok(vec![
            ("personalDetails", serde_json::to_string(&self.personal_details)?),
            ("contacts", serde_json::to_string(&self.contacts)?),
            ("addresses", serde_json::to_string(&self.addresses)?),
            ("familyMembers", serde_json::to_string(&self.family_members)?),
            ("emergencyContacts", serde_json::to_string(&self.emergency_contacts)?),
            ("employmentDetails", serde_json::to_string(&self.employment_details)?),
            (
                "documentVerifications",
                serde_json::to_string(&self.document_verifications)?,
            ),
            ("userType", self.user_type.to_string()),
        ])
    }
}

/// Body returned by a successful creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficerResponse {
    pub id: OfficerId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

impl CreateOfficerResponse {
    pub fn has_expected_user_type(&self) -> bool {
        self.user_type.as_deref() == Some(EXPECTED_USER_TYPE)
    }
}
