use serde::{Deserialize, Serialize};

/// Sub-field of an address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    Line1,
    Line2,
    Landmark,
    City,
    District,
    State,
    Pincode,
}

impl AddressField {
    fn key(self) -> &'static str {
        match self {
            AddressField::Line1 => "line1",
            AddressField::Line2 => "line2",
            AddressField::Landmark => "landmark",
            AddressField::City => "city",
            AddressField::District => "district",
            AddressField::State => "state",
            AddressField::Pincode => "pincode",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AddressField::Line1 => "Address line 1",
            AddressField::Line2 => "Address line 2",
            AddressField::Landmark => "Landmark",
            AddressField::City => "City",
            AddressField::District => "District",
            AddressField::State => "State",
            AddressField::Pincode => "Pincode",
        }
    }
}

/// Every input the wizard validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    Email,
    DateOfBirth,
    Gender,
    BloodGroup,
    Height,
    Weight,
    IdentificationMark,
    FatherName,
    MotherName,
    MaritalStatus,
    SpouseName,
    SpouseDateOfBirth,
    ProfilePhoto,
    PrimaryPhone,
    AlternatePhone,
    EmergencyFirstName,
    EmergencyLastName,
    EmergencyRelationship,
    EmergencyPhone,
    LocalAddress(AddressField),
    PermanentAddress(AddressField),
    Agency,
    DateOfJoining,
    Designation,
    AssignedDutyArea,
    AreaManager,
    ReferredByName,
    ReferredByPhone,
    Documents,
}

impl Field {
    /// Dotted path into the serialised form, e.g. `personalDetails.firstName`.
    pub fn path(&self) -> String {
        match self {
            Field::LocalAddress(f) => format!("address.local.{}", f.key()),
            Field::PermanentAddress(f) => format!("address.permanent.{}", f.key()),
            other => other.static_path().to_string(),
        }
    }

    /// Human-readable field name used in messages.
    pub fn label(&self) -> String {
        match self {
            Field::LocalAddress(f) => format!("Local {}", f.label().to_lowercase()),
            Field::PermanentAddress(f) => format!("Permanent {}", f.label().to_lowercase()),
            other => other.static_label().to_string(),
        }
    }

    fn static_path(&self) -> &'static str {
        match self {
            Field::FirstName => "personalDetails.firstName",
            Field::MiddleName => "personalDetails.middleName",
            Field::LastName => "personalDetails.lastName",
            Field::Email => "personalDetails.email",
            Field::DateOfBirth => "personalDetails.dateOfBirth",
            Field::Gender => "personalDetails.gender",
            Field::BloodGroup => "personalDetails.bloodGroup",
            Field::Height => "personalDetails.heightCm",
            Field::Weight => "personalDetails.weightKg",
            Field::IdentificationMark => "personalDetails.identificationMark",
            Field::FatherName => "personalDetails.fatherName",
            Field::MotherName => "personalDetails.motherName",
            Field::MaritalStatus => "personalDetails.maritalStatus",
            Field::SpouseName => "personalDetails.spouseName",
            Field::SpouseDateOfBirth => "personalDetails.spouseDateOfBirth",
            Field::ProfilePhoto => "personalDetails.profilePhoto",
            Field::PrimaryPhone => "contactDetails.primaryPhone",
            Field::AlternatePhone => "contactDetails.alternatePhone",
            Field::EmergencyFirstName => "contactDetails.emergencyContact.firstName",
            Field::EmergencyLastName => "contactDetails.emergencyContact.lastName",
            Field::EmergencyRelationship => "contactDetails.emergencyContact.relationship",
            Field::EmergencyPhone => "contactDetails.emergencyContact.phone",
            Field::Agency => "employmentDetails.agencyId",
            Field::DateOfJoining => "employmentDetails.dateOfJoining",
            Field::Designation => "employmentDetails.designation",
            Field::AssignedDutyArea => "employmentDetails.assignedDutyArea",
            Field::AreaManager => "employmentDetails.areaManager",
            Field::ReferredByName => "employmentDetails.referredByName",
            Field::ReferredByPhone => "employmentDetails.referredByPhone",
            Field::Documents => "documentVerification",
            Field::LocalAddress(_) | Field::PermanentAddress(_) => "address",
        }
    }

    fn static_label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::MiddleName => "Middle name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::DateOfBirth => "Date of birth",
            Field::Gender => "Gender",
            Field::BloodGroup => "Blood group",
            Field::Height => "Height",
            Field::Weight => "Weight",
            Field::IdentificationMark => "Identification mark",
            Field::FatherName => "Father's name",
            Field::MotherName => "Mother's name",
            Field::MaritalStatus => "Marital status",
            Field::SpouseName => "Spouse name",
            Field::SpouseDateOfBirth => "Spouse date of birth",
            Field::ProfilePhoto => "Profile photo",
            Field::PrimaryPhone => "Phone number",
            Field::AlternatePhone => "Alternate number",
            Field::EmergencyFirstName => "Emergency contact first name",
            Field::EmergencyLastName => "Emergency contact last name",
            Field::EmergencyRelationship => "Emergency contact relationship",
            Field::EmergencyPhone => "Emergency contact number",
            Field::Agency => "Company",
            Field::DateOfJoining => "Date of joining",
            Field::Designation => "Designation",
            Field::AssignedDutyArea => "Assigned duty area",
            Field::AreaManager => "Area manager",
            Field::ReferredByName => "Referred by",
            Field::ReferredByPhone => "Referrer's number",
            Field::Documents => "Documents",
            Field::LocalAddress(_) | Field::PermanentAddress(_) => "Address",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
