//! Per-step field tables and the evaluation of a step against the form.

use chrono::NaiveDate;

use crate::officer::{Address, DocumentPolicy, FormState};
use crate::validation::error::{FieldError, StepFailure, ValidationErrorKind, ValidationReport};
use crate::validation::field::{AddressField, Field};
use crate::validation::rules;
use crate::wizard::WizardStep;

const PERSONAL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::MiddleName,
    Field::LastName,
    Field::Email,
    Field::DateOfBirth,
    Field::Gender,
    Field::Height,
    Field::Weight,
    Field::FatherName,
    Field::MotherName,
    Field::MaritalStatus,
    Field::ProfilePhoto,
];

const SPOUSE_FIELDS: &[Field] = &[Field::SpouseName, Field::SpouseDateOfBirth];

const CONTACT_FIELDS: &[Field] = &[
    Field::PrimaryPhone,
    Field::AlternatePhone,
    Field::EmergencyFirstName,
    Field::EmergencyLastName,
    Field::EmergencyRelationship,
    Field::EmergencyPhone,
];

const ADDRESS_FIELDS: &[AddressField] = &[
    AddressField::Line1,
    AddressField::City,
    AddressField::District,
    AddressField::State,
    AddressField::Pincode,
];

const EMPLOYMENT_FIELDS: &[Field] = &[
    Field::Agency,
    Field::DateOfJoining,
    Field::Designation,
    Field::AssignedDutyArea,
    Field::AreaManager,
    Field::ReferredByName,
];

/// Values the rules need beyond the form itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub today: NaiveDate,
    pub documents: &'a DocumentPolicy,
}

/// Fields evaluated for `step`, including the ones switched on by sibling
/// values. Conditional fields that are switched off are not evaluated at all.
pub fn step_fields(step: WizardStep, form: &FormState) -> Vec<Field> {
    match step {
        WizardStep::Personal => {
            let mut fields = PERSONAL_FIELDS.to_vec();
            if form.personal_details.is_married() {
                fields.extend_from_slice(SPOUSE_FIELDS);
            }
            fields
        }
        WizardStep::Contact => CONTACT_FIELDS.to_vec(),
        WizardStep::Address => {
            let mut fields: Vec<Field> =
                ADDRESS_FIELDS.iter().map(|f| Field::LocalAddress(*f)).collect();
            if !form.address.same_as_permanent() {
                fields.extend(ADDRESS_FIELDS.iter().map(|f| Field::PermanentAddress(*f)));
            }
            fields
        }
        WizardStep::Employment => {
            let mut fields = EMPLOYMENT_FIELDS.to_vec();
            if !rules::is_blank(&form.employment_details.referred_by_name) {
                fields.push(Field::ReferredByPhone);
            }
            fields
        }
        WizardStep::Documents => vec![Field::Documents],
    }
}

pub fn validate_step(step: WizardStep, form: &FormState, ctx: &ValidationContext<'_>) -> ValidationReport {
    step_fields(step, form)
        .into_iter()
        .filter_map(|field| validate_field(field, form, ctx).map(|kind| FieldError::new(field, kind)))
        .collect()
}

/// Validates every step in order and stops at the first one that fails.
pub fn validate_form(form: &FormState, ctx: &ValidationContext<'_>) -> Result<(), StepFailure> {
    for step in WizardStep::ALL.iter().copied() {
        let report = validate_step(step, form, ctx);
        if !report.is_ok() {
            return Err(StepFailure { step, report });
        }
    }
    Ok(())
}

fn required_then(
    value: &str,
    rule: fn(&str) -> Option<ValidationErrorKind>,
) -> Option<ValidationErrorKind> {
    rules::required(value).or_else(|| rule(value))
}

fn optional(value: &str, rule: fn(&str) -> Option<ValidationErrorKind>) -> Option<ValidationErrorKind> {
    if rules::is_blank(value) {
        None
    } else {
        rule(value)
    }
}

fn present<T>(value: &Option<T>) -> Option<ValidationErrorKind> {
    value.is_none().then_some(ValidationErrorKind::Required)
}

fn address_field(field: AddressField, address: &Address) -> Option<ValidationErrorKind> {
    match field {
        AddressField::Line1 => rules::required(&address.line1),
        AddressField::City => rules::required(&address.city),
        AddressField::District => rules::required(&address.district),
        AddressField::State => rules::required(&address.state),
        AddressField::Pincode => required_then(&address.pincode, rules::pincode),
        AddressField::Line2 | AddressField::Landmark => None,
    }
}

pub fn validate_field(
    field: Field,
    form: &FormState,
    ctx: &ValidationContext<'_>,
) -> Option<ValidationErrorKind> {
    let personal = &form.personal_details;
    let contact = &form.contact_details;
    let employment = &form.employment_details;

    match field {
        Field::FirstName => required_then(&personal.first_name, rules::name),
        Field::MiddleName => optional(&personal.middle_name, rules::name),
        Field::LastName => required_then(&personal.last_name, rules::name),
        Field::Email => required_then(&personal.email, rules::email),
        Field::DateOfBirth => match personal.date_of_birth {
            None => Some(ValidationErrorKind::Required),
            Some(dob) => rules::officer_date_of_birth(dob, ctx.today),
        },
        Field::Gender => present(&personal.gender),
        Field::BloodGroup | Field::IdentificationMark => None,
        Field::Height => required_then(&personal.height_cm, rules::measure),
        Field::Weight => required_then(&personal.weight_kg, rules::measure),
        Field::FatherName => required_then(&personal.father_name, rules::name),
        Field::MotherName => required_then(&personal.mother_name, rules::name),
        Field::MaritalStatus => present(&personal.marital_status),
        Field::SpouseName => required_then(&personal.spouse_name, rules::name),
        Field::SpouseDateOfBirth => match personal.spouse_date_of_birth {
            None => Some(ValidationErrorKind::Required),
            Some(date) => rules::past_date(date, ctx.today),
        },
        Field::ProfilePhoto => present(&personal.profile_photo),
        Field::PrimaryPhone => required_then(&contact.primary_phone, rules::phone),
        Field::AlternatePhone => optional(&contact.alternate_phone, rules::phone).or_else(|| {
            rules::distinct_from_primary(&contact.alternate_phone, &contact.primary_phone)
        }),
        Field::EmergencyFirstName => {
            required_then(&contact.emergency_contact.first_name, rules::name)
        }
        Field::EmergencyLastName => required_then(&contact.emergency_contact.last_name, rules::name),
        Field::EmergencyRelationship => present(&contact.emergency_contact.relationship),
        Field::EmergencyPhone => required_then(&contact.emergency_contact.phone, rules::phone)
            .or_else(|| {
                rules::distinct_from_primary(
                    &contact.emergency_contact.phone,
                    &contact.primary_phone,
                )
            }),
        Field::LocalAddress(f) => address_field(f, form.address.local()),
        Field::PermanentAddress(f) => address_field(f, form.address.permanent()),
        Field::Agency => match &employment.agency_id {
            Some(id) if !id.is_blank() => None,
            _ => Some(ValidationErrorKind::Required),
        },
        Field::DateOfJoining => match (employment.date_of_joining, personal.date_of_birth) {
            (None, _) => Some(ValidationErrorKind::Required),
            (Some(joined), Some(dob)) if joined < dob => {
                Some(ValidationErrorKind::BeforeDateOfBirth)
            }
            _ => None,
        },
        Field::Designation => present(&employment.designation),
        Field::AssignedDutyArea => present(&employment.assigned_duty_area),
        Field::AreaManager => match (&employment.area_manager, &employment.assigned_duty_area) {
            (None, _) => Some(ValidationErrorKind::Required),
            (Some(manager), Some(area)) if !manager.belongs_to(&area.id) => {
                Some(ValidationErrorKind::ManagerNotInArea)
            }
            _ => None,
        },
        Field::ReferredByName => optional(&employment.referred_by_name, rules::name),
        Field::ReferredByPhone => required_then(&employment.referred_by_phone, rules::phone),
        Field::Documents => {
            let missing = ctx.documents.missing(&form.document_verification);
            (!missing.is_empty())
                .then_some(ValidationErrorKind::MissingMandatoryDocuments { missing })
        }
    }
}
