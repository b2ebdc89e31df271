//! Single-value field rules.
//!
//! Every rule returns `None` when the value passes. Required-ness is checked
//! separately so optional fields can reuse the same format rules.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::validation::error::ValidationErrorKind;

pub const PHONE_DIGITS: usize = 10;
pub const PINCODE_DIGITS: usize = 6;
pub const MAX_MEASURE_DIGITS: usize = 3;
pub const MIN_OFFICER_AGE: u32 = 18;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z ]*$").unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn required(value: &str) -> Option<ValidationErrorKind> {
    is_blank(value).then_some(ValidationErrorKind::Required)
}

pub fn name(value: &str) -> Option<ValidationErrorKind> {
    (!NAME_REGEX.is_match(value.trim())).then_some(ValidationErrorKind::LettersOnly)
}

pub fn email(value: &str) -> Option<ValidationErrorKind> {
    (!EMAIL_REGEX.is_match(value.trim())).then_some(ValidationErrorKind::InvalidEmail)
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Ten digits starting with 6, 7, 8 or 9. Length is checked before the
/// leading digit, so a 9 or 11 digit input always fails on length.
pub fn phone(value: &str) -> Option<ValidationErrorKind> {
    let value = value.trim();
    if !all_digits(value) {
        return Some(ValidationErrorKind::NotDigits);
    }
    if value.len() != PHONE_DIGITS {
        return Some(ValidationErrorKind::WrongLength {
            expected: PHONE_DIGITS,
        });
    }
    match value.as_bytes()[0] {
        b'6'..=b'9' => None,
        _ => Some(ValidationErrorKind::InvalidLeadingDigit),
    }
}

pub fn is_valid_phone(value: &str) -> bool {
    phone(value).is_none()
}

pub fn pincode(value: &str) -> Option<ValidationErrorKind> {
    let value = value.trim();
    if !all_digits(value) {
        return Some(ValidationErrorKind::NotDigits);
    }
    (value.len() != PINCODE_DIGITS).then_some(ValidationErrorKind::WrongLength {
        expected: PINCODE_DIGITS,
    })
}

/// Height and weight: a whole number of at most three digits.
pub fn measure(value: &str) -> Option<ValidationErrorKind> {
    let value = value.trim();
    if !all_digits(value) {
        return Some(ValidationErrorKind::NotDigits);
    }
    (value.len() > MAX_MEASURE_DIGITS).then_some(ValidationErrorKind::TooManyDigits {
        max: MAX_MEASURE_DIGITS,
    })
}

pub fn past_date(value: NaiveDate, today: NaiveDate) -> Option<ValidationErrorKind> {
    (value >= today).then_some(ValidationErrorKind::NotInPast)
}

pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn officer_date_of_birth(value: NaiveDate, today: NaiveDate) -> Option<ValidationErrorKind> {
    past_date(value, today).or_else(|| {
        (age_in_years(value, today) < MIN_OFFICER_AGE as i32).then_some(
            ValidationErrorKind::Underage {
                min_age: MIN_OFFICER_AGE,
            },
        )
    })
}

pub fn distinct_from_primary(value: &str, primary: &str) -> Option<ValidationErrorKind> {
    (!is_blank(value) && value.trim() == primary.trim())
        .then_some(ValidationErrorKind::SameAsPrimary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn phone_requires_exactly_ten_digits_regardless_of_leading_digit() {
        for input in ["987654321", "98765432101", "512345678", "51234567890"] {
            assert_eq!(
                phone(input),
                Some(ValidationErrorKind::WrongLength { expected: 10 }),
                "input {input}"
            );
        }
    }

    #[test]
    fn phone_rejects_leading_digit_below_six() {
        assert_eq!(
            phone("5123456789"),
            Some(ValidationErrorKind::InvalidLeadingDigit)
        );
        assert_eq!(phone("6123456789"), None);
        assert_eq!(phone("98765 43210"), Some(ValidationErrorKind::NotDigits));
    }

    #[test]
    fn names_allow_letters_and_spaces_only() {
        assert_eq!(name("Ravi Kumar"), None);
        assert_eq!(name("R2D2"), Some(ValidationErrorKind::LettersOnly));
        assert_eq!(name("O'Neil"), Some(ValidationErrorKind::LettersOnly));
    }

    #[test]
    fn pincode_and_measures() {
        assert_eq!(pincode("411001"), None);
        assert_eq!(
            pincode("41100"),
            Some(ValidationErrorKind::WrongLength { expected: 6 })
        );
        assert_eq!(measure("175"), None);
        assert_eq!(
            measure("1750"),
            Some(ValidationErrorKind::TooManyDigits { max: 3 })
        );
        assert_eq!(measure("70kg"), Some(ValidationErrorKind::NotDigits));
    }

    #[test]
    fn officers_must_be_adults() {
        let today = date(2026, 10, 15);
        assert_eq!(officer_date_of_birth(date(2008, 10, 15), today), None);
        assert_eq!(
            officer_date_of_birth(date(2008, 10, 16), today),
            Some(ValidationErrorKind::Underage { min_age: 18 })
        );
        assert_eq!(
            officer_date_of_birth(date(2027, 1, 1), today),
            Some(ValidationErrorKind::NotInPast)
        );
    }

    #[test]
    fn email_shape() {
        assert_eq!(email("guard@agency.in"), None);
        assert_eq!(email("guard@agency"), Some(ValidationErrorKind::InvalidEmail));
    }
}
