//! Hand-rolled validation engine.
//!
//! Equivalent intent to the schema engine, expressed as one conditional
//! chain per field. Every field is checked on every pass and the error map
//! is built directly; this function never fails.

use crate::model::{ErrorMap, Field, RegistrationForm};
use crate::rules::{
    age_in_range, has_digit, has_lowercase, has_min_len, has_symbol, has_uppercase,
    is_known_gender, is_present, is_valid_email, is_valid_phone, messages, parse_age,
    AGE_MIN,
};

/// Validates a snapshot field by field, collecting every violation.
pub fn validate(form: &RegistrationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if !is_present(&form.first_name) {
        errors.insert(Field::FirstName, messages::FIRST_NAME_REQUIRED);
    }

    if !is_present(&form.last_name) {
        errors.insert(Field::LastName, messages::LAST_NAME_REQUIRED);
    }

    if !is_present(&form.email) {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, messages::EMAIL_INVALID);
    }

    if !is_present(&form.phone_number) {
        errors.insert(Field::PhoneNumber, messages::PHONE_REQUIRED);
    } else if !is_valid_phone(&form.phone_number) {
        errors.insert(Field::PhoneNumber, messages::PHONE_INVALID);
    }

    if !is_present(&form.password) {
        errors.insert(Field::Password, messages::PASSWORD_REQUIRED);
    } else if !has_min_len(&form.password) {
        errors.insert(Field::Password, messages::PASSWORD_TOO_SHORT);
    } else if !has_symbol(&form.password) {
        errors.insert(Field::Password, messages::PASSWORD_NEEDS_SYMBOL);
    } else if !has_digit(&form.password) {
        errors.insert(Field::Password, messages::PASSWORD_NEEDS_DIGIT);
    } else if !has_uppercase(&form.password) {
        errors.insert(Field::Password, messages::PASSWORD_NEEDS_UPPER);
    } else if !has_lowercase(&form.password) {
        errors.insert(Field::Password, messages::PASSWORD_NEEDS_LOWER);
    }

    if !is_present(&form.confirm_password) {
        errors.insert(Field::ConfirmPassword, messages::CONFIRM_REQUIRED);
    } else if form.confirm_password != form.password {
        errors.insert(Field::ConfirmPassword, messages::CONFIRM_MISMATCH);
    }

    if !is_present(&form.age) {
        errors.insert(Field::Age, messages::AGE_REQUIRED);
    } else {
        match parse_age(&form.age) {
            None => errors.insert(Field::Age, messages::AGE_NOT_A_NUMBER),
            Some(age) if !age_in_range(age) => {
                if age < AGE_MIN {
                    errors.insert(Field::Age, messages::AGE_TOO_YOUNG);
                } else {
                    errors.insert(Field::Age, messages::AGE_TOO_OLD);
                }
            }
            Some(_) => {}
        }
    }

    if !is_known_gender(&form.gender) {
        errors.insert(Field::Gender, messages::GENDER_REQUIRED);
    }

    if form.interests.is_empty() {
        errors.insert(Field::Interests, messages::INTERESTS_EMPTY);
    }

    if !is_present(&form.birth_date) {
        errors.insert(Field::BirthDate, messages::BIRTH_DATE_REQUIRED);
    }

    errors
}
