//! Declarative schema validation engine.
//!
//! A [`Schema`] is an ordered list of `(field, message, predicate)` rules.
//! Validation evaluates every field (no cross-field short-circuit) and keeps
//! the first failing rule's message per field. Predicates receive the whole
//! form snapshot so cross-field rules, such as the password confirmation
//! match, need no hidden dependency edges.

use thiserror::Error;

use crate::model::{ErrorMap, Field, RegistrationForm};
use crate::rules::{
    has_digit, has_lowercase, has_min_len, has_symbol, has_uppercase, is_known_gender,
    is_present, is_valid_email, is_valid_phone, messages, parse_age, AGE_MAX, AGE_MIN,
};

type Predicate = fn(&RegistrationForm) -> bool;

/// One constraint within a [`Schema`]: the predicate returns `true` when the
/// snapshot satisfies it.
#[derive(Debug, Clone)]
struct SchemaRule {
    field: Field,
    message: &'static str,
    accepts: Predicate,
}

/// A single rule violation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{message}")]
pub struct Violation {
    /// Field the violated rule belongs to.
    pub field: Field,
    /// User-facing message.
    pub message: &'static str,
}

/// Aggregate of every violation found in one validation pass.
///
/// Always non-empty when returned; flatten it into an [`ErrorMap`] for
/// rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed with {} violation(s)", .violations.len())]
pub struct ValidationErrors {
    /// Violations in field order, at most one per field.
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Flattens the aggregate into a per-field message map.
    pub fn into_error_map(self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for violation in self.violations {
            errors.insert(violation.field, violation.message);
        }
        errors
    }
}

/// Ordered, composable collection of field constraints.
#[derive(Debug, Clone)]
pub struct Schema {
    rules: Vec<SchemaRule>,
}

impl Schema {
    fn new() -> Self {
        Self { rules: Vec::new() }
    }

    fn rule(mut self, field: Field, message: &'static str, accepts: Predicate) -> Self {
        self.rules.push(SchemaRule {
            field,
            message,
            accepts,
        });
        self
    }

    /// The canonical registration form schema.
    ///
    /// Rule order within a field matters: the first failing rule supplies
    /// that field's message.
    pub fn registration() -> Self {
        Self::new()
            .rule(Field::FirstName, messages::FIRST_NAME_REQUIRED, |form| {
                is_present(&form.first_name)
            })
            .rule(Field::LastName, messages::LAST_NAME_REQUIRED, |form| {
                is_present(&form.last_name)
            })
            .rule(Field::Email, messages::EMAIL_REQUIRED, |form| {
                is_present(&form.email)
            })
            .rule(Field::Email, messages::EMAIL_INVALID, |form| {
                is_valid_email(&form.email)
            })
            .rule(Field::PhoneNumber, messages::PHONE_REQUIRED, |form| {
                is_present(&form.phone_number)
            })
            .rule(Field::PhoneNumber, messages::PHONE_INVALID, |form| {
                is_valid_phone(&form.phone_number)
            })
            .rule(Field::Password, messages::PASSWORD_REQUIRED, |form| {
                is_present(&form.password)
            })
            .rule(Field::Password, messages::PASSWORD_TOO_SHORT, |form| {
                has_min_len(&form.password)
            })
            .rule(Field::Password, messages::PASSWORD_NEEDS_SYMBOL, |form| {
                has_symbol(&form.password)
            })
            .rule(Field::Password, messages::PASSWORD_NEEDS_DIGIT, |form| {
                has_digit(&form.password)
            })
            .rule(Field::Password, messages::PASSWORD_NEEDS_UPPER, |form| {
                has_uppercase(&form.password)
            })
            .rule(Field::Password, messages::PASSWORD_NEEDS_LOWER, |form| {
                has_lowercase(&form.password)
            })
            .rule(Field::ConfirmPassword, messages::CONFIRM_REQUIRED, |form| {
                is_present(&form.confirm_password)
            })
            .rule(Field::ConfirmPassword, messages::CONFIRM_MISMATCH, |form| {
                form.confirm_password == form.password
            })
            .rule(Field::Age, messages::AGE_REQUIRED, |form| {
                is_present(&form.age)
            })
            .rule(Field::Age, messages::AGE_NOT_A_NUMBER, |form| {
                parse_age(&form.age).is_some()
            })
            .rule(Field::Age, messages::AGE_TOO_YOUNG, |form| {
                matches!(parse_age(&form.age), Some(age) if age >= AGE_MIN)
            })
            .rule(Field::Age, messages::AGE_TOO_OLD, |form| {
                matches!(parse_age(&form.age), Some(age) if age <= AGE_MAX)
            })
            .rule(Field::Gender, messages::GENDER_REQUIRED, |form| {
                is_known_gender(&form.gender)
            })
            .rule(Field::Interests, messages::INTERESTS_EMPTY, |form| {
                !form.interests.is_empty()
            })
            .rule(Field::BirthDate, messages::BIRTH_DATE_REQUIRED, |form| {
                is_present(&form.birth_date)
            })
    }

    /// Validates a snapshot against every rule.
    ///
    /// Every field is evaluated; within one field, evaluation stops at the
    /// first failing rule. Returns `Ok(())` for a fully valid snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] carrying one [`Violation`] per failing
    /// field.
    pub fn validate(&self, form: &RegistrationForm) -> Result<(), ValidationErrors> {
        let mut violations: Vec<Violation> = Vec::new();

        for rule in &self.rules {
            if violations
                .iter()
                .any(|violation| violation.field == rule.field)
            {
                continue;
            }
            if !(rule.accepts)(form) {
                violations.push(Violation {
                    field: rule.field,
                    message: rule.message,
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Interest;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone_number: "1234567890".to_string(),
            password: "Abcdefg1!".to_string(),
            confirm_password: "Abcdefg1!".to_string(),
            age: "30".to_string(),
            gender: "Female".to_string(),
            interests: [Interest::Coding].into_iter().collect(),
            birth_date: "1994-05-14".to_string(),
        }
    }

    fn validate(form: &RegistrationForm) -> ErrorMap {
        match Schema::registration().validate(form) {
            Ok(()) => ErrorMap::new(),
            Err(errors) => errors.into_error_map(),
        }
    }

    #[test]
    fn empty_form_flags_all_ten_fields() {
        let errors = validate(&RegistrationForm::default());
        assert_eq!(errors.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(errors.contains(field), "missing error for {}", field.name());
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(Schema::registration().validate(&valid_form()), Ok(()));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut form = valid_form();
        form.password = "short".to_string();
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn first_failing_rule_per_field_wins() {
        let mut form = valid_form();
        form.email = String::new();
        let errors = validate(&form);
        assert_eq!(errors.message(Field::Email), Some(messages::EMAIL_REQUIRED));

        form.email = "not-an-email".to_string();
        let errors = validate(&form);
        assert_eq!(errors.message(Field::Email), Some(messages::EMAIL_INVALID));
    }

    #[test]
    fn password_symbol_boundary() {
        let mut form = valid_form();
        form.password = "Abcdefg1".to_string();
        form.confirm_password = "Abcdefg1".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.message(Field::Password),
            Some(messages::PASSWORD_NEEDS_SYMBOL)
        );

        form.password = "Abcdefg1!".to_string();
        form.confirm_password = "Abcdefg1!".to_string();
        assert!(!validate(&form).contains(Field::Password));
    }

    #[test]
    fn password_reports_weakest_missing_class_in_rule_order() {
        let mut form = valid_form();
        form.password = "abcdefg!".to_string();
        form.confirm_password = "abcdefg!".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.message(Field::Password),
            Some(messages::PASSWORD_NEEDS_DIGIT)
        );
    }

    #[test]
    fn confirm_password_is_cross_field() {
        let mut form = valid_form();
        form.confirm_password = "Abcdefg1".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.message(Field::ConfirmPassword),
            Some(messages::CONFIRM_MISMATCH)
        );
        assert!(!errors.contains(Field::Password));
    }

    #[test]
    fn age_boundaries() {
        let cases = [
            ("17", Some(messages::AGE_TOO_YOUNG)),
            ("18", None),
            ("100", None),
            ("101", Some(messages::AGE_TOO_OLD)),
            ("abc", Some(messages::AGE_NOT_A_NUMBER)),
            ("", Some(messages::AGE_REQUIRED)),
        ];
        for (input, expected) in cases {
            let mut form = valid_form();
            form.age = input.to_string();
            assert_eq!(
                validate(&form).message(Field::Age),
                expected,
                "age input {input:?}"
            );
        }
    }

    #[test]
    fn phone_rejects_formatting_characters() {
        let mut form = valid_form();
        form.phone_number = "123-456-7890".to_string();
        assert_eq!(
            validate(&form).message(Field::PhoneNumber),
            Some(messages::PHONE_INVALID)
        );
    }

    #[test]
    fn unknown_gender_value_is_rejected() {
        let mut form = valid_form();
        form.gender = "Unknown".to_string();
        assert_eq!(
            validate(&form).message(Field::Gender),
            Some(messages::GENDER_REQUIRED)
        );
    }

    #[test]
    fn aggregate_error_reports_violation_count() {
        let err = Schema::registration()
            .validate(&RegistrationForm::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "validation failed with 10 violation(s)");
    }
}
