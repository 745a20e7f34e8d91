//! The two validation engines must agree on every snapshot: same fields
//! flagged, same messages, byte for byte.

use form_core::{manual, ErrorMap, Interest, RegistrationForm, Schema};
use pretty_assertions::assert_eq;

fn schema_validate(form: &RegistrationForm) -> ErrorMap {
    match Schema::registration().validate(form) {
        Ok(()) => ErrorMap::new(),
        Err(errors) => errors.into_error_map(),
    }
}

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

fn assert_parity(label: &str, form: &RegistrationForm) {
    assert_eq!(
        schema_validate(form),
        manual::validate(form),
        "engines disagree on case: {label}"
    );
}

#[test]
fn engines_agree_on_empty_and_valid_forms() {
    assert_parity("empty", &RegistrationForm::default());
    assert_parity("valid", &valid_form());
}

#[test]
fn engines_agree_on_single_field_violations() {
    let mutations: [(&str, fn(&mut RegistrationForm)); 14] = [
        ("blank first name", |form| form.first_name = "  ".to_string()),
        ("blank last name", |form| form.last_name.clear()),
        ("malformed email", |form| {
            form.email = "jane.doe@example".to_string();
        }),
        ("short phone", |form| form.phone_number = "12345".to_string()),
        ("dashed phone", |form| {
            form.phone_number = "123-456-7890".to_string();
        }),
        ("short password", |form| {
            form.password = "Ab1!".to_string();
            form.confirm_password = "Ab1!".to_string();
        }),
        ("password without symbol", |form| {
            form.password = "Abcdefg1".to_string();
            form.confirm_password = "Abcdefg1".to_string();
        }),
        ("password without digit", |form| {
            form.password = "Abcdefgh!".to_string();
            form.confirm_password = "Abcdefgh!".to_string();
        }),
        ("confirm mismatch", |form| {
            form.confirm_password = "Abcdefg1".to_string();
        }),
        ("age seventeen", |form| form.age = "17".to_string()),
        ("age not a number", |form| form.age = "abc".to_string()),
        ("unknown gender", |form| form.gender = "unknown".to_string()),
        ("no interests", |form| form.interests.clear()),
        ("no birth date", |form| form.birth_date.clear()),
    ];

    for (label, mutate) in mutations {
        let mut form = valid_form();
        mutate(&mut form);
        assert_parity(label, &form);
    }
}

#[test]
fn engines_agree_on_compound_violations() {
    let mut form = valid_form();
    form.email = "nope".to_string();
    form.age = "101".to_string();
    form.password = "weak".to_string();
    form.interests.clear();
    assert_parity("compound", &form);

    let errors = schema_validate(&form);
    assert_eq!(errors.len(), 5);
}
