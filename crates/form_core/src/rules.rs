//! Canonical rule set shared by both validation engines.
//!
//! The schema and manual engines intentionally use the same predicates and
//! messages so their results can never diverge. Rule intent and message text
//! follow the declarative schema variant of the form.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Gender;

/// Symbols accepted by the password complexity rule.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}<>";

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Inclusive lower age bound.
pub const AGE_MIN: i64 = 18;

/// Inclusive upper age bound.
pub const AGE_MAX: i64 = 100;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("phone pattern"));

/// Validation messages, verbatim across both engines.
pub mod messages {
    /// firstName missing.
    pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
    /// lastName missing.
    pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
    /// email missing.
    pub const EMAIL_REQUIRED: &str = "Email is required";
    /// email malformed.
    pub const EMAIL_INVALID: &str = "Invalid email format";
    /// phoneNumber missing.
    pub const PHONE_REQUIRED: &str = "Phone Number is required";
    /// phoneNumber not exactly ten digits.
    pub const PHONE_INVALID: &str = "Phone Number must be 10 digits";
    /// password missing.
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    /// password shorter than eight characters.
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
    /// password lacks a symbol.
    pub const PASSWORD_NEEDS_SYMBOL: &str = "Password must contain at least one symbol";
    /// password lacks a digit.
    pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";
    /// password lacks an uppercase letter.
    pub const PASSWORD_NEEDS_UPPER: &str = "Password must contain at least one uppercase letter";
    /// password lacks a lowercase letter.
    pub const PASSWORD_NEEDS_LOWER: &str = "Password must contain at least one lowercase letter";
    /// confirmPassword missing.
    pub const CONFIRM_REQUIRED: &str = "Confirm Password is required";
    /// confirmPassword differs from password.
    pub const CONFIRM_MISMATCH: &str = "Passwords must match";
    /// age missing.
    pub const AGE_REQUIRED: &str = "Age is required";
    /// age is not an integer.
    pub const AGE_NOT_A_NUMBER: &str = "Age must be a number";
    /// age below the minimum.
    pub const AGE_TOO_YOUNG: &str = "You must be at least 18 years old";
    /// age above the maximum.
    pub const AGE_TOO_OLD: &str = "You cannot be older than 100 years";
    /// gender missing.
    pub const GENDER_REQUIRED: &str = "Gender is required";
    /// interests empty.
    pub const INTERESTS_EMPTY: &str = "Select at least one interest";
    /// birthDate missing.
    pub const BIRTH_DATE_REQUIRED: &str = "Date of birth is required";
}

/// Non-empty after trimming.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Matches the canonical email pattern.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

/// At least [`PASSWORD_MIN_LEN`] characters.
pub fn has_min_len(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
}

/// Contains at least one lowercase ASCII letter.
pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_lowercase())
}

/// Contains at least one uppercase ASCII letter.
pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_uppercase())
}

/// Contains at least one ASCII digit.
pub fn has_digit(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit())
}

/// Contains at least one accepted symbol.
pub fn has_symbol(value: &str) -> bool {
    value.chars().any(|ch| PASSWORD_SYMBOLS.contains(ch))
}

/// Parses the raw age input as an integer; `None` for anything else.
pub fn parse_age(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Within the inclusive `[AGE_MIN, AGE_MAX]` range.
pub fn age_in_range(age: i64) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&age)
}

/// Raw select value names one of the enumerated genders.
pub fn is_known_gender(value: &str) -> bool {
    Gender::from_value(value.trim()).is_some()
}
