use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Identifier for each registration form field.
///
/// `name()` is the stable wire name used for serialized snapshots and DOM
/// ids; `label()` is the user-facing caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Ten-digit phone number.
    PhoneNumber,
    /// Password.
    Password,
    /// Password confirmation.
    ConfirmPassword,
    /// Age in years.
    Age,
    /// Gender selection.
    Gender,
    /// Multi-select interests.
    Interests,
    /// Date of birth.
    BirthDate,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
        Self::Password,
        Self::ConfirmPassword,
        Self::Age,
        Self::Gender,
        Self::Interests,
        Self::BirthDate,
    ];

    /// Stable wire name for the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Interests => "interests",
            Self::BirthDate => "birthDate",
        }
    }

    /// User-facing caption for the field.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Interests => "Interests",
            Self::BirthDate => "Date of Birth",
        }
    }
}

/// Gender options offered by the select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or unspecified.
    Other,
}

impl Gender {
    /// Every option, in display order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// DOM option value (doubles as the label).
    pub fn value(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parses a raw select value; `None` for the empty placeholder or any
    /// unknown string.
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.value() == raw)
    }
}

/// Interest checkboxes offered by the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Interest {
    /// Coding.
    Coding,
    /// Sports.
    Sports,
    /// Reading.
    Reading,
}

impl Interest {
    /// Every option, in display order.
    pub const ALL: [Self; 3] = [Self::Coding, Self::Sports, Self::Reading];

    /// DOM checkbox value.
    pub fn value(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Sports => "sports",
            Self::Reading => "reading",
        }
    }

    /// User-facing caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::Sports => "Sports",
            Self::Reading => "Reading",
        }
    }
}

/// Raw snapshot of user input across the whole form.
///
/// Scalar fields hold whatever the control last reported, untrimmed and
/// unparsed; `age` and `birth_date` stay strings because numeric and date
/// interpretation is a validation concern. `Default` is the initial empty
/// form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
    /// Age, as entered.
    pub age: String,
    /// Selected gender value; empty string means "not chosen".
    pub gender: String,
    /// Selected interests; set semantics, no duplicates.
    pub interests: BTreeSet<Interest>,
    /// Birth date in the date input's `YYYY-MM-DD` form; empty when unset.
    pub birth_date: String,
}

impl RegistrationForm {
    /// Raw text value of a scalar field. [`Field::Interests`] has no scalar
    /// representation and returns the empty string.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Interests => "",
            Field::BirthDate => &self.birth_date,
        }
    }
}

/// Ordered mapping from field to a user-facing validation message.
///
/// Recomputed wholesale on every validation pass; an empty map means the
/// snapshot is valid. Insertion keeps the first message recorded for a
/// field, mirroring stop-at-first-error-per-field rule semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<Field, &'static str>,
}

impl ErrorMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field` unless one is already present.
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.entries.entry(field).or_insert(message);
    }

    /// Message for `field`, if any.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.entries.get(&field).copied()
    }

    /// Whether `field` has a recorded violation.
    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// True when no field has a violation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with violations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates violations in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, *message))
    }
}
