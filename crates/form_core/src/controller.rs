//! Form controller: owns the mutable form and error state and mediates
//! between UI events and the validation engines.
//!
//! Modeled as a reducer: the UI dispatches [`FormAction`]s, state mutates in
//! place, and accepted submissions surface as a [`FormEffect`] intent the UI
//! layer executes (the reducer itself performs no I/O).

use crate::manual;
use crate::model::{ErrorMap, Field, Interest, RegistrationForm};
use crate::schema::Schema;

/// Which validation engine a form instance runs on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Declarative schema engine.
    Schema,
    /// Hand-rolled conditional engine.
    Manual,
}

/// Controller lifecycle phase.
///
/// `Accepted` backs the success modal of the schema form; the manual form
/// never leaves `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Collecting input; errors from the last rejected submit may be shown.
    Editing,
    /// Last submission was accepted and the confirmation is on screen.
    Accepted,
}

/// Actions accepted by [`FormState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Replace a scalar field's raw value. No eager validation.
    FieldChange {
        /// Field being edited.
        field: Field,
        /// New raw control value.
        value: String,
    },
    /// Add or remove an interest. Set semantics, no duplicates.
    InterestToggle {
        /// Interest being toggled.
        interest: Interest,
        /// Checkbox state after the toggle.
        checked: bool,
    },
    /// Validate the current snapshot and accept or reject it.
    Submit,
    /// Close the success confirmation and reset the form to its initial
    /// empty state.
    DismissConfirmation,
}

/// Side-effect intents produced by the reducer for the UI layer to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    /// An accepted submission; carries the accepted snapshot for the
    /// console-visible record.
    RecordSubmission(RegistrationForm),
}

/// Mutable state of one registration form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    form: RegistrationForm,
    errors: ErrorMap,
    phase: FormPhase,
    engine: EngineKind,
}

impl FormState {
    /// Fresh editing state bound to the given engine.
    pub fn new(engine: EngineKind) -> Self {
        Self {
            form: RegistrationForm::default(),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
            engine,
        }
    }

    /// Current form snapshot.
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Raw scalar value for a field, for control rendering.
    pub fn value(&self, field: Field) -> &str {
        self.form.value(field)
    }

    /// Error message for a field from the last rejected submit, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.message(field)
    }

    /// Whether an interest is currently selected.
    pub fn interest_selected(&self, interest: Interest) -> bool {
        self.form.interests.contains(&interest)
    }

    /// Whether the success confirmation should be shown.
    pub fn confirmation_open(&self) -> bool {
        self.phase == FormPhase::Accepted
    }

    /// Engine this instance validates with.
    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Applies an action, returning a side-effect intent when one results.
    pub fn apply(&mut self, action: FormAction) -> Option<FormEffect> {
        match action {
            FormAction::FieldChange { field, value } => {
                self.set_field(field, value);
                None
            }
            FormAction::InterestToggle { interest, checked } => {
                if checked {
                    self.form.interests.insert(interest);
                } else {
                    self.form.interests.remove(&interest);
                }
                None
            }
            FormAction::Submit => self.submit(),
            FormAction::DismissConfirmation => {
                if self.phase == FormPhase::Accepted {
                    self.form = RegistrationForm::default();
                    self.errors = ErrorMap::new();
                    self.phase = FormPhase::Editing;
                }
                None
            }
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.form.first_name = value,
            Field::LastName => self.form.last_name = value,
            Field::Email => self.form.email = value,
            Field::PhoneNumber => self.form.phone_number = value,
            Field::Password => self.form.password = value,
            Field::ConfirmPassword => self.form.confirm_password = value,
            Field::Age => self.form.age = value,
            Field::Gender => self.form.gender = value,
            // Interests only change through InterestToggle.
            Field::Interests => {}
            Field::BirthDate => self.form.birth_date = value,
        }
    }

    fn submit(&mut self) -> Option<FormEffect> {
        self.errors = ErrorMap::new();

        let errors = match self.engine {
            EngineKind::Schema => match Schema::registration().validate(&self.form) {
                Ok(()) => ErrorMap::new(),
                Err(aggregate) => aggregate.into_error_map(),
            },
            EngineKind::Manual => manual::validate(&self.form),
        };

        if errors.is_empty() {
            let snapshot = self.form.clone();
            if self.engine == EngineKind::Schema {
                self.phase = FormPhase::Accepted;
            }
            Some(FormEffect::RecordSubmission(snapshot))
        } else {
            self.errors = errors;
            self.phase = FormPhase::Editing;
            None
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(EngineKind::Schema)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::messages;

    fn change(state: &mut FormState, field: Field, value: &str) {
        let effect = state.apply(FormAction::FieldChange {
            field,
            value: value.to_string(),
        });
        assert_eq!(effect, None);
    }

    fn fill_valid(state: &mut FormState) {
        change(state, Field::FirstName, "Jane");
        change(state, Field::LastName, "Doe");
        change(state, Field::Email, "jane.doe@example.com");
        change(state, Field::PhoneNumber, "1234567890");
        change(state, Field::Password, "Abcdefg1!");
        change(state, Field::ConfirmPassword, "Abcdefg1!");
        change(state, Field::Age, "30");
        change(state, Field::Gender, "Female");
        change(state, Field::BirthDate, "1994-05-14");
        state.apply(FormAction::InterestToggle {
            interest: Interest::Coding,
            checked: true,
        });
    }

    #[test]
    fn field_changes_do_not_validate_eagerly() {
        let mut state = FormState::new(EngineKind::Schema);
        change(&mut state, Field::Email, "not-an-email");
        assert_eq!(state.error(Field::Email), None);
    }

    #[test]
    fn rejected_submit_publishes_errors_and_stays_editing() {
        let mut state = FormState::new(EngineKind::Schema);
        let effect = state.apply(FormAction::Submit);
        assert_eq!(effect, None);
        assert_eq!(state.phase(), FormPhase::Editing);
        for field in Field::ALL {
            assert!(state.error(field).is_some(), "no error for {}", field.name());
        }
    }

    #[test]
    fn accepted_schema_submit_opens_confirmation_and_records_snapshot() {
        let mut state = FormState::new(EngineKind::Schema);
        fill_valid(&mut state);

        let effect = state.apply(FormAction::Submit);
        let Some(FormEffect::RecordSubmission(snapshot)) = effect else {
            panic!("expected a submission record");
        };
        assert_eq!(snapshot.email, "jane.doe@example.com");
        assert!(state.confirmation_open());
        assert_eq!(state.error(Field::Email), None);
    }

    #[test]
    fn accepted_manual_submit_records_but_stays_editing() {
        let mut state = FormState::new(EngineKind::Manual);
        fill_valid(&mut state);

        let effect = state.apply(FormAction::Submit);
        assert!(matches!(effect, Some(FormEffect::RecordSubmission(_))));
        assert_eq!(state.phase(), FormPhase::Editing);
        assert!(!state.confirmation_open());
        assert_eq!(state.form().first_name, "Jane");
    }

    #[test]
    fn dismissing_confirmation_resets_to_initial_state() {
        let mut state = FormState::new(EngineKind::Schema);
        fill_valid(&mut state);
        state.apply(FormAction::Submit);
        assert!(state.confirmation_open());

        state.apply(FormAction::DismissConfirmation);
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(state.form(), &RegistrationForm::default());
        assert_eq!(state.error(Field::FirstName), None);
    }

    #[test]
    fn dismiss_is_a_noop_while_editing() {
        let mut state = FormState::new(EngineKind::Schema);
        change(&mut state, Field::FirstName, "Jane");
        state.apply(FormAction::DismissConfirmation);
        assert_eq!(state.form().first_name, "Jane");
    }

    #[test]
    fn interest_toggle_has_set_semantics_and_retriggers_error() {
        let mut state = FormState::new(EngineKind::Manual);
        fill_valid(&mut state);

        state.apply(FormAction::InterestToggle {
            interest: Interest::Coding,
            checked: true,
        });
        assert!(state.interest_selected(Interest::Coding));

        state.apply(FormAction::InterestToggle {
            interest: Interest::Coding,
            checked: false,
        });
        assert!(!state.interest_selected(Interest::Coding));
        assert!(state.form().interests.is_empty());

        let effect = state.apply(FormAction::Submit);
        assert_eq!(effect, None);
        assert_eq!(
            state.error(Field::Interests),
            Some(messages::INTERESTS_EMPTY)
        );
    }

    #[test]
    fn resubmitting_after_correction_clears_previous_errors() {
        let mut state = FormState::new(EngineKind::Schema);
        fill_valid(&mut state);
        change(&mut state, Field::Age, "17");

        assert_eq!(state.apply(FormAction::Submit), None);
        assert_eq!(state.error(Field::Age), Some(messages::AGE_TOO_YOUNG));

        change(&mut state, Field::Age, "18");
        let effect = state.apply(FormAction::Submit);
        assert!(matches!(effect, Some(FormEffect::RecordSubmission(_))));
        assert_eq!(state.error(Field::Age), None);
    }

    #[test]
    fn interests_field_change_is_ignored() {
        let mut state = FormState::new(EngineKind::Schema);
        change(&mut state, Field::Interests, "coding");
        assert!(state.form().interests.is_empty());
    }
}
