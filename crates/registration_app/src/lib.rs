//! Registration form components: a schema-validated variant and a
//! manually-validated variant over one shared form body.
//!
//! Each form owns a [`form_core::FormState`] signal and dispatches
//! [`FormAction`]s from control events; validation runs only on submit. An
//! accepted submission is recorded to the browser console, and the schema
//! variant additionally raises a confirmation modal that resets the form
//! when dismissed.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use form_core::{
    EngineKind, Field, FormAction, FormEffect, FormState, Gender, Interest, RegistrationForm,
};
use form_ui::prelude::*;
use leptos::*;
use wasm_bindgen::JsValue;
use web_sys::console;

const SUCCESS_MESSAGE: &str = "Registration submitted successfully.";

#[component]
/// Registration form backed by the declarative schema engine, with a
/// success modal on accepted submission.
pub fn SchemaRegistrationForm() -> impl IntoView {
    view! { <RegistrationFormBody engine=EngineKind::Schema /> }
}

#[component]
/// Registration form backed by the hand-rolled validation engine.
pub fn ManualRegistrationForm() -> impl IntoView {
    view! { <RegistrationFormBody engine=EngineKind::Manual /> }
}

#[component]
fn RegistrationFormBody(engine: EngineKind) -> impl IntoView {
    let state = create_rw_signal(FormState::new(engine));
    let dispatch = Callback::new(move |action: FormAction| {
        let mut effect = None;
        state.update(|form_state| effect = form_state.apply(action));
        if let Some(FormEffect::RecordSubmission(snapshot)) = effect {
            record_submission(&snapshot);
        }
    });

    view! {
        <form
            class="registration-form"
            on:submit=move |ev| {
                ev.prevent_default();
                dispatch.call(FormAction::Submit);
            }
        >
            <h2>"Registration Form"</h2>
            <Stack gap=LayoutGap::Md>
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::FirstName
                    placeholder="Enter Your First Name"
                />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::LastName
                    placeholder="Enter Your Last Name"
                />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::Email
                    input_type="email"
                    placeholder="Enter Your Email"
                />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::PhoneNumber
                    input_type="tel"
                    placeholder="Enter Your Phone Number"
                />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::Password
                    input_type="password"
                    placeholder="Enter Your Password"
                />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::ConfirmPassword
                    input_type="password"
                    placeholder="Confirm Your Password"
                />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::Age
                    input_type="number"
                    placeholder="Enter Your Age"
                />
                <GenderFieldRow state=state dispatch=dispatch />
                <InterestsFieldRow state=state dispatch=dispatch />
                <TextFieldRow
                    state=state
                    dispatch=dispatch
                    field=Field::BirthDate
                    input_type="date"
                />
                <Cluster gap=LayoutGap::Sm>
                    <Button variant=ButtonVariant::Primary submit=true>
                        "Submit"
                    </Button>
                </Cluster>
            </Stack>
        </form>
        {(engine == EngineKind::Schema).then(|| view! {
            <ConfirmationModal
                message=SUCCESS_MESSAGE
                open=Signal::derive(move || state.with(FormState::confirmation_open))
                on_close=Callback::new(move |_| dispatch.call(FormAction::DismissConfirmation))
            />
        })}
    }
}

#[component]
fn TextFieldRow(
    state: RwSignal<FormState>,
    dispatch: Callback<FormAction>,
    field: Field,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <FieldRow
            label=field.label()
            error=Signal::derive(move || state.with(|form_state| form_state.error(field)))
        >
            <TextInput
                input_type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                aria_label=field.label()
                value=Signal::derive(move || {
                    state.with(|form_state| form_state.value(field).to_string())
                })
                on_input=Callback::new(move |ev| {
                    dispatch.call(FormAction::FieldChange {
                        field,
                        value: event_target_value(&ev),
                    });
                })
            />
        </FieldRow>
    }
}

#[component]
fn GenderFieldRow(state: RwSignal<FormState>, dispatch: Callback<FormAction>) -> impl IntoView {
    view! {
        <FieldRow
            label=Field::Gender.label()
            error=Signal::derive(move || state.with(|form_state| form_state.error(Field::Gender)))
        >
            <SelectInput
                aria_label=Field::Gender.label()
                value=Signal::derive(move || {
                    state.with(|form_state| form_state.value(Field::Gender).to_string())
                })
                on_change=Callback::new(move |ev| {
                    dispatch.call(FormAction::FieldChange {
                        field: Field::Gender,
                        value: event_target_value(&ev),
                    });
                })
            >
                <option value="">"Select Gender"</option>
                <For each=move || Gender::ALL key=|gender| gender.value() let:gender>
                    <option value=gender.value()>{gender.value()}</option>
                </For>
            </SelectInput>
        </FieldRow>
    }
}

#[component]
fn InterestsFieldRow(state: RwSignal<FormState>, dispatch: Callback<FormAction>) -> impl IntoView {
    view! {
        <FieldRow
            label=Field::Interests.label()
            error=Signal::derive(move || {
                state.with(|form_state| form_state.error(Field::Interests))
            })
        >
            <Cluster gap=LayoutGap::Sm>
                <For each=move || Interest::ALL key=|interest| interest.value() let:interest>
                    <span data-ui-slot="option">
                        <CheckboxInput
                            value=interest.value()
                            aria_label=interest.label()
                            checked=Signal::derive(move || {
                                state.with(|form_state| form_state.interest_selected(interest))
                            })
                            on_change=Callback::new(move |ev| {
                                dispatch.call(FormAction::InterestToggle {
                                    interest,
                                    checked: event_target_checked(&ev),
                                });
                            })
                        />
                        {interest.label()}
                    </span>
                </For>
            </Cluster>
        </FieldRow>
    }
}

/// Console-visible record of an accepted submission; submission terminates
/// here, with no network or storage call.
fn record_submission(form: &RegistrationForm) {
    let payload = serde_json::to_string(form).unwrap_or_else(|_| format!("{form:?}"));
    console::log_2(
        &JsValue::from_str("Form Submitted"),
        &JsValue::from_str(&payload),
    );
}
