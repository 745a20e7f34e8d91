use super::*;

#[component]
/// Labeled field wrapper with an error slot beneath the control.
pub fn FieldRow(
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] error: MaybeSignal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-field-row", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-row"
            data-ui-invalid=move || bool_token(error.get().is_some())
        >
            <span data-ui-slot="label">{label}</span>
            <span data-ui-slot="control">{children()}</span>
            {move || error.get().map(|message| view! { <FieldError message=message /> })}
        </div>
    }
}

#[component]
/// Inline validation message for a single field.
pub fn FieldError(message: &'static str) -> impl IntoView {
    view! {
        <p
            class="ui-field-error"
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="field-error"
            data-ui-slot="error"
        >
            {message}
        </p>
    }
}

#[component]
/// Single-line input primitive for text, number, and date entry.
pub fn TextInput(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-input", layout_class)
            type=input_type.unwrap_or("text")
            id=id
            placeholder=placeholder
            aria-label=aria_label
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-input"
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Select primitive; options are supplied as children.
pub fn SelectInput(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class=merge_layout_class("ui-input", layout_class)
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select-input"
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {children()}
        </select>
    }
}

#[component]
/// Checkbox primitive for multi-select options.
pub fn CheckboxInput(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] value: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-checkbox", layout_class)
            type="checkbox"
            aria-label=move || aria_label.get()
            value=value
            prop:checked=move || checked.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox-input"
            data-ui-selected=move || bool_token(checked.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        />
    }
}

#[component]
/// Button primitive; `submit` switches the DOM type so the button can drive
/// a surrounding form's submit event.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };

    view! {
        <button
            class=merge_layout_class("ui-button", layout_class)
            type=button_type
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
