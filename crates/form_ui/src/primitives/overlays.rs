use super::*;

#[component]
/// Dismissible confirmation overlay with a static message and a close
/// action.
pub fn ConfirmationModal(
    #[prop(into)] message: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=merge_layout_class("ui-modal-overlay", layout_class)
                data-ui-primitive="true"
                data-ui-kind="modal-overlay"
            >
                <div
                    class="ui-modal"
                    role="dialog"
                    aria-modal="true"
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                >
                    <p data-ui-slot="message">{message.clone()}</p>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |ev| {
                            if let Some(on_close) = on_close.as_ref() {
                                on_close.call(ev);
                            }
                        })
                    >
                        "Close"
                    </Button>
                </div>
            </div>
        </Show>
    }
}
