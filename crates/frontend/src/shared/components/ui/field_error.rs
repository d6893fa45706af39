use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Message under an input; renders nothing while the field is valid
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <p class="form__error">{message}</p>
        })}
    }
}

/// Reactive view of one field's validation message
pub fn field_error_signal(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
}
