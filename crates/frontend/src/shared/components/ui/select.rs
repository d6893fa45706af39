use leptos::prelude::*;

use super::field_error::FieldError;

/// Select bound to a reference id of the draft
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message shown under the select
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Disabled while the form is busy
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                class:form__select--invalid=move || error.get().is_some()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError error=error />
        </div>
    }
}
