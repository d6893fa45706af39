use leptos::prelude::*;

/// Checkbox card with a label and a hint line
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Hint under the label
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    on_change: Callback<bool>,
    /// Disabled while the form is busy
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let wrapper_class = move || {
        if disabled.get() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <label class=wrapper_class>
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <div class="form__checkbox-text">
                <span class="form__checkbox-label">{label}</span>
                {move || description.get().map(|d| view! {
                    <p class="form__checkbox-description">{d}</p>
                })}
            </div>
        </label>
    }
}
