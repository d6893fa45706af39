use std::sync::Arc;

use contracts::domain::a004_color::aggregate::{Color, ColorDto};
use leptos::prelude::*;

use crate::layout::browser_effects::use_form_effects;
use crate::shared::components::ui::{field_error_signal, Input};
use crate::shared::components::EntityForm;
use crate::shared::form_controller::EntityFormController;
use crate::shared::resource_api::HttpResourceApi;

#[component]
pub fn ColorForm(store_id: String, initial_data: Option<Color>) -> impl IntoView {
    let vm = EntityFormController::<ColorDto>::new(
        store_id,
        initial_data,
        Arc::new(HttpResourceApi),
        use_form_effects(),
    );
    let form = vm.form;
    let errors = vm.errors;
    let loading = vm.loading;

    let on_name = {
        let vm = vm.clone();
        Callback::new(move |name: String| vm.update(|f| f.name = name))
    };
    let on_value = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.update(|f| f.value = value))
    };
    let swatch_style = move || form.with(|f| format!("background-color: {}", f.value));

    view! {
        <EntityForm controller=vm>
            <div class="form-grid">
                <Input
                    label="Nome"
                    placeholder="Nome da cor"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=on_name
                    error=field_error_signal(errors, "name")
                    disabled=loading
                />
                <div class="color-input">
                    <Input
                        label="Valor"
                        placeholder="Valor da cor"
                        value=Signal::derive(move || form.with(|f| f.value.clone()))
                        on_input=on_value
                        error=field_error_signal(errors, "value")
                        disabled=loading
                    />
                    <span class="swatch-cell__color" style=swatch_style></span>
                </div>
            </div>
        </EntityForm>
    }
}
