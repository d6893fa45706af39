use std::sync::Arc;

use contracts::domain::a003_size::aggregate::{Size, SizeDto};
use leptos::prelude::*;

use crate::layout::browser_effects::use_form_effects;
use crate::shared::components::ui::{field_error_signal, Input};
use crate::shared::components::EntityForm;
use crate::shared::form_controller::EntityFormController;
use crate::shared::resource_api::HttpResourceApi;

#[component]
pub fn SizeForm(store_id: String, initial_data: Option<Size>) -> impl IntoView {
    let vm = EntityFormController::<SizeDto>::new(
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

    view! {
        <EntityForm controller=vm>
            <div class="form-grid">
                <Input
                    label="Nome"
                    placeholder="Nome do tamanho"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=on_name
                    error=field_error_signal(errors, "name")
                    disabled=loading
                />
                <Input
                    label="Valor"
                    placeholder="Valor do tamanho"
                    value=Signal::derive(move || form.with(|f| f.value.clone()))
                    on_input=on_value
                    error=field_error_signal(errors, "value")
                    disabled=loading
                />
            </div>
        </EntityForm>
    }
}
