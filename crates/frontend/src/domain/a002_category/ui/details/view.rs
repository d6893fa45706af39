use std::sync::Arc;

use contracts::domain::a002_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;

use crate::layout::browser_effects::use_form_effects;
use crate::shared::components::ui::{field_error_signal, Input, Select};
use crate::shared::components::EntityForm;
use crate::shared::form_controller::EntityFormController;
use crate::shared::resource_api::HttpResourceApi;

/// Category form; `billboards` holds `(id, label)` options of the select
#[component]
pub fn CategoryForm(
    store_id: String,
    initial_data: Option<Category>,
    #[prop(into)] billboards: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let vm = EntityFormController::<CategoryDto>::new(
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
    let on_billboard = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.update(|f| f.billboard_id = id))
    };

    view! {
        <EntityForm controller=vm>
            <div class="form-grid">
                <Input
                    label="Nome"
                    placeholder="Nome da categoria"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=on_name
                    error=field_error_signal(errors, "name")
                    disabled=loading
                />
                <Select
                    label="Destaque"
                    placeholder="Selecione um destaque"
                    value=Signal::derive(move || form.with(|f| f.billboard_id.clone()))
                    options=billboards
                    on_change=on_billboard
                    error=field_error_signal(errors, "billboardId")
                    disabled=loading
                />
            </div>
        </EntityForm>
    }
}
