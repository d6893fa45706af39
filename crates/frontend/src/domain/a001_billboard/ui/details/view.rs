use std::sync::Arc;

use contracts::domain::a001_billboard::aggregate::{Billboard, BillboardDto};
use leptos::prelude::*;

use crate::layout::browser_effects::use_form_effects;
use crate::shared::components::ui::{field_error_signal, ImageUpload, Input};
use crate::shared::components::EntityForm;
use crate::shared::form_controller::EntityFormController;
use crate::shared::resource_api::HttpResourceApi;

#[component]
pub fn BillboardForm(store_id: String, initial_data: Option<Billboard>) -> impl IntoView {
    let vm = EntityFormController::<BillboardDto>::new(
        store_id,
        initial_data,
        Arc::new(HttpResourceApi),
        use_form_effects(),
    );
    let form = vm.form;
    let errors = vm.errors;
    let loading = vm.loading;

    let image = Signal::derive(move || {
        form.with(|f| {
            if f.image_url.is_empty() {
                vec![]
            } else {
                vec![f.image_url.clone()]
            }
        })
    });
    let on_add_image = {
        let vm = vm.clone();
        Callback::new(move |url: String| vm.update(|f| f.image_url = url))
    };
    let on_remove_image = {
        let vm = vm.clone();
        Callback::new(move |_: String| vm.update(|f| f.image_url.clear()))
    };
    let on_label = {
        let vm = vm.clone();
        Callback::new(move |label: String| vm.update(|f| f.label = label))
    };

    view! {
        <EntityForm controller=vm>
            <div class="form__group">
                <label class="form__label">"Imagem de fundo"</label>
                <ImageUpload
                    value=image
                    max=1
                    on_add=on_add_image
                    on_remove=on_remove_image
                    error=field_error_signal(errors, "imageUrl")
                    disabled=loading
                />
            </div>
            <div class="form-grid">
                <Input
                    label="Rótulo"
                    placeholder="Rótulo do destaque"
                    value=Signal::derive(move || form.with(|f| f.label.clone()))
                    on_input=on_label
                    error=field_error_signal(errors, "label")
                    disabled=loading
                />
            </div>
        </EntityForm>
    }
}
