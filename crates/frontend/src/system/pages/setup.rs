use contracts::domain::common::{is_valid_store_id, EntityCollection, ResourcePaths};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::modal_service::{Modal, StoreModal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SETUP;

/// Landing page at `/`: keeps the store dialog open until a store is chosen
#[component]
pub fn SetupPage() -> impl IntoView {
    let modal = use_context::<StoreModal>().expect("StoreModal not provided in context");
    let store_id = RwSignal::new(String::new());
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !modal.is_open() {
            modal.open();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = store_id.get_untracked().trim().to_string();
        if !is_valid_store_id(&id) {
            log::warn!("rejected store id {:?}", id);
            return;
        }
        log::info!("opening store {}", id);
        modal.close();
        navigate(
            &ResourcePaths::new(&id, EntityCollection::Billboards).list_view(),
            NavigateOptions::default(),
        );
    };

    view! {
        <PageFrame page_id="store--setup" category=PAGE_CAT_SETUP>
            <Modal title="Escolha a loja">
                <p class="modal-description">"Informe o ID da loja que deseja gerenciar."</p>
                <form class="details-form" on:submit=on_submit.clone()>
                    <div class="form__group">
                        <label class="form__label">"ID da loja"</label>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="ID da loja"
                            prop:value=move || store_id.get()
                            on:input=move |ev| store_id.set(event_target_value(&ev))
                        />
                        {move || {
                            store_id.with(|id| {
                                let id = id.trim();
                                (!id.is_empty() && !is_valid_store_id(id))
                                    .then(|| view! { <p class="form__error">"ID de loja inválido"</p> })
                            })
                        }}
                    </div>
                    <div class="details-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || store_id.with(|id| !is_valid_store_id(id.trim()))
                        >
                            "Continuar"
                        </button>
                    </div>
                </form>
            </Modal>
        </PageFrame>
    }
}
