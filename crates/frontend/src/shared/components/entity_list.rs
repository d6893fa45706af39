use std::sync::Arc;

use contracts::domain::common::{ColumnDef, EntityCollection, FormMessages, ResourcePaths, TableRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert_modal::AlertModal;
use super::api_list::ApiList;
use super::data_table::DataTable;
use super::heading::Heading;
use crate::layout::browser_effects::use_form_effects;
use crate::shared::form_controller::RowActions;
use crate::shared::icons::icon;
use crate::shared::resource_api::HttpResourceApi;

/// Body of a collection page: counted heading, add button, searchable table
/// and the API reference.
///
/// Without `messages` the collection is read-only: no add button, no row
/// actions and no API reference.
#[component]
pub fn EntityListClient<R: TableRow>(
    #[prop(into)] store_id: String,
    collection: EntityCollection,
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: &'static [ColumnDef],
    search_key: &'static str,
    #[prop(optional)] messages: Option<FormMessages>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let effects = use_form_effects();
    let actions = messages.map(|messages| {
        RowActions::new(
            store_id.clone(),
            collection,
            messages,
            Arc::new(HttpResourceApi),
            effects.clone(),
        )
    });

    let title = Signal::derive(move || {
        format!("{} ({})", collection.plural_title(), rows.with(Vec::len))
    });

    let add_button = actions.is_some().then(|| {
        let new_view = ResourcePaths::new(&store_id, collection).new_view();
        let effects = effects.clone();
        view! {
            <button class="button button--primary" on:click=move |_| effects.navigate(&new_view)>
                {icon("plus")}
                {collection.add_label()}
            </button>
        }
    });

    let delete_dialog = actions.clone().map(|actions| {
        let on_confirm = {
            let actions = actions.clone();
            Callback::new(move |_: ()| {
                let actions = actions.clone();
                spawn_local(async move {
                    actions.confirm_delete().await;
                });
            })
        };
        let on_close = {
            let actions = actions.clone();
            Callback::new(move |_: ()| actions.cancel_delete())
        };
        view! {
            <AlertModal
                open=actions.confirm_open
                loading=actions.loading
                on_confirm=on_confirm
                on_close=on_close
            />
        }
    });

    let api_section = actions.is_some().then(|| {
        view! {
            <div class="header">
                <Heading title="API".to_string() description=collection.api_description() />
            </div>
            <hr class="separator" />
            <ApiList store_id=store_id.clone() collection=collection />
        }
    });

    view! {
        {delete_dialog}
        <div class="page__content">
            <div class="header">
                <Heading title=title description=collection.list_description() />
                <div class="header__actions">{add_button}</div>
            </div>
            <hr class="separator" />

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || loading.get().then(|| view! { <div class="loading">"Carregando..."</div> })}

            <DataTable rows=rows columns=columns search_key=search_key actions=actions />

            {api_section}
        </div>
    }
}
