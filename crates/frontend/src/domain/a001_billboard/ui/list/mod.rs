use contracts::domain::a001_billboard::aggregate::{Billboard, BillboardDto};
use contracts::domain::a001_billboard::columns::{BillboardColumn, COLUMNS, SEARCH_KEY};
use contracts::domain::common::{EntityCollection, EntityDraft};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::components::EntityListClient;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_api::loaders::use_entity_list;

#[component]
pub fn BillboardList() -> impl IntoView {
    let store_id = use_params_map().with_untracked(|p| p.get("store_id").unwrap_or_default());
    let list = use_entity_list::<Billboard>(&store_id, EntityCollection::Billboards);
    let rows = Signal::derive(move || {
        list.items
            .with(|items| items.iter().map(BillboardColumn::from).collect::<Vec<_>>())
    });

    view! {
        <PageFrame page_id="a001_billboard--list" category=PAGE_CAT_LIST>
            <EntityListClient
                store_id=store_id
                collection=EntityCollection::Billboards
                rows=rows
                columns=COLUMNS
                search_key=SEARCH_KEY
                messages=BillboardDto::MESSAGES
                loading=list.loading
                error=list.error
            />
        </PageFrame>
    }
}
