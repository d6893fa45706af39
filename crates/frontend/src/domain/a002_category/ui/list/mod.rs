use contracts::domain::a002_category::aggregate::{Category, CategoryDto};
use contracts::domain::a002_category::columns::{CategoryColumn, COLUMNS, SEARCH_KEY};
use contracts::domain::common::{EntityCollection, EntityDraft};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::components::EntityListClient;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_api::loaders::use_entity_list;

#[component]
pub fn CategoryList() -> impl IntoView {
    let store_id = use_params_map().with_untracked(|p| p.get("store_id").unwrap_or_default());
    let list = use_entity_list::<Category>(&store_id, EntityCollection::Categories);
    let rows = Signal::derive(move || {
        list.items
            .with(|items| items.iter().map(CategoryColumn::from).collect::<Vec<_>>())
    });

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <EntityListClient
                store_id=store_id
                collection=EntityCollection::Categories
                rows=rows
                columns=COLUMNS
                search_key=SEARCH_KEY
                messages=CategoryDto::MESSAGES
                loading=list.loading
                error=list.error
            />
        </PageFrame>
    }
}
