use contracts::domain::a003_size::aggregate::{Size, SizeDto};
use contracts::domain::a003_size::columns::{SizeColumn, COLUMNS, SEARCH_KEY};
use contracts::domain::common::{EntityCollection, EntityDraft};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::components::EntityListClient;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_api::loaders::use_entity_list;

#[component]
pub fn SizeList() -> impl IntoView {
    let store_id = use_params_map().with_untracked(|p| p.get("store_id").unwrap_or_default());
    let list = use_entity_list::<Size>(&store_id, EntityCollection::Sizes);
    let rows = Signal::derive(move || {
        list.items
            .with(|items| items.iter().map(SizeColumn::from).collect::<Vec<_>>())
    });

    view! {
        <PageFrame page_id="a003_size--list" category=PAGE_CAT_LIST>
            <EntityListClient
                store_id=store_id
                collection=EntityCollection::Sizes
                rows=rows
                columns=COLUMNS
                search_key=SEARCH_KEY
                messages=SizeDto::MESSAGES
                loading=list.loading
                error=list.error
            />
        </PageFrame>
    }
}
