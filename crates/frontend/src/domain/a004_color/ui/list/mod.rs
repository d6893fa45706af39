use contracts::domain::a004_color::aggregate::{Color, ColorDto};
use contracts::domain::a004_color::columns::{ColorColumn, COLUMNS, SEARCH_KEY};
use contracts::domain::common::{EntityCollection, EntityDraft};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::components::EntityListClient;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_api::loaders::use_entity_list;

#[component]
pub fn ColorList() -> impl IntoView {
    let store_id = use_params_map().with_untracked(|p| p.get("store_id").unwrap_or_default());
    let list = use_entity_list::<Color>(&store_id, EntityCollection::Colors);
    let rows = Signal::derive(move || {
        list.items
            .with(|items| items.iter().map(ColorColumn::from).collect::<Vec<_>>())
    });

    view! {
        <PageFrame page_id="a004_color--list" category=PAGE_CAT_LIST>
            <EntityListClient
                store_id=store_id
                collection=EntityCollection::Colors
                rows=rows
                columns=COLUMNS
                search_key=SEARCH_KEY
                messages=ColorDto::MESSAGES
                loading=list.loading
                error=list.error
            />
        </PageFrame>
    }
}
