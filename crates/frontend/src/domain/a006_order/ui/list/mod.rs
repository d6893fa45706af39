use contracts::domain::a006_order::aggregate::Order;
use contracts::domain::a006_order::columns::{OrderColumn, COLUMNS, SEARCH_KEY};
use contracts::domain::common::EntityCollection;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::components::EntityListClient;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_api::loaders::use_entity_list;

/// Orders are created by the storefront checkout; the admin only lists them
#[component]
pub fn OrderList() -> impl IntoView {
    let store_id = use_params_map().with_untracked(|p| p.get("store_id").unwrap_or_default());
    let list = use_entity_list::<Order>(&store_id, EntityCollection::Orders);
    let rows = Signal::derive(move || {
        list.items
            .with(|items| items.iter().map(OrderColumn::from).collect::<Vec<_>>())
    });

    view! {
        <PageFrame page_id="a006_order--list" category=PAGE_CAT_LIST>
            <EntityListClient
                store_id=store_id
                collection=EntityCollection::Orders
                rows=rows
                columns=COLUMNS
                search_key=SEARCH_KEY
                loading=list.loading
                error=list.error
            />
        </PageFrame>
    }
}
