mod view;

use contracts::domain::a001_billboard::aggregate::Billboard;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::common::EntityCollection;
use leptos::prelude::*;

use crate::shared::components::RecordGate;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource_api::loaders::{use_entity_list, use_entity_record, use_route_ids};
pub use view::CategoryForm;

#[component]
pub fn CategoryDetails() -> impl IntoView {
    let (store_id, category_id) = use_route_ids();
    let record = use_entity_record::<Category>(&store_id, EntityCollection::Categories, category_id);
    let billboards = use_entity_list::<Billboard>(&store_id, EntityCollection::Billboards);
    let billboard_options = Signal::derive(move || {
        billboards.items.with(|items| {
            items
                .iter()
                .map(|b| (b.id.clone(), b.label.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="a002_category--detail" category=PAGE_CAT_DETAIL>
            <RecordGate
                state=record
                render={move |initial_data: Option<Category>| {
                    view! {
                        <CategoryForm
                            store_id=store_id.clone()
                            initial_data=initial_data
                            billboards=billboard_options
                        />
                    }
                    .into_any()
                }}
            />
        </PageFrame>
    }
}
