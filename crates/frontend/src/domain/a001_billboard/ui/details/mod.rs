mod view;

use contracts::domain::a001_billboard::aggregate::Billboard;
use contracts::domain::common::EntityCollection;
use leptos::prelude::*;

use crate::shared::components::RecordGate;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource_api::loaders::{use_entity_record, use_route_ids};
pub use view::BillboardForm;

/// `/:store_id/billboards/:entity_id`; the "new" id opens an empty form
#[component]
pub fn BillboardDetails() -> impl IntoView {
    let (store_id, billboard_id) = use_route_ids();
    let record = use_entity_record::<Billboard>(&store_id, EntityCollection::Billboards, billboard_id);

    view! {
        <PageFrame page_id="a001_billboard--detail" category=PAGE_CAT_DETAIL>
            <RecordGate
                state=record
                render={move |initial_data: Option<Billboard>| {
                    view! { <BillboardForm store_id=store_id.clone() initial_data=initial_data /> }
                        .into_any()
                }}
            />
        </PageFrame>
    }
}
