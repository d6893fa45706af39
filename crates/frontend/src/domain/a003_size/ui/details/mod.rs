mod view;

use contracts::domain::a003_size::aggregate::Size;
use contracts::domain::common::EntityCollection;
use leptos::prelude::*;

use crate::shared::components::RecordGate;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource_api::loaders::{use_entity_record, use_route_ids};
pub use view::SizeForm;

#[component]
pub fn SizeDetails() -> impl IntoView {
    let (store_id, size_id) = use_route_ids();
    let record = use_entity_record::<Size>(&store_id, EntityCollection::Sizes, size_id);

    view! {
        <PageFrame page_id="a003_size--detail" category=PAGE_CAT_DETAIL>
            <RecordGate
                state=record
                render={move |initial_data: Option<Size>| {
                    view! { <SizeForm store_id=store_id.clone() initial_data=initial_data /> }.into_any()
                }}
            />
        </PageFrame>
    }
}
