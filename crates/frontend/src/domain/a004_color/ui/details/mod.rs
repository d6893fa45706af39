mod view;

use contracts::domain::a004_color::aggregate::Color;
use contracts::domain::common::EntityCollection;
use leptos::prelude::*;

use crate::shared::components::RecordGate;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource_api::loaders::{use_entity_record, use_route_ids};
pub use view::ColorForm;

#[component]
pub fn ColorDetails() -> impl IntoView {
    let (store_id, color_id) = use_route_ids();
    let record = use_entity_record::<Color>(&store_id, EntityCollection::Colors, color_id);

    view! {
        <PageFrame page_id="a004_color--detail" category=PAGE_CAT_DETAIL>
            <RecordGate
                state=record
                render={move |initial_data: Option<Color>| {
                    view! { <ColorForm store_id=store_id.clone() initial_data=initial_data /> }.into_any()
                }}
            />
        </PageFrame>
    }
}
