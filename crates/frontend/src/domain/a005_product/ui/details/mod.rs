mod view;

use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_size::aggregate::Size;
use contracts::domain::a004_color::aggregate::Color;
use contracts::domain::a005_product::aggregate::Product;
use contracts::domain::common::EntityCollection;
use leptos::prelude::*;

use crate::shared::components::RecordGate;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource_api::loaders::{use_entity_list, use_entity_record, use_route_ids};
pub use view::{ProductForm, ProductReferences};

#[component]
pub fn ProductDetails() -> impl IntoView {
    let (store_id, product_id) = use_route_ids();
    let record = use_entity_record::<Product>(&store_id, EntityCollection::Products, product_id);
    let categories = use_entity_list::<Category>(&store_id, EntityCollection::Categories);
    let sizes = use_entity_list::<Size>(&store_id, EntityCollection::Sizes);
    let colors = use_entity_list::<Color>(&store_id, EntityCollection::Colors);

    let references = ProductReferences {
        categories: Signal::derive(move || {
            categories
                .items
                .with(|items| items.iter().map(|c| (c.id.clone(), c.name.clone())).collect())
        }),
        sizes: Signal::derive(move || {
            sizes
                .items
                .with(|items| items.iter().map(|s| (s.id.clone(), s.name.clone())).collect())
        }),
        colors: Signal::derive(move || {
            colors
                .items
                .with(|items| items.iter().map(|c| (c.id.clone(), c.name.clone())).collect())
        }),
    };

    view! {
        <PageFrame page_id="a005_product--detail" category=PAGE_CAT_DETAIL>
            <RecordGate
                state=record
                render={move |initial_data: Option<Product>| {
                    view! {
                        <ProductForm
                            store_id=store_id.clone()
                            initial_data=initial_data
                            references=references
                        />
                    }
                    .into_any()
                }}
            />
        </PageFrame>
    }
}
