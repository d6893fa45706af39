use contracts::domain::common::{EntityCollection, ResourcePaths};
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::domain::a001_billboard::ui::details::BillboardDetails;
use crate::domain::a001_billboard::ui::list::BillboardList;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_size::ui::details::SizeDetails;
use crate::domain::a003_size::ui::list::SizeList;
use crate::domain::a004_color::ui::details::ColorDetails;
use crate::domain::a004_color::ui::list::ColorList;
use crate::domain::a005_product::ui::details::ProductDetails;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::layout::Shell;
use crate::system::pages::setup::SetupPage;

#[component]
fn StoreLayout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet />
        </Shell>
    }
}

/// `/:store_id` opens the first collection of the store
#[component]
fn StoreHome() -> impl IntoView {
    let store_id = use_params_map().with_untracked(|p| p.get("store_id").unwrap_or_default());
    let target = ResourcePaths::new(&store_id, EntityCollection::Billboards).list_view();

    view! { <Redirect path=target /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Página não encontrada"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=SetupPage />
                <ParentRoute path=path!("/:store_id") view=StoreLayout>
                    <Route path=path!("") view=StoreHome />
                    <Route path=path!("billboards") view=BillboardList />
                    <Route path=path!("billboards/:entity_id") view=BillboardDetails />
                    <Route path=path!("categories") view=CategoryList />
                    <Route path=path!("categories/:entity_id") view=CategoryDetails />
                    <Route path=path!("sizes") view=SizeList />
                    <Route path=path!("sizes/:entity_id") view=SizeDetails />
                    <Route path=path!("colors") view=ColorList />
                    <Route path=path!("colors/:entity_id") view=ColorDetails />
                    <Route path=path!("products") view=ProductList />
                    <Route path=path!("products/:entity_id") view=ProductDetails />
                    <Route path=path!("orders") view=OrderList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
