//! Store navigation: one entry per catalog collection.

use contracts::domain::common::{store_id_from_path, EntityCollection, ResourcePaths};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

const MENU_ITEMS: [EntityCollection; 6] = [
    EntityCollection::Billboards,
    EntityCollection::Categories,
    EntityCollection::Sizes,
    EntityCollection::Colors,
    EntityCollection::Products,
    EntityCollection::Orders,
];

/// True when `pathname` is the collection page or one of its forms
fn is_active(pathname: &str, list_view: &str) -> bool {
    pathname == list_view
        || pathname
            .strip_prefix(list_view)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let store_id = Memo::new(move |_| pathname.with(|path| store_id_from_path(path).map(str::to_string)));

    view! {
        <nav class="app-sidebar__content">
            {move || store_id.get().map(|store_id| {
                MENU_ITEMS
                    .into_iter()
                    .map(|collection| {
                        let href = ResourcePaths::new(&store_id, collection).list_view();
                        let href_for_active = href.clone();
                        view! {
                            <A href=href attr:class="app-sidebar__link">
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        pathname.with(|path| is_active(path, &href_for_active))
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(collection.segment())}
                                        <span>{collection.plural_title()}</span>
                                    </div>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_route() {
        assert!(is_active("/s1/products", "/s1/products"));
        assert!(is_active("/s1/products/new", "/s1/products"));
        assert!(!is_active("/s1/products-archive", "/s1/products"));
        assert!(!is_active("/s1/colors", "/s1/products"));
    }
}
