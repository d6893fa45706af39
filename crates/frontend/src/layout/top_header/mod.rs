//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the current store and
//! a shortcut back to store selection.

use contracts::domain::common::store_id_from_path;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let pathname = use_location().pathname;
    let store_id = move || pathname.with(|path| store_id_from_path(path).map(str::to_string));

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Esconder navegação" } else { "Mostrar navegação" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Painel da loja"</span>
            </div>

            <div class="top-header__actions">
                {move || store_id().map(|id| view! {
                    <span class="top-header__store">{format!("Loja {}", id)}</span>
                })}
                <A href="/" attr:class="button button--secondary">"Trocar loja"</A>
            </div>
        </div>
    }
}
