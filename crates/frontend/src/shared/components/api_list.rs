use contracts::domain::common::{api_reference, ApiEndpoint, EndpointVariant, EntityCollection};
use leptos::prelude::*;

use crate::layout::browser_effects::use_form_effects;
use crate::shared::api_utils::api_base;
use crate::shared::form_controller::Toast;
use crate::shared::icons::icon;

/// Endpoints of a collection with copy buttons
#[component]
pub fn ApiList(#[prop(into)] store_id: String, collection: EntityCollection) -> impl IntoView {
    let endpoints = api_reference(&api_base(), &store_id, collection);
    let effects = use_form_effects();

    view! {
        <div class="api-list">
            {endpoints
                .into_iter()
                .map(|endpoint| {
                    let effects = effects.clone();
                    view! { <ApiAlert endpoint=endpoint on_copy=Callback::new(move |url: String| {
                        effects.copy_text(&url);
                        effects.toast(Toast::success("Rota da API copiada"));
                    }) /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ApiAlert(endpoint: ApiEndpoint, on_copy: Callback<String>) -> impl IntoView {
    let badge_class = match endpoint.variant {
        EndpointVariant::Public => "badge badge--secondary",
        EndpointVariant::Admin => "badge badge--danger",
    };
    let url = endpoint.url.clone();

    view! {
        <div class="api-alert">
            <div class="api-alert__title">
                {icon("server")}
                <span>{endpoint.method}</span>
                <span class=badge_class>{endpoint.variant.label()}</span>
            </div>
            <div class="api-alert__body">
                <code class="api-alert__url">{endpoint.url}</code>
                <button
                    type="button"
                    class="btn btn-secondary"
                    title="Copiar"
                    on:click=move |_| on_copy.run(url.clone())
                >
                    {icon("copy")}
                </button>
            </div>
        </div>
    }
}
