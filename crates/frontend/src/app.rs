use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::Toaster;
use crate::layout::{StoreModal, ToastService};
use crate::routes::routes::AppRoutes;
use crate::shared::config::client_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = client_config();

    // Data version used by list loaders to refetch after mutations.
    provide_context(AppGlobalContext::new());

    // Store selection dialog of the setup page.
    provide_context(StoreModal::new());

    provide_context(ToastService::new(config.ui.toast_limit, config.ui.toast_timeout_ms));

    view! {
        <ConfigProvider>
            <AppRoutes />
            <Toaster />
        </ConfigProvider>
    }
}
