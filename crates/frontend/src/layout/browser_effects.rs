use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::global_context::AppGlobalContext;
use super::toast_service::ToastService;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::form_controller::{FormEffects, Toast};

/// `FormEffects` wired to the router, the toast stack and the clipboard
pub struct BrowserEffects {
    context: AppGlobalContext,
    toasts: ToastService,
    navigate: Callback<String>,
}

impl FormEffects for BrowserEffects {
    fn refresh(&self) {
        self.context.refresh();
    }

    fn navigate(&self, path: &str) {
        self.navigate.run(path.to_string());
    }

    fn toast(&self, toast: Toast) {
        self.toasts.show(toast);
    }

    fn copy_text(&self, text: &str) {
        copy_to_clipboard(text);
    }
}

/// Build the effects for a form or table mounted under the router
pub fn use_form_effects() -> Arc<dyn FormEffects> {
    let context = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let navigate = use_navigate();

    Arc::new(BrowserEffects {
        context,
        toasts,
        navigate: Callback::new(move |path: String| {
            navigate(&path, NavigateOptions::default());
        }),
    })
}
