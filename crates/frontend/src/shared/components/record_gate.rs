use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

use crate::shared::resource_api::loaders::RecordState;

/// Waits for the edit-page record and hands it to `render` once settled.
///
/// A missing record (create mode or unknown id) renders with `None`.
#[component]
pub fn RecordGate<R, F>(state: RecordState<R>, render: F) -> impl IntoView
where
    R: EntityRecord,
    F: Fn(Option<R>) -> AnyView + Send + Sync + 'static,
{
    view! {
        {move || {
            if let Some(e) = state.error.get() {
                return view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                }
                .into_any();
            }
            if !state.loaded.get() {
                return view! { <div class="loading">"Carregando..."</div> }.into_any();
            }
            render(state.record.get_untracked())
        }}
    }
}
