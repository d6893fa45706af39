use leptos::prelude::*;

use super::field_error::FieldError;
use crate::shared::icons::icon;

/// Image list editor.
///
/// Files are hosted elsewhere; the form only keeps their URLs. Adding is
/// disabled once `max` images are present.
#[component]
pub fn ImageUpload(
    /// Current image URLs
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_add: Callback<String>,
    on_remove: Callback<String>,
    #[prop(optional)]
    max: Option<usize>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let draft_url = RwSignal::new(String::new());
    let full = move || max.is_some_and(|max| value.with(|urls| urls.len() >= max));

    let add = move || {
        let url = draft_url.get_untracked().trim().to_string();
        if url.is_empty() || full() {
            return;
        }
        on_add.run(url);
        draft_url.set(String::new());
    };

    view! {
        <div class="image-upload">
            <div class="image-upload__previews">
                <For
                    each=move || value.get()
                    key=|url| url.clone()
                    children=move |url: String| {
                        let url_for_remove = url.clone();
                        view! {
                            <div class="image-upload__item">
                                <button
                                    type="button"
                                    class="btn btn-danger image-upload__remove"
                                    disabled=move || disabled.get()
                                    on:click=move |_| on_remove.run(url_for_remove.clone())
                                >
                                    {icon("trash")}
                                </button>
                                <img class="image-upload__image" src=url alt="Imagem" />
                            </div>
                        }
                    }
                />
            </div>
            <div class="image-upload__controls">
                <input
                    class="form__input"
                    type="url"
                    placeholder="URL da imagem"
                    prop:value=move || draft_url.get()
                    disabled=move || disabled.get() || full()
                    on:input=move |ev| draft_url.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || disabled.get() || full()
                    on:click=move |_| add()
                >
                    {icon("image")}
                    "Enviar uma imagem"
                </button>
            </div>
            <FieldError error=error />
        </div>
    }
}
