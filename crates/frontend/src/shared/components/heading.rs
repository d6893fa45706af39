use leptos::prelude::*;

/// Title and subtitle block at the top of list and details pages
#[component]
pub fn Heading(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="header__content">
            <h1 class="header__title">{move || title.get()}</h1>
            <p class="header__description">{description}</p>
        </div>
    }
}
