use std::sync::Arc;

use contracts::domain::a005_product::aggregate::{Product, ProductDto};
use leptos::prelude::*;

use crate::layout::browser_effects::use_form_effects;
use crate::shared::components::ui::{field_error_signal, Checkbox, ImageUpload, Input, Select};
use crate::shared::components::EntityForm;
use crate::shared::form_controller::EntityFormController;
use crate::shared::resource_api::HttpResourceApi;

/// `(id, name)` options of the product selects
#[derive(Clone, Copy)]
pub struct ProductReferences {
    pub categories: Signal<Vec<(String, String)>>,
    pub sizes: Signal<Vec<(String, String)>>,
    pub colors: Signal<Vec<(String, String)>>,
}

/// Price typed by the user; anything unparsable becomes NaN and fails validation
fn parse_price(text: &str) -> f64 {
    let text = text.trim().replace(',', ".");
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(f64::NAN)
}

fn price_text(price: f64) -> String {
    if price == 0.0 {
        String::new()
    } else {
        price.to_string()
    }
}

#[component]
pub fn ProductForm(
    store_id: String,
    initial_data: Option<Product>,
    references: ProductReferences,
) -> impl IntoView {
    let vm = EntityFormController::<ProductDto>::new(
        store_id,
        initial_data,
        Arc::new(HttpResourceApi),
        use_form_effects(),
    );
    let form = vm.form;
    let errors = vm.errors;
    let loading = vm.loading;

    // Kept apart from the draft so partial input like "19," survives re-render
    let price_input = RwSignal::new(form.with_untracked(|f| price_text(f.price)));

    let on_add_image = {
        let vm = vm.clone();
        Callback::new(move |url: String| vm.update(|f| f.add_image(url)))
    };
    let on_remove_image = {
        let vm = vm.clone();
        Callback::new(move |url: String| vm.update(|f| f.remove_image(&url)))
    };
    let on_name = {
        let vm = vm.clone();
        Callback::new(move |name: String| vm.update(|f| f.name = name))
    };
    let on_price = {
        let vm = vm.clone();
        Callback::new(move |text: String| {
            let price = parse_price(&text);
            price_input.set(text);
            vm.update(|f| f.price = price);
        })
    };
    let on_category = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.update(|f| f.category_id = id))
    };
    let on_size = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.update(|f| f.size_id = id))
    };
    let on_color = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.update(|f| f.color_id = id))
    };
    let on_featured = {
        let vm = vm.clone();
        Callback::new(move |checked: bool| vm.update(|f| f.is_featured = checked))
    };
    let on_archived = {
        let vm = vm.clone();
        Callback::new(move |checked: bool| vm.update(|f| f.is_archived = checked))
    };

    view! {
        <EntityForm controller=vm>
            <div class="form__group">
                <label class="form__label">"Imagens"</label>
                <ImageUpload
                    value=Signal::derive(move || form.with(ProductDto::image_urls))
                    on_add=on_add_image
                    on_remove=on_remove_image
                    error=field_error_signal(errors, "images")
                    disabled=loading
                />
            </div>
            <div class="form-grid">
                <Input
                    label="Nome"
                    placeholder="Nome do produto"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=on_name
                    error=field_error_signal(errors, "name")
                    disabled=loading
                />
                <Input
                    label="Preço"
                    placeholder="9,99"
                    input_type="text"
                    value=price_input
                    on_input=on_price
                    error=field_error_signal(errors, "price")
                    disabled=loading
                />
                <Select
                    label="Categoria"
                    placeholder="Selecione uma categoria"
                    value=Signal::derive(move || form.with(|f| f.category_id.clone()))
                    options=references.categories
                    on_change=on_category
                    error=field_error_signal(errors, "categoryId")
                    disabled=loading
                />
                <Select
                    label="Tamanho"
                    placeholder="Selecione um tamanho"
                    value=Signal::derive(move || form.with(|f| f.size_id.clone()))
                    options=references.sizes
                    on_change=on_size
                    error=field_error_signal(errors, "sizeId")
                    disabled=loading
                />
                <Select
                    label="Cor"
                    placeholder="Selecione uma cor"
                    value=Signal::derive(move || form.with(|f| f.color_id.clone()))
                    options=references.colors
                    on_change=on_color
                    error=field_error_signal(errors, "colorId")
                    disabled=loading
                />
                <Checkbox
                    label="Em destaque"
                    description="Este produto aparecerá na página inicial"
                    checked=Signal::derive(move || form.with(|f| f.is_featured))
                    on_change=on_featured
                    disabled=loading
                />
                <Checkbox
                    label="Arquivado"
                    description="Este produto não aparecerá em nenhum lugar da loja"
                    checked=Signal::derive(move || form.with(|f| f.is_archived))
                    on_change=on_archived
                    disabled=loading
                />
            </div>
        </EntityForm>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99"), 19.99);
        assert_eq!(parse_price(" 19,99 "), 19.99);
        assert_eq!(parse_price(""), 0.0);
        assert!(parse_price("abc").is_nan());
    }

    #[test]
    fn test_price_text() {
        assert_eq!(price_text(0.0), "");
        assert_eq!(price_text(19.99), "19.99");
    }
}
