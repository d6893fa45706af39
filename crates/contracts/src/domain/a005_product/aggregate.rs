use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::{EntityCollection, EntityDraft, EntityRecord, FormMessages};
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRef {
    pub name: String,
    pub value: String,
}

/// Produto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub store_id: String,
    pub category_id: String,
    pub size_id: String,
    pub color_id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub size: Option<NamedRef>,
    #[serde(default)]
    pub color: Option<ColorRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Decimal columns arrive either as JSON numbers or as strings ("19.99")
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("Invalid price '{}': {}", text, e))),
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductImageDto {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub images: Vec<ProductImageDto>,
    pub price: f64,
    pub category_id: String,
    pub color_id: String,
    pub size_id: String,
    pub is_featured: bool,
    pub is_archived: bool,
}

impl ProductDto {
    pub fn add_image(&mut self, url: String) {
        if !url.trim().is_empty() && !self.images.iter().any(|i| i.url == url) {
            self.images.push(ProductImageDto { url });
        }
    }

    pub fn remove_image(&mut self, url: &str) {
        self.images.retain(|i| i.url != url);
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.images.iter().map(|i| i.url.clone()).collect()
    }
}

pub const NAME_RULES: ValidationRules =
    ValidationRules::required("O nome deve conter ao menos 1 caractere");
pub const IMAGES_RULES: ValidationRules =
    ValidationRules::items_min(1, "Você deve adicionar ao menos uma imagem");
pub const PRICE_RULES: ValidationRules = ValidationRules::number_min(1.0, "Defina um preço válido");
pub const CATEGORY_RULES: ValidationRules =
    ValidationRules::required("Selecione a categoria do produto");
pub const COLOR_RULES: ValidationRules = ValidationRules::required("Selecione a cor do produto");
pub const SIZE_RULES: ValidationRules = ValidationRules::required("Selecione o tamanho do produto");

impl EntityDraft for ProductDto {
    type Record = Product;

    const COLLECTION: EntityCollection = EntityCollection::Products;
    const MESSAGES: FormMessages = FormMessages {
        title_create: "Criar produto",
        title_edit: "Editar produto",
        description_create: "Adicionar novo produto",
        description_edit: "Editar um produto",
        created: "Produto criado",
        updated: "Produto atualizado.",
        action_create: "Criar produto",
        deleted: "Produto deletado",
        delete_failed: crate::domain::common::GENERIC_FAILURE,
        id_copied: "ID do produto copiado",
    };

    fn from_record(record: &Product) -> Self {
        Self {
            name: record.name.clone(),
            images: record
                .images
                .iter()
                .map(|i| ProductImageDto { url: i.url.clone() })
                .collect(),
            price: record.price,
            category_id: record.category_id.clone(),
            color_id: record.color_id.clone(),
            size_id: record.size_id.clone(),
            is_featured: record.is_featured,
            is_archived: record.is_archived,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name));
        errors.check("images", IMAGES_RULES.validate_items(self.images.len()));
        errors.check(
            "images",
            self.images
                .iter()
                .try_for_each(|i| IMAGES_RULES.validate_string(&i.url)),
        );
        errors.check("price", PRICE_RULES.validate_number(self.price));
        errors.check("categoryId", CATEGORY_RULES.validate_string(&self.category_id));
        errors.check("colorId", COLOR_RULES.validate_string(&self.color_id));
        errors.check("sizeId", SIZE_RULES.validate_string(&self.size_id));
        errors
    }
}
