use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityCollection, EntityDraft, EntityRecord, FormMessages};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Destaque, к которому привязана категория (только для отображения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillboardRef {
    pub label: String,
}

/// Categoria товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub store_id: String,
    pub billboard_id: String,
    pub name: String,
    #[serde(default)]
    pub billboard: Option<BillboardRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub billboard_id: String,
}

pub const NAME_RULES: ValidationRules =
    ValidationRules::required("O nome deve conter ao menos 1 caractere");
pub const BILLBOARD_RULES: ValidationRules =
    ValidationRules::required("Você deve selecionar um destaque");

impl EntityDraft for CategoryDto {
    type Record = Category;

    const COLLECTION: EntityCollection = EntityCollection::Categories;
    const MESSAGES: FormMessages = FormMessages {
        title_create: "Criar categoria",
        title_edit: "Editar categoria",
        description_create: "Adicionar nova categoria",
        description_edit: "Editar uma categoria",
        created: "Categoria criada",
        updated: "Categoria atualizada.",
        action_create: "Criar categoria",
        deleted: "Categoria deletada",
        delete_failed: "Confira se você removeu todos os produtos desta categoria.",
        id_copied: "ID da categoria copiado",
    };

    fn from_record(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            billboard_id: record.billboard_id.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name));
        errors.check("billboardId", BILLBOARD_RULES.validate_string(&self.billboard_id));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billboard_selection_required() {
        let dto = CategoryDto {
            name: "Camisetas".into(),
            billboard_id: String::new(),
        };
        let errors = dto.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("billboardId"), Some("Você deve selecionar um destaque"));
    }

    #[test]
    fn test_record_without_relation() {
        let record: Category = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "storeId": "s1",
            "billboardId": "b1",
            "name": "Camisetas",
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": "2024-03-15T14:02:26Z"
        }))
        .unwrap();
        assert!(record.billboard.is_none());
        assert_eq!(CategoryDto::from_record(&record).billboard_id, "b1");
    }
}
