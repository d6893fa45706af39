use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityCollection, EntityDraft, EntityRecord, FormMessages};
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Destaque (баннер витрины магазина)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: String,
    pub store_id: String,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Billboard {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик формы destaque; тело POST/PATCH запросов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardDto {
    pub label: String,
    pub image_url: String,
}

pub const LABEL_RULES: ValidationRules =
    ValidationRules::required("O nome deve conter ao menos 1 caractere");
pub const IMAGE_RULES: ValidationRules =
    ValidationRules::required("Você deve adicionar ao menos uma imagem");

impl EntityDraft for BillboardDto {
    type Record = Billboard;

    const COLLECTION: EntityCollection = EntityCollection::Billboards;
    const MESSAGES: FormMessages = FormMessages {
        title_create: "Criar destaque",
        title_edit: "Editar destaque",
        description_create: "Adicionar novo destaque",
        description_edit: "Editar um destaque",
        created: "Destaque criado",
        updated: "Destaque atualizado.",
        action_create: "Criar destaque",
        deleted: "Destaque deletado",
        delete_failed: "Confira se você removeu todas as categorias deste destaque.",
        id_copied: "ID do destaque copiado",
    };

    fn from_record(record: &Billboard) -> Self {
        Self {
            label: record.label.clone(),
            image_url: record.image_url.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("label", LABEL_RULES.validate_string(&self.label));
        errors.check("imageUrl", IMAGE_RULES.validate_string(&self.image_url));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_reports_both_fields() {
        let errors = BillboardDto::default().validate();
        assert_eq!(errors.get("label"), Some("O nome deve conter ao menos 1 caractere"));
        assert_eq!(errors.get("imageUrl"), Some("Você deve adicionar ao menos uma imagem"));
    }

    #[test]
    fn test_payload_uses_camel_case() {
        let dto = BillboardDto {
            label: "Verão".into(),
            image_url: "https://cdn/x.png".into(),
        };
        assert!(dto.validate().is_empty());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({ "label": "Verão", "imageUrl": "https://cdn/x.png" })
        );
    }

    #[test]
    fn test_record_deserializes_backend_json() {
        let record: Billboard = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "storeId": "s1",
            "label": "Verão",
            "imageUrl": "https://cdn/x.png",
            "createdAt": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-15T14:02:26.123Z"
        }))
        .unwrap();
        assert_eq!(record.id(), "b1");
        assert_eq!(BillboardDto::from_record(&record).label, "Verão");
    }
}
