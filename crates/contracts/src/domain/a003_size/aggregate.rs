use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityCollection, EntityDraft, EntityRecord, FormMessages};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Tamanho (размер товара: "Pequeno" / "P")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Size {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeDto {
    pub name: String,
    pub value: String,
}

pub const NAME_RULES: ValidationRules =
    ValidationRules::required("O nome deve conter ao menos 1 caractere");
pub const VALUE_RULES: ValidationRules =
    ValidationRules::required("O tamanho deve conter ao menos 1 caractere");

impl EntityDraft for SizeDto {
    type Record = Size;

    const COLLECTION: EntityCollection = EntityCollection::Sizes;
    const MESSAGES: FormMessages = FormMessages {
        title_create: "Criar tamanho",
        title_edit: "Editar tamanho",
        description_create: "Adicionar novo tamanho",
        description_edit: "Editar um tamanho",
        created: "Tamanho criado",
        updated: "Tamanho atualizado.",
        action_create: "Criar tamanho",
        deleted: "Tamanho deletado",
        delete_failed: "Confira se você removeu todos os produtos deste tamanho.",
        id_copied: "ID do tamanho copiado",
    };

    fn from_record(record: &Size) -> Self {
        Self {
            name: record.name.clone(),
            value: record.value.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name));
        errors.check("value", VALUE_RULES.validate_string(&self.value));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_required() {
        let dto = SizeDto {
            name: "Pequeno".into(),
            value: " ".into(),
        };
        assert_eq!(
            dto.validate().get("value"),
            Some("O tamanho deve conter ao menos 1 caractere")
        );
    }

    #[test]
    fn test_valid_size() {
        let dto = SizeDto {
            name: "Pequeno".into(),
            value: "P".into(),
        };
        assert!(dto.validate().is_empty());
    }
}
