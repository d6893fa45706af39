use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityCollection, EntityDraft, EntityRecord, FormMessages};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Cor (цвет товара, значение в hex)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Color {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorDto {
    pub name: String,
    pub value: String,
}

pub const NAME_RULES: ValidationRules =
    ValidationRules::required("O nome deve conter ao menos 1 caractere");
/// Shortest accepted hex code is "#RGB"
pub const VALUE_RULES: ValidationRules =
    ValidationRules::required("A cor deve ser um código hexadecimal válido (ex.: #FFF)")
        .with_min_length(4)
        .with_prefix("#");

impl EntityDraft for ColorDto {
    type Record = Color;

    const COLLECTION: EntityCollection = EntityCollection::Colors;
    const MESSAGES: FormMessages = FormMessages {
        title_create: "Criar cor",
        title_edit: "Editar cor",
        description_create: "Adicionar nova cor",
        description_edit: "Editar uma cor",
        created: "Cor criada",
        updated: "Cor atualizada.",
        action_create: "Criar cor",
        deleted: "Cor deletada",
        delete_failed: "Confira se você removeu todos os produtos desta cor.",
        id_copied: "ID da cor copiado",
    };

    fn from_record(record: &Color) -> Self {
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

    fn draft(value: &str) -> ColorDto {
        ColorDto {
            name: "Preto".into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_hex_value_accepted() {
        assert!(draft("#000").validate().is_empty());
        assert!(draft("#1a2b3c").validate().is_empty());
    }

    #[test]
    fn test_non_hex_value_rejected() {
        assert!(draft("").validate().get("value").is_some());
        assert!(draft("black").validate().get("value").is_some());
        assert!(draft("#00").validate().get("value").is_some());
    }
}
