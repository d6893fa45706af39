use serde::{de::DeserializeOwned, Serialize};

use super::collection::EntityCollection;
use crate::shared::validation::FieldErrors;

/// Generic failure text for create/update and for deletes without dependents
pub const GENERIC_FAILURE: &str = "Ocorreu um erro";

/// Submit label of every form in edit mode
pub const SAVE_CHANGES: &str = "Salvar alterações";

/// Трейт для записей, принадлежащих бэкенду
pub trait EntityRecord:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// ID записи в виде строки
    fn id(&self) -> &str;
}

/// Трейт для черновиков форм (клиентская копия полей сущности)
///
/// A draft is the JSON body of create and update requests.
pub trait EntityDraft:
    Clone + std::fmt::Debug + Default + PartialEq + Serialize + Send + Sync + 'static
{
    type Record: EntityRecord;

    const COLLECTION: EntityCollection;
    const MESSAGES: FormMessages;

    /// Initialize the draft from an existing record (edit mode)
    fn from_record(record: &Self::Record) -> Self;

    /// Check every field; an empty result means the draft may be submitted
    fn validate(&self) -> FieldErrors;
}

/// Create or edit, decided by the presence of an initial record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// UI copy of one entity form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    pub title_create: &'static str,
    pub title_edit: &'static str,
    pub description_create: &'static str,
    pub description_edit: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub action_create: &'static str,
    pub deleted: &'static str,
    /// Shown for any failed delete; hints at dependents where they exist
    pub delete_failed: &'static str,
    pub id_copied: &'static str,
}

impl FormMessages {
    pub const fn title(&self, mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => self.title_create,
            FormMode::Edit => self.title_edit,
        }
    }

    pub const fn description(&self, mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => self.description_create,
            FormMode::Edit => self.description_edit,
        }
    }

    pub const fn action(&self, mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => self.action_create,
            FormMode::Edit => SAVE_CHANGES,
        }
    }

    /// Success toast after a create or update
    pub const fn saved(&self, mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => self.created,
            FormMode::Edit => self.updated,
        }
    }
}
