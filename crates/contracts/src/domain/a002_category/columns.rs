use crate::domain::common::{ColumnDef, TableRow};
use crate::shared::format::format_date;

use super::aggregate::Category;

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name", "Nome"),
    ColumnDef::text("billboardLabel", "Destaque"),
    ColumnDef::text("createdAt", "Data de criação"),
];

pub const SEARCH_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryColumn {
    pub id: String,
    pub name: String,
    pub billboard_label: String,
    pub created_at: String,
}

impl From<&Category> for CategoryColumn {
    fn from(record: &Category) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            billboard_label: record
                .billboard
                .as_ref()
                .map(|b| b.label.clone())
                .unwrap_or_default(),
            created_at: format_date(&record.created_at),
        }
    }
}

impl TableRow for CategoryColumn {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "billboardLabel" => self.billboard_label.clone(),
            "createdAt" => self.created_at.clone(),
            _ => String::new(),
        }
    }
}
