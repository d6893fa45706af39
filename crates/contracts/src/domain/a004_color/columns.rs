use crate::domain::common::{ColumnDef, TableRow};
use crate::shared::format::format_date;

use super::aggregate::Color;

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name", "Nome"),
    ColumnDef::swatch("value", "Valor"),
    ColumnDef::text("createdAt", "Data de criação"),
];

pub const SEARCH_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq)]
pub struct ColorColumn {
    pub id: String,
    pub name: String,
    pub value: String,
    pub created_at: String,
}

impl From<&Color> for ColorColumn {
    fn from(record: &Color) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            value: record.value.clone(),
            created_at: format_date(&record.created_at),
        }
    }
}

impl TableRow for ColorColumn {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "value" => self.value.clone(),
            "createdAt" => self.created_at.clone(),
            _ => String::new(),
        }
    }
}
