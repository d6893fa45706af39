use crate::domain::common::{ColumnDef, TableRow};
use crate::shared::format::format_date;

use super::aggregate::Size;

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name", "Nome"),
    ColumnDef::text("value", "Valor"),
    ColumnDef::text("createdAt", "Data de criação"),
];

pub const SEARCH_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq)]
pub struct SizeColumn {
    pub id: String,
    pub name: String,
    pub value: String,
    pub created_at: String,
}

impl From<&Size> for SizeColumn {
    fn from(record: &Size) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            value: record.value.clone(),
            created_at: format_date(&record.created_at),
        }
    }
}

impl TableRow for SizeColumn {
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
