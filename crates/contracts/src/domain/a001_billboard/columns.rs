use crate::domain::common::{ColumnDef, TableRow};
use crate::shared::format::format_date;

use super::aggregate::Billboard;

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("label", "Título"),
    ColumnDef::text("createdAt", "Data de criação"),
];

pub const SEARCH_KEY: &str = "label";

#[derive(Debug, Clone, PartialEq)]
pub struct BillboardColumn {
    pub id: String,
    pub label: String,
    pub created_at: String,
}

impl From<&Billboard> for BillboardColumn {
    fn from(record: &Billboard) -> Self {
        Self {
            id: record.id.clone(),
            label: record.label.clone(),
            created_at: format_date(&record.created_at),
        }
    }
}

impl TableRow for BillboardColumn {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "label" => self.label.clone(),
            "createdAt" => self.created_at.clone(),
            _ => String::new(),
        }
    }
}
