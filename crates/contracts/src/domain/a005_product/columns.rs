use crate::domain::common::{yes_no, ColumnDef, TableRow};
use crate::shared::format::{format_date, format_money};

use super::aggregate::Product;

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name", "Nome"),
    ColumnDef::text("isArchived", "Arquivado"),
    ColumnDef::text("isFeatured", "Em destaque"),
    ColumnDef::text("price", "Preço"),
    ColumnDef::text("category", "Categoria"),
    ColumnDef::text("size", "Tamanho"),
    ColumnDef::swatch("color", "Cor"),
    ColumnDef::text("createdAt", "Data de criação"),
];

pub const SEARCH_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductColumn {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub size: String,
    /// Hex value of the color
    pub color: String,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: String,
}

impl From<&Product> for ProductColumn {
    fn from(record: &Product) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            price: format_money(record.price),
            category: record.category.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            size: record.size.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
            color: record.color.as_ref().map(|c| c.value.clone()).unwrap_or_default(),
            is_featured: record.is_featured,
            is_archived: record.is_archived,
            created_at: format_date(&record.created_at),
        }
    }
}

impl TableRow for ProductColumn {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "isArchived" => yes_no(self.is_archived),
            "isFeatured" => yes_no(self.is_featured),
            "price" => self.price.clone(),
            "category" => self.category.clone(),
            "size" => self.size.clone(),
            "color" => self.color.clone(),
            "createdAt" => self.created_at.clone(),
            _ => String::new(),
        }
    }
}
