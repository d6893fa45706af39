use crate::domain::common::{yes_no, ColumnDef, TableRow};
use crate::shared::format::{format_date, format_money};

use super::aggregate::Order;

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("products", "Produtos"),
    ColumnDef::text("phone", "Fone"),
    ColumnDef::text("address", "Endereço"),
    ColumnDef::text("totalPrice", "Preço final"),
    ColumnDef::text("isPaid", "Pago"),
    ColumnDef::text("createdAt", "Data de criação"),
];

pub const SEARCH_KEY: &str = "products";

#[derive(Debug, Clone, PartialEq)]
pub struct OrderColumn {
    pub id: String,
    pub phone: String,
    pub address: String,
    pub is_paid: bool,
    pub total_price: String,
    pub products: String,
    pub created_at: String,
}

impl From<&Order> for OrderColumn {
    fn from(record: &Order) -> Self {
        Self {
            id: record.id.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            is_paid: record.is_paid,
            total_price: format_money(record.total_price()),
            products: record.product_names(),
            created_at: format_date(&record.created_at),
        }
    }
}

impl TableRow for OrderColumn {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "products" => self.products.clone(),
            "phone" => self.phone.clone(),
            "address" => self.address.clone(),
            "totalPrice" => self.total_price.clone(),
            "isPaid" => yes_no(self.is_paid),
            "createdAt" => self.created_at.clone(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_column_aggregates_items() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "o1",
            "storeId": "s1",
            "isPaid": true,
            "phone": "+55 11 99999-0000",
            "address": "Rua A, 10",
            "orderItems": [
                { "product": { "name": "Shirt", "price": "19.99" } },
                { "product": { "name": "Cap", "price": 1000 } }
            ],
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": "2024-03-15T14:02:26Z"
        }))
        .unwrap();

        let row = OrderColumn::from(&order);
        assert_eq!(row.products, "Shirt, Cap");
        assert_eq!(row.total_price, "R$ 1.019,99");
        assert_eq!(row.cell("isPaid"), "Sim");
        assert_eq!(row.cell("createdAt"), "15.03.2024");
    }
}
