use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a005_product::aggregate::deserialize_price;
use crate::domain::common::EntityRecord;

/// Товар в позиции заказа (только поля, нужные для списка)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: OrderProduct,
}

/// Pedido. Создаётся витриной магазина; в админке только просмотр.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub store_id: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Order {
    pub fn total_price(&self) -> f64 {
        self.order_items.iter().map(|item| item.product.price).sum()
    }

    pub fn product_names(&self) -> String {
        self.order_items
            .iter()
            .map(|item| item.product.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
