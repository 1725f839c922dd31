//! Order resource types.
//!
//! The only client-side business computation in the panel lives here: the
//! displayed order total. Everything else about an order is backend-owned.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub menu_item_id: i64,
    pub quantity: u32,
    /// Unit price as a decimal string on the wire.
    pub unit_price: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Backend order status reference entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatus {
    pub id: i64,
    /// Display name (French, e.g., "en cours de livraison").
    pub name: String,
}

/// An order as returned by the order listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub restaurant_id: i64,
    #[serde(default)]
    pub deliverer_id: Option<i64>,
    /// Money fields arrive as decimal strings; `Decimal` preserves them.
    pub subtotal: Decimal,
    pub delivery_costs: Decimal,
    pub service_charge: Decimal,
    pub global_discount: Decimal,
    /// Delivery address fields.
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "orderItems", default)]
    pub order_items: Vec<OrderItem>,
    pub status: OrderStatus,
}

impl Order {
    /// Displayed total: subtotal + delivery costs + service charge − discount.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal + self.delivery_costs + self.service_charge - self.global_discount
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(subtotal: &str, delivery: &str, service: &str, discount: &str) -> Order {
        serde_json::from_value(json!({
            "id": 1,
            "client_id": 2,
            "restaurant_id": 3,
            "subtotal": subtotal,
            "delivery_costs": delivery,
            "service_charge": service,
            "global_discount": discount,
            "status": {"id": 1, "name": "livrée"},
            "orderItems": []
        }))
        .unwrap()
    }

    #[test]
    fn test_order_total() {
        let order = order("10.00", "2.50", "1.00", "0.50");
        assert_eq!(order.total().to_string(), "13.00");
    }

    #[test]
    fn test_order_total_zero_discount() {
        let order = order("24.90", "0.00", "1.10", "0.00");
        assert_eq!(order.total().to_string(), "26.00");
    }
}
