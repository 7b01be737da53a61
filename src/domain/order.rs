use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One line item requested by the client. Prices are never taken from the
/// request; the unit price is always resolved from the catalog.
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub product_id: String,
    pub quantity: i32,
}

/// A priced order line as persisted with its order. `name` and `unit_price`
/// are denormalized from the catalog at creation time; `line_total` is the
/// VAT-inclusive (gross) amount for the whole line, rounded to cents.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
}

/// A fully priced order ready for persistence. The repository assigns the
/// identifier and creation timestamp on save.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub total_price: BigDecimal,
    pub total_vat: BigDecimal,
}

/// A persisted order. Immutable after creation; `total_price` is the sum of
/// the rounded line gross amounts and `total_vat` the sum of the rounded
/// line VAT amounts, both rounded to two decimals.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_price: BigDecimal,
    pub total_vat: BigDecimal,
    pub created_at: DateTime<Utc>,
}

/// Read projection of an order line, re-enriched with the catalog's current
/// display data but carrying the unit price and line total stored with the
/// order.
#[derive(Debug, Clone)]
pub struct OrderItemDetail {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
}

/// Read projection of an order, computed on read and never stored.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub id: Uuid,
    pub items: Vec<OrderItemDetail>,
    pub total_price: BigDecimal,
    pub total_vat: BigDecimal,
    pub created_at: DateTime<Utc>,
}
