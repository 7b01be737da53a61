use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// A catalog product. `price` is the net (VAT-exclusive) base price. Owned
/// by the catalog; read-only to the pricing services.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

/// A product projected with the VAT rate of a destination country applied.
#[derive(Debug, Clone)]
pub struct PricedProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub vat_rate: BigDecimal,
    pub price_with_vat: BigDecimal,
}
