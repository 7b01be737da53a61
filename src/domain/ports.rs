use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::DomainError;
use super::order::{NewOrder, Order};
use super::product::Product;

/// Persists and retrieves orders. `save` assigns the order a fresh unique
/// identifier and creation timestamp; each call creates a new record.
/// Implementations must be safe under concurrent saves and reads.
pub trait OrderRepository: Send + Sync + 'static {
    fn save(&self, order: NewOrder) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
    /// Returns all orders, in unspecified order.
    fn list(&self) -> Result<Vec<Order>, DomainError>;
}

/// Read-only product catalog. An unknown identifier yields `Ok(None)`, not
/// an error.
pub trait ProductRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError>;
    fn list(&self) -> Result<Vec<Product>, DomainError>;
}

/// Resolves a destination country to its flat VAT rate. Country codes are
/// matched case-insensitively; an unconfigured code fails with
/// `DomainError::RateNotFound`.
pub trait VatRateRepository: Send + Sync + 'static {
    fn rate(&self, country_code: &str) -> Result<BigDecimal, DomainError>;
}
