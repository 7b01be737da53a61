use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::OrderRepository;

/// In-memory order store: a `RwLock`-guarded map keyed by order id.
/// Identifier and timestamp assignment happen inside the write lock, so
/// concurrent saves can never hand out the same id or interleave on the map.
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::Store("order store lock poisoned".to_string()))?;

        let order = Order {
            id: Uuid::new_v4(),
            items: order.items,
            total_price: order.total_price,
            total_vat: order.total_vat,
            created_at: Utc::now(),
        };
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::Store("order store lock poisoned".to_string()))?;
        Ok(orders.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::Store("order store lock poisoned".to_string()))?;
        Ok(orders.values().cloned().collect())
    }
}
