use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::money::round2;
use crate::domain::order::{
    CreateItem, NewOrder, Order, OrderDetail, OrderItem, OrderItemDetail,
};
use crate::domain::ports::{OrderRepository, ProductRepository, VatRateRepository};

/// Orchestrates the order pricing and persistence workflow: validation,
/// catalog and VAT lookups, per-line rounding, total accumulation, and the
/// final write through the order repository.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
    vat_rates: Arc<dyn VatRateRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        vat_rates: Arc<dyn VatRateRepository>,
    ) -> Self {
        Self {
            orders,
            products,
            vat_rates,
        }
    }

    /// Prices and persists a new order.
    ///
    /// Unit prices are always taken from the catalog, never from the client.
    /// Each line's VAT and gross amounts are rounded to cents individually,
    /// and the order totals accumulate those rounded values; the totals can
    /// therefore differ by a few cents from rounding the exact aggregate.
    /// Nothing is written to the store unless every line validates.
    pub fn create_order(
        &self,
        country_code: &str,
        items: Vec<CreateItem>,
    ) -> Result<Order, DomainError> {
        if items.is_empty() {
            return Err(DomainError::InvalidItem(
                "order must contain at least one item".to_string(),
            ));
        }

        let rate = self.vat_rates.rate(country_code)?;

        let mut lines = Vec::with_capacity(items.len());
        let mut total_price = BigDecimal::zero();
        let mut total_vat = BigDecimal::zero();

        for item in &items {
            let product = self
                .products
                .find_by_id(&item.product_id)?
                .ok_or_else(|| DomainError::ProductNotFound(item.product_id.clone()))?;

            if item.quantity <= 0 {
                return Err(DomainError::InvalidItem(format!(
                    "quantity for product '{}' must be greater than zero",
                    item.product_id
                )));
            }
            if product.price <= BigDecimal::zero() {
                return Err(DomainError::InvalidItem(format!(
                    "product '{}' has a non-positive price",
                    item.product_id
                )));
            }

            let line_price = &product.price * BigDecimal::from(item.quantity);
            let line_vat = round2(&(&line_price * &rate));
            let line_gross = round2(&(&line_price + &line_vat));

            total_vat += &line_vat;
            total_price += &line_gross;

            lines.push(OrderItem {
                product_id: product.id,
                name: product.name,
                quantity: item.quantity,
                unit_price: product.price,
                line_total: line_gross,
            });
        }

        self.orders.save(NewOrder {
            items: lines,
            total_price: round2(&total_price),
            total_vat: round2(&total_vat),
        })
    }

    /// Returns the order as a display projection, or `None` if it does not
    /// exist.
    pub fn get_order(&self, id: Uuid) -> Result<Option<OrderDetail>, DomainError> {
        let Some(order) = self.orders.find_by_id(id)? else {
            return Ok(None);
        };
        Ok(Some(self.to_detail(order)?))
    }

    /// Returns all orders as display projections, in unspecified order.
    pub fn list_orders(&self) -> Result<Vec<OrderDetail>, DomainError> {
        self.orders
            .list()?
            .into_iter()
            .map(|order| self.to_detail(order))
            .collect()
    }

    /// Re-resolves each line's product for current display data, keeping the
    /// unit price and line total stored with the order so historical totals
    /// never change. A line whose product has since left the catalog is
    /// dropped from the projection; see the deleted-product test below.
    fn to_detail(&self, order: Order) -> Result<OrderDetail, DomainError> {
        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let Some(product) = self.products.find_by_id(&item.product_id)? else {
                continue;
            };
            items.push(OrderItemDetail {
                product_id: item.product_id,
                name: product.name,
                description: product.description,
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: item.line_total,
            });
        }
        Ok(OrderDetail {
            id: order.id,
            items,
            total_price: order.total_price,
            total_vat: order.total_vat,
            created_at: order.created_at,
        })
    }
}
