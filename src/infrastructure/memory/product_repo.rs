use std::collections::HashMap;
use std::str::FromStr;
use std::sync::RwLock;

use bigdecimal::BigDecimal;
use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::Product;

/// In-memory product catalog. The pricing services only ever read through
/// the `ProductRepository` trait; `insert`/`remove` exist for seeding and
/// for administrative changes outside the request path.
pub struct InMemoryProductCatalog {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// A catalog pre-loaded with the five demo products used by the tests
    /// and the local development setup.
    pub fn with_demo_catalog() -> Self {
        let catalog = Self::new();
        catalog.insert(demo_product("prod1", "Product 1", "10.00"));
        catalog.insert(demo_product("prod2", "Product 2", "20.00"));
        catalog.insert(demo_product("prod3", "Product 3", "20.00"));
        catalog.insert(demo_product("prod4", "Product 4", "20.00"));
        catalog.insert(demo_product("prod5", "Product 5", "20.00"));
        catalog
    }

    pub fn insert(&self, product: Product) {
        let mut products = self.products.write().unwrap_or_else(|e| e.into_inner());
        products.insert(product.id.clone(), product);
    }

    pub fn remove(&self, id: &str) {
        let mut products = self.products.write().unwrap_or_else(|e| e.into_inner());
        products.remove(id);
    }
}

impl Default for InMemoryProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_product(id: &str, name: &str, price: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Description of {}", name),
        price: BigDecimal::from_str(price).expect("demo price is a valid decimal"),
        created_at: Utc::now(),
    }
}

impl ProductRepository for InMemoryProductCatalog {
    fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let products = self
            .products
            .read()
            .map_err(|_| DomainError::Store("product catalog lock poisoned".to_string()))?;
        Ok(products.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let products = self
            .products
            .read()
            .map_err(|_| DomainError::Store("product catalog lock poisoned".to_string()))?;
        Ok(products.values().cloned().collect())
    }
}
