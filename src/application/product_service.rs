use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::money::round2;
use crate::domain::ports::{ProductRepository, VatRateRepository};
use crate::domain::product::{PricedProduct, Product};

/// Read-only catalog pricing: projects products with the VAT of a
/// destination country applied.
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    vat_rates: Arc<dyn VatRateRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>, vat_rates: Arc<dyn VatRateRepository>) -> Self {
        Self {
            products,
            vat_rates,
        }
    }

    pub fn list_products(&self, country_code: &str) -> Result<Vec<PricedProduct>, DomainError> {
        let rate = self.vat_rates.rate(country_code)?;
        let products = self.products.list()?;
        Ok(products
            .into_iter()
            .map(|p| with_vat(p, &rate))
            .collect())
    }

    pub fn get_product(
        &self,
        id: &str,
        country_code: &str,
    ) -> Result<Option<PricedProduct>, DomainError> {
        let Some(product) = self.products.find_by_id(id)? else {
            return Ok(None);
        };
        let rate = self.vat_rates.rate(country_code)?;
        Ok(Some(with_vat(product, &rate)))
    }
}

fn with_vat(product: Product, rate: &BigDecimal) -> PricedProduct {
    let vat = round2(&(&product.price * rate));
    PricedProduct {
        price_with_vat: round2(&(&product.price + &vat)),
        id: product.id,
        name: product.name,
        description: product.description,
        price: product.price,
        vat_rate: rate.clone(),
    }
}
