use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ProductService;
use crate::domain::errors::DomainError;
use crate::domain::product::PricedProduct;
use crate::errors::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CountryQuery {
    /// Destination country for VAT calculation, e.g. "IT"
    #[serde(default)]
    pub country_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub vat_rate: String,
    pub price_with_vat: String,
}

impl From<PricedProduct> for ProductResponse {
    fn from(product: PricedProduct) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            vat_rate: product.vat_rate.to_string(),
            price_with_vat: product.price_with_vat.to_string(),
        }
    }
}

// Catalog reads report every failure, including an unresolvable country
// code, as a generic 500 to the caller.
fn as_internal(e: DomainError) -> AppError {
    AppError::Internal(e.to_string())
}

/// GET /api/v1/products
///
/// Returns the catalog with the destination country's VAT applied to every
/// product.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(
        ("country_code" = String, Query, description = "Country code for VAT calculation"),
    ),
    responses(
        (status = 200, description = "List of priced products", body = [ProductResponse]),
        (status = 500, description = "Failed to retrieve products"),
    ),
    tag = "products"
)]
pub async fn list_products(
    service: web::Data<ProductService>,
    query: web::Query<CountryQuery>,
) -> Result<HttpResponse, AppError> {
    let products = service
        .list_products(&query.country_code)
        .map_err(as_internal)?;

    let response: Vec<ProductResponse> =
        products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/products/{id}
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("country_code" = String, Query, description = "Country code for VAT calculation"),
    ),
    responses(
        (status = 200, description = "Priced product", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Failed to retrieve product"),
    ),
    tag = "products"
)]
pub async fn get_product(
    service: web::Data<ProductService>,
    path: web::Path<String>,
    query: web::Query<CountryQuery>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    match service
        .get_product(&product_id, &query.country_code)
        .map_err(as_internal)?
    {
        Some(product) => Ok(HttpResponse::Ok().json(ProductResponse::from(product))),
        None => Err(AppError::NotFound("product not found".to_string())),
    }
}
