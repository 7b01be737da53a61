use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::OrderService;
use crate::domain::order::{CreateItem, Order, OrderDetail};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub country_code: String,
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    /// Decimal amount as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
    /// VAT-inclusive total for the whole line
    pub line_total: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub total_price: String,
    pub total_vat: String,
    pub created_at: String,
    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_id: order.id,
            total_price: order.total_price.to_string(),
            total_vat: order.total_vat.to_string(),
            created_at: order.created_at.to_rfc3339(),
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    product_id: item.product_id,
                    name: item.name,
                    quantity: item.quantity,
                    unit_price: item.unit_price.to_string(),
                    line_total: item.line_total.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemDetailResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetailResponse {
    pub order_id: Uuid,
    pub total_price: String,
    pub total_vat: String,
    pub created_at: String,
    pub items: Vec<OrderItemDetailResponse>,
}

impl From<OrderDetail> for OrderDetailResponse {
    fn from(detail: OrderDetail) -> Self {
        OrderDetailResponse {
            order_id: detail.id,
            total_price: detail.total_price.to_string(),
            total_vat: detail.total_vat.to_string(),
            created_at: detail.created_at.to_rfc3339(),
            items: detail
                .items
                .into_iter()
                .map(|item| OrderItemDetailResponse {
                    product_id: item.product_id,
                    name: item.name,
                    description: item.description,
                    quantity: item.quantity,
                    unit_price: item.unit_price.to_string(),
                    line_total: item.line_total.to_string(),
                })
                .collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// PUT /api/v1/orders
///
/// Prices the requested items against the catalog and the destination
/// country's VAT rate, then persists the order. Validation failures leave
/// the store untouched.
#[utoipa::path(
    put,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Invalid body, empty items, non-positive quantity, or unsupported country code"),
        (status = 404, description = "Unknown product referenced by an order line"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.country_code.is_empty() {
        return Err(AppError::BadRequest("country code is required".to_string()));
    }

    let items: Vec<CreateItem> = body
        .items
        .into_iter()
        .map(|item| CreateItem {
            product_id: item.product_id,
            quantity: item.quantity,
        })
        .collect();

    let order = service.create_order(&body.country_code, items)?;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /api/v1/orders/{id}
///
/// Returns the order enriched with current catalog display data. Lines whose
/// product no longer exists in the catalog are omitted from the response.
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderDetailResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    match service.get_order(order_id)? {
        Some(detail) => Ok(HttpResponse::Ok().json(OrderDetailResponse::from(detail))),
        None => Err(AppError::NotFound("order not found".to_string())),
    }
}

/// GET /api/v1/orders
///
/// Returns all orders, in unspecified order. An empty store yields an empty
/// array, never an error.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "List of orders", body = [OrderDetailResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders()?;

    let response: Vec<OrderDetailResponse> =
        orders.into_iter().map(OrderDetailResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}
