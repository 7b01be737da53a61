pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{OrderService, ProductService};
use infrastructure::memory::{InMemoryOrderRepository, InMemoryProductCatalog, InMemoryVatRates};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::list_orders,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::health::healthcheck,
    ),
    tags(
        (name = "orders", description = "Order pricing and persistence"),
        (name = "products", description = "Catalog with VAT-inclusive pricing"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Wire the services against the in-memory repositories: a demo catalog,
/// the static VAT table, and an empty order store.
pub fn default_services() -> (OrderService, ProductService) {
    let orders = Arc::new(InMemoryOrderRepository::new());
    let catalog = Arc::new(InMemoryProductCatalog::with_demo_catalog());
    let vat_rates = Arc::new(InMemoryVatRates::new());

    let order_service = OrderService::new(orders, catalog.clone(), vat_rates.clone());
    let product_service = ProductService::new(catalog, vat_rates);
    (order_service, product_service)
}

/// Register the HTTP routes. Kept separate from `build_server` so tests can
/// mount the same routes on an in-process test app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health::healthcheck))
        .service(
            web::scope("/api/v1")
                .route("/orders", web::put().to(handlers::orders::create_order))
                .route("/orders", web::get().to(handlers::orders::list_orders))
                .route("/orders/{id}", web::get().to(handlers::orders::get_order))
                .route("/products", web::get().to(handlers::products::list_products))
                .route(
                    "/products/{id}",
                    web::get().to(handlers::products::get_product),
                ),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    order_service: OrderService,
    product_service: ProductService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let order_service = web::Data::new(order_service);
    let product_service = web::Data::new(product_service);

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(order_service.clone())
            .app_data(product_service.clone())
            .wrap(Logger::default())
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
