//! Process-local, in-memory repository implementations. State lives in
//! `RwLock`-guarded maps behind the repository traits and is lost on
//! restart; a durable backend can be substituted without touching the
//! services.

mod order_repo;
mod product_repo;
mod vat_repo;

pub use order_repo::InMemoryOrderRepository;
pub use product_repo::InMemoryProductCatalog;
pub use vat_repo::InMemoryVatRates;
