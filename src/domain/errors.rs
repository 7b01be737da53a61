use thiserror::Error;

/// Domain-level error taxonomy shared by the services and repositories.
///
/// Absence on the read path ("no such order/product") is not an error; it is
/// signalled with `Option::None` by the repository contracts.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid item in order: {0}")]
    InvalidItem(String),
    #[error("no VAT rate configured for country '{0}'")]
    RateNotFound(String),
    #[error("product '{0}' not found")]
    ProductNotFound(String),
    #[error("store failure: {0}")]
    Store(String),
}
