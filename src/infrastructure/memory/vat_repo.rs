use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::ports::VatRateRepository;

/// Static country-to-VAT-rate table. Immutable after construction, so no
/// locking is needed.
pub struct InMemoryVatRates {
    rates: HashMap<String, BigDecimal>,
}

impl InMemoryVatRates {
    pub fn new() -> Self {
        let rates = [
            ("US", "0.00"),
            ("UK", "0.20"),
            ("DE", "0.19"),
            ("FR", "0.20"),
            ("IT", "0.22"),
        ]
        .into_iter()
        .map(|(code, rate)| {
            (
                code.to_string(),
                BigDecimal::from_str(rate).expect("configured rate is a valid decimal"),
            )
        })
        .collect();
        Self { rates }
    }
}

impl Default for InMemoryVatRates {
    fn default() -> Self {
        Self::new()
    }
}

impl VatRateRepository for InMemoryVatRates {
    fn rate(&self, country_code: &str) -> Result<BigDecimal, DomainError> {
        self.rates
            .get(&country_code.to_uppercase())
            .cloned()
            .ok_or_else(|| DomainError::RateNotFound(country_code.to_string()))
    }
}
