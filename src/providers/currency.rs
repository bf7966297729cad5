use crate::core::currency::{Currency, CurrencyResolver};

/// Resolves a currency from its code alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeCurrencyResolver;

impl CurrencyResolver for CodeCurrencyResolver {
    type Currency = Currency;

    fn resolve(&self, code: &str) -> Currency {
        Currency {
            code: code.to_string(),
        }
    }
}
