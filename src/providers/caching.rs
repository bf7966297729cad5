use crate::core::currency::CurrencyResolver;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

// Caching for CurrencyResolver
pub struct CachingCurrencyResolver<T: CurrencyResolver> {
    inner: T,
    cache: Mutex<HashMap<String, T::Currency>>,
}

impl<T: CurrencyResolver> CachingCurrencyResolver<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: CurrencyResolver> CurrencyResolver for CachingCurrencyResolver<T>
where
    T::Currency: Send,
{
    type Currency = T::Currency;

    fn resolve(&self, code: &str) -> Self::Currency {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(currency) = cache.get(code) {
            debug!("Cache hit for currency: {}", code);
            return currency.clone();
        }
        debug!("Cache miss for currency: {}", code);
        let currency = self.inner.resolve(code);
        cache.insert(code.to_string(), currency.clone());
        currency
    }
}
