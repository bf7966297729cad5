use crate::core::country::{Country, KeyKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

struct CacheMaps<C> {
    alpha2: HashMap<String, Arc<Country<C>>>,
    alpha3: HashMap<String, Arc<Country<C>>>,
    numeric: HashMap<String, Arc<Country<C>>>,
}

impl<C> CacheMaps<C> {
    fn index(&self, kind: KeyKind) -> Option<&HashMap<String, Arc<Country<C>>>> {
        match kind {
            KeyKind::Alpha2 => Some(&self.alpha2),
            KeyKind::Alpha3 => Some(&self.alpha3),
            KeyKind::Numeric => Some(&self.numeric),
            KeyKind::Name => None,
        }
    }
}

/// Country cache indexed by alpha-2, alpha-3 and numeric code.
///
/// All three indexes live behind one lock so a country is always visible under every
/// code or under none. Names are never cached. Entries are kept for the lifetime of
/// the cache.
pub struct CountryCache<C> {
    inner: Mutex<CacheMaps<C>>,
}

impl<C> CountryCache<C> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CacheMaps {
                alpha2: HashMap::new(),
                alpha3: HashMap::new(),
                numeric: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheMaps<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, kind: KeyKind, key: &str) -> Option<Arc<Country<C>>> {
        let cache = self.lock();
        let value = cache.index(kind).and_then(|index| index.get(key)).cloned();
        if value.is_some() {
            debug!("Cache HIT for {}: {}", kind, key);
        } else {
            debug!("Cache MISS for {}: {}", kind, key);
        }
        value
    }

    /// Caches `country` under all three codes unless the same country is already
    /// cached, and returns the cached instance.
    ///
    /// A cached entry sharing only some of the codes is replaced, so every code of
    /// `country` resolves to it afterwards.
    pub fn put(&self, country: Country<C>) -> Arc<Country<C>> {
        let mut cache = self.lock();
        let existing = cache
            .alpha2
            .get(country.alpha2())
            .or_else(|| cache.alpha3.get(country.alpha3()))
            .or_else(|| cache.numeric.get(country.numeric_code()))
            .cloned();
        if let Some(existing) = existing {
            if existing.is(&country) {
                debug!("Cache already holds {}", country.alpha2());
                return existing;
            }
            debug!(
                "Cache entry {} conflicts with {}/{}/{}, replacing",
                existing.alpha2(),
                country.alpha2(),
                country.alpha3(),
                country.numeric_code()
            );
        }

        debug!("Cache PUT for {}", country.alpha2());
        let country = Arc::new(country);
        cache
            .alpha2
            .insert(country.alpha2().to_string(), Arc::clone(&country));
        cache
            .alpha3
            .insert(country.alpha3().to_string(), Arc::clone(&country));
        cache
            .numeric
            .insert(country.numeric_code().to_string(), Arc::clone(&country));
        country
    }

    /// Number of cached countries.
    pub fn len(&self) -> usize {
        self.lock().alpha2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C> Default for CountryCache<C> {
    fn default() -> Self {
        Self::new()
    }
}
