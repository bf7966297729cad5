use crate::core::cache::CountryCache;
use crate::core::country::{Country, KeyKind};
use crate::core::error::{CountryError, DataSourceError};
use crate::core::provider::CountryProvider;
use crate::core::source::{CountryDataSource, CountryRecord};
use crate::providers::util::build_country;
use std::sync::Arc;
use tracing::debug;

/// Validating, caching provider.
///
/// Code lookups are served from the cache when the code has been resolved before,
/// without re-validating it. On a miss the code must have its exact ISO 3166-1 shape
/// before the data source is queried. Every successful lookup, name lookups included,
/// caches the country under all three codes; names themselves are never cached.
/// Currencies are kept as the raw codes supplied by the data source.
pub struct StrictCountryProvider<S: CountryDataSource> {
    source: S,
    cache: CountryCache<String>,
}

impl<S: CountryDataSource> StrictCountryProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: CountryCache::new(),
        }
    }

    /// Number of countries cached so far.
    pub fn cached_countries(&self) -> usize {
        self.cache.len()
    }

    fn lookup(
        &self,
        kind: KeyKind,
        value: &str,
        query: impl FnOnce(&S, &str) -> Result<CountryRecord, DataSourceError>,
    ) -> Result<Arc<Country>, CountryError> {
        if kind != KeyKind::Name
            && let Some(country) = self.cache.get(kind, value)
        {
            return Ok(country);
        }

        if !kind.is_well_formed(value) {
            debug!("Rejecting invalid {}: {:?}", kind, value);
            return Err(CountryError::invalid_value(kind, value));
        }

        let record =
            query(&self.source, value).map_err(|e| CountryError::not_found_by(kind, value, e))?;
        Ok(self.create_country(record))
    }

    fn create_country(&self, record: CountryRecord) -> Arc<Country> {
        self.cache.put(build_country(record, |code| code))
    }
}

impl<S: CountryDataSource> CountryProvider for StrictCountryProvider<S> {
    type Output = Result<Arc<Country>, CountryError>;

    fn get_by_name(&self, name: &str) -> Self::Output {
        self.lookup(KeyKind::Name, name, |source, value| source.by_name(value))
    }

    fn get_by_alpha2(&self, alpha2: &str) -> Self::Output {
        self.lookup(KeyKind::Alpha2, alpha2, |source, value| source.by_alpha2(value))
    }

    fn get_by_alpha3(&self, alpha3: &str) -> Self::Output {
        self.lookup(KeyKind::Alpha3, alpha3, |source, value| source.by_alpha3(value))
    }

    fn get_by_numerical_code(&self, numerical_code: &str) -> Self::Output {
        self.lookup(KeyKind::Numeric, numerical_code, |source, value| {
            source.by_numeric(value)
        })
    }
}
