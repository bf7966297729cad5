use crate::core::country::{Country, KeyKind};
use crate::core::currency::CurrencyResolver;
use crate::core::error::DataSourceError;
use crate::core::provider::CountryProvider;
use crate::core::source::{CountryDataSource, CountryRecord};
use crate::providers::currency::CodeCurrencyResolver;
use crate::providers::util::build_country;
use tracing::debug;

/// Non-validating, non-caching provider.
///
/// Keys go to the data source as given and anything the data source cannot answer is
/// reported as `None`. Each returned country is freshly built with its currency codes
/// resolved through `R`.
pub struct TolerantCountryProvider<S: CountryDataSource, R: CurrencyResolver> {
    source: S,
    resolver: R,
}

impl<S: CountryDataSource, R: CurrencyResolver> TolerantCountryProvider<S, R> {
    pub fn new(source: S, resolver: R) -> Self {
        Self { source, resolver }
    }

    fn lookup(
        &self,
        kind: KeyKind,
        value: &str,
        query: impl FnOnce(&S, &str) -> Result<CountryRecord, DataSourceError>,
    ) -> Option<Country<R::Currency>> {
        match query(&self.source, value) {
            Ok(record) => Some(build_country(record, |code| self.resolver.resolve(&code))),
            Err(e) => {
                debug!("No country for {} {:?}: {}", kind, value, e);
                None
            }
        }
    }
}

impl<S: CountryDataSource> TolerantCountryProvider<S, CodeCurrencyResolver> {
    /// Creates a provider that resolves currencies by their code alone.
    pub fn with_codes(source: S) -> Self {
        Self::new(source, CodeCurrencyResolver)
    }
}

impl<S: CountryDataSource, R: CurrencyResolver> CountryProvider for TolerantCountryProvider<S, R> {
    type Output = Option<Country<R::Currency>>;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Currency;
    use crate::store::MemoryDataSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingResolver {
        call_count: AtomicUsize,
    }

    impl CurrencyResolver for CountingResolver {
        type Currency = Currency;

        fn resolve(&self, code: &str) -> Currency {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Currency {
                code: code.to_string(),
            }
        }
    }

    fn dataset() -> MemoryDataSource {
        MemoryDataSource::from_json(
            r#"[
                {"name": "Testland", "alpha2": "TL", "alpha3": "TST", "numeric": "001", "currency": ["USD", "EUR", "USD"]},
                {"name": "Cashless", "alpha2": "CL", "alpha3": "CSH", "numeric": "002", "currency": []}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_currencies_resolved_per_occurrence_in_order() {
        let resolver = CountingResolver {
            call_count: AtomicUsize::new(0),
        };
        let provider = TolerantCountryProvider::new(dataset(), &resolver);

        let country = provider.get_by_alpha2("TL").unwrap();
        let codes: Vec<_> = country.currencies().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["USD", "EUR", "USD"]);
        assert_eq!(resolver.call_count.load(Ordering::SeqCst), 3);

        let cashless = provider.get_by_numerical_code("002").unwrap();
        assert!(cashless.currencies().is_empty());
        assert_eq!(resolver.call_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_lookups_are_not_cached() {
        let resolver = CountingResolver {
            call_count: AtomicUsize::new(0),
        };
        let provider = TolerantCountryProvider::new(dataset(), &resolver);

        let first = provider.get_by_alpha3("TST").unwrap();
        let second = provider.get_by_alpha3("TST").unwrap();

        assert!(first.is(&second));
        // Each lookup resolves its currencies again
        assert_eq!(resolver.call_count.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_malformed_and_unknown_keys_are_absent() {
        let provider = TolerantCountryProvider::with_codes(dataset());

        assert!(provider.get_by_alpha2("tl").is_none());
        assert!(provider.get_by_alpha2("ZZ").is_none());
        assert!(provider.get_by_alpha3("").is_none());
        assert!(provider.get_by_numerical_code("1").is_none());
        assert!(provider.get_by_name("testland").is_none());
        assert!(provider.get_by_name("Testland").is_some());
    }
}
