use super::ui;
use crate::core::{Country, CountryDataSource, CountryProvider, KeyKind};
use crate::providers::StrictCountryProvider;
use anyhow::Result;
use comfy_table::Cell;
use std::fmt::Display;
use tracing::{debug, info};

/// Dispatches a lookup to the provider operation for `key`.
pub fn query<P: CountryProvider>(provider: &P, key: KeyKind, value: &str) -> P::Output {
    match key {
        KeyKind::Name => provider.get_by_name(value),
        KeyKind::Alpha2 => provider.get_by_alpha2(value),
        KeyKind::Alpha3 => provider.get_by_alpha3(value),
        KeyKind::Numeric => provider.get_by_numerical_code(value),
    }
}

impl<C: Display> Country<C> {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Value")]);
        table.add_row(vec![Cell::new("Name"), Cell::new(self.name())]);
        table.add_row(vec![Cell::new("Alpha-2"), Cell::new(self.alpha2())]);
        table.add_row(vec![Cell::new("Alpha-3"), Cell::new(self.alpha3())]);
        table.add_row(vec![Cell::new("Numeric"), Cell::new(self.numeric_code())]);
        table.add_row(vec![
            Cell::new("Currencies"),
            ui::currencies_cell(self.currencies()),
        ]);

        format!(
            "Country: {}\n\n{}",
            ui::style_text(self.name(), ui::StyleType::Title),
            table
        )
    }
}

/// Looks a country up through a strict provider; invalid or unknown keys are errors.
pub fn run_strict<S: CountryDataSource>(
    provider: &StrictCountryProvider<S>,
    key: KeyKind,
    value: &str,
) -> Result<()> {
    info!("Looking up country by {}: {}", key, value);
    let country = query(provider, key, value)?;
    println!("{}", country.display_as_table());
    Ok(())
}

/// Looks a country up through a provider that reports absence instead of failing.
pub fn run_tolerant<P, C>(provider: &P, key: KeyKind, value: &str) -> Result<()>
where
    P: CountryProvider<Output = Option<Country<C>>>,
    C: Display,
{
    info!("Looking up country by {}: {}", key, value);
    match query(provider, key, value) {
        Some(country) => println!("{}", country.display_as_table()),
        None => {
            debug!("Lookup by {} {:?} returned nothing", key, value);
            println!(
                "{}",
                ui::style_text("No country found", ui::StyleType::Subtle)
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CountryError;
    use crate::providers::TolerantCountryProvider;
    use crate::store::MemoryDataSource;

    #[test]
    fn test_query_dispatches_by_key() {
        let source = MemoryDataSource::bundled().unwrap();
        let provider = StrictCountryProvider::new(&source);

        let by_name = query(&provider, KeyKind::Name, "Czechia").unwrap();
        let by_alpha2 = query(&provider, KeyKind::Alpha2, "CZ").unwrap();
        let by_alpha3 = query(&provider, KeyKind::Alpha3, "CZE").unwrap();
        let by_numeric = query(&provider, KeyKind::Numeric, "203").unwrap();

        assert!(by_name.is(&by_alpha2));
        assert!(by_alpha3.is(&by_numeric));
        assert!(matches!(
            query(&provider, KeyKind::Numeric, "CZE"),
            Err(CountryError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_display_as_table() {
        let source = MemoryDataSource::bundled().unwrap();
        let provider = TolerantCountryProvider::with_codes(&source);

        let output = provider.get_by_alpha2("PA").unwrap().display_as_table();
        assert!(output.contains("Panama"));
        assert!(output.contains("PAN"));
        assert!(output.contains("591"));
        assert!(output.contains("PAB, USD"));
    }

    #[test]
    fn test_run_reports_strict_errors_only() {
        let source = MemoryDataSource::bundled().unwrap();

        let strict = StrictCountryProvider::new(&source);
        assert!(run_strict(&strict, KeyKind::Alpha2, "SK").is_ok());
        let err = run_strict(&strict, KeyKind::Alpha2, "XX").unwrap_err();
        assert_eq!(err.to_string(), r#"Country with alpha-2 "XX" not found."#);

        let tolerant = TolerantCountryProvider::with_codes(&source);
        assert!(run_tolerant(&tolerant, KeyKind::Alpha2, "XX").is_ok());
    }
}
