//! ISO 3166-1 country lookup by name, alpha-2, alpha-3 or numeric code.
//!
//! Two provider variants share the [`CountryProvider`] capability:
//! [`StrictCountryProvider`] validates keys, caches countries by code and reports
//! failures as [`CountryError`]; [`TolerantCountryProvider`] skips validation and
//! caching, resolves currencies through a [`CurrencyResolver`] and reports unknown keys
//! as `None`.

pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

pub use crate::core::{
    Country, CountryDataSource, CountryError, CountryProvider, CountryRecord, Currency,
    CurrencyResolver, DataSourceError, KeyKind,
};
pub use crate::providers::{
    CachingCurrencyResolver, CodeCurrencyResolver, StrictCountryProvider,
    TolerantCountryProvider,
};
pub use crate::store::MemoryDataSource;

use crate::core::config::{AppConfig, ProviderMode};
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Lookup { key: KeyKind, value: String },
    List,
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    mode: Option<ProviderMode>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if let Some(mode) = mode {
        config.mode = mode;
    }
    debug!("Loaded config: {config:#?}");

    let source = store::open_data_source(&config)?;

    match command {
        AppCommand::Lookup { key, value } => match config.mode {
            ProviderMode::Strict => {
                let provider = StrictCountryProvider::new(&source);
                cli::lookup::run_strict(&provider, key, &value)
            }
            ProviderMode::Tolerant => {
                let resolver = CachingCurrencyResolver::new(CodeCurrencyResolver);
                let provider = TolerantCountryProvider::new(&source, resolver);
                cli::lookup::run_tolerant(&provider, key, &value)
            }
        },
        AppCommand::List => cli::list::run(&source),
    }
}
