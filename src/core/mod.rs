//! Core lookup abstractions and domain types

pub mod cache;
pub mod config;
pub mod country;
pub mod currency;
pub mod error;
pub mod log;
pub mod provider;
pub mod source;

// Re-export main types for cleaner imports
pub use country::{Country, KeyKind};
pub use currency::{Currency, CurrencyResolver};
pub use error::{CountryError, DataSourceError};
pub use provider::CountryProvider;
pub use source::{CountryDataSource, CountryRecord};
