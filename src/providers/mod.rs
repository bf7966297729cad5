pub mod caching;
pub mod currency;
pub mod strict;
pub mod tolerant;
pub mod util;

pub use caching::CachingCurrencyResolver;
pub use currency::CodeCurrencyResolver;
pub use strict::StrictCountryProvider;
pub use tolerant::TolerantCountryProvider;
