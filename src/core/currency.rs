//! Currency resolution abstractions

use std::fmt::Display;

/// A currency resolved from its ISO 4217 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    pub code: String,
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Maps a currency code to a currency object.
///
/// Resolution is infallible for every code a country data source can emit.
pub trait CurrencyResolver: Send + Sync {
    type Currency: Clone;

    fn resolve(&self, code: &str) -> Self::Currency;
}

impl<T: CurrencyResolver + ?Sized> CurrencyResolver for &T {
    type Currency = T::Currency;

    fn resolve(&self, code: &str) -> Self::Currency {
        (**self).resolve(code)
    }
}
