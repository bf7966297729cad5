//! Lookup error types

use crate::core::country::KeyKind;

/// Signal raised by a [`CountryDataSource`](crate::core::CountryDataSource) when it has
/// no record for a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
    #[error("No country record for {key} \"{value}\"")]
    NotFound { key: KeyKind, value: String },
}

/// Failure of a strict lookup.
///
/// Neither variant is retryable: the reference data is static, so the same key fails
/// the same way every time.
#[derive(Debug, thiserror::Error)]
pub enum CountryError {
    #[error("Invalid value \"{value}\" for key \"{key}\".")]
    InvalidKey { key: KeyKind, value: String },

    #[error("Country with {key} \"{value}\" not found.")]
    NotFound {
        key: KeyKind,
        value: String,
        #[source]
        source: DataSourceError,
    },
}

impl CountryError {
    pub fn invalid_value(key: KeyKind, value: &str) -> Self {
        CountryError::InvalidKey {
            key,
            value: value.to_string(),
        }
    }

    pub fn not_found_by(key: KeyKind, value: &str, source: DataSourceError) -> Self {
        CountryError::NotFound {
            key,
            value: value.to_string(),
            source,
        }
    }

    /// The key kind the failed lookup was made with.
    pub fn key(&self) -> KeyKind {
        match self {
            CountryError::InvalidKey { key, .. } | CountryError::NotFound { key, .. } => *key,
        }
    }

    /// The offending lookup value.
    pub fn value(&self) -> &str {
        match self {
            CountryError::InvalidKey { value, .. } | CountryError::NotFound { value, .. } => {
                value
            }
        }
    }
}
