//! Raw country data abstractions

use crate::core::error::DataSourceError;
use serde::{Deserialize, Serialize};

/// A country as supplied by a data source, before any provider processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
    #[serde(default)]
    pub currency: Vec<String>,
}

/// Dataset supplying country records by key.
///
/// Every query is an exact match. A missing record is reported as
/// [`DataSourceError::NotFound`].
pub trait CountryDataSource: Send + Sync {
    fn by_name(&self, name: &str) -> Result<CountryRecord, DataSourceError>;
    fn by_alpha2(&self, alpha2: &str) -> Result<CountryRecord, DataSourceError>;
    fn by_alpha3(&self, alpha3: &str) -> Result<CountryRecord, DataSourceError>;
    fn by_numeric(&self, numeric: &str) -> Result<CountryRecord, DataSourceError>;
}

impl<T: CountryDataSource + ?Sized> CountryDataSource for &T {
    fn by_name(&self, name: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_name(name)
    }

    fn by_alpha2(&self, alpha2: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_alpha2(alpha2)
    }

    fn by_alpha3(&self, alpha3: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_alpha3(alpha3)
    }

    fn by_numeric(&self, numeric: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_numeric(numeric)
    }
}

impl<T: CountryDataSource + ?Sized> CountryDataSource for std::sync::Arc<T> {
    fn by_name(&self, name: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_name(name)
    }

    fn by_alpha2(&self, alpha2: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_alpha2(alpha2)
    }

    fn by_alpha3(&self, alpha3: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_alpha3(alpha3)
    }

    fn by_numeric(&self, numeric: &str) -> Result<CountryRecord, DataSourceError> {
        (**self).by_numeric(numeric)
    }
}
