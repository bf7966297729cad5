use crate::core::country::KeyKind;
use crate::core::error::DataSourceError;
use crate::core::source::{CountryDataSource, CountryRecord};
use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const BUNDLED_DATASET: &str = include_str!("../../data/iso3166.json");

/// In-memory country dataset indexed by every lookup key.
#[derive(Debug, Clone)]
pub struct MemoryDataSource {
    records: Vec<CountryRecord>,
    by_name: HashMap<String, usize>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_numeric: HashMap<String, usize>,
}

impl MemoryDataSource {
    /// Loads the ISO 3166-1 dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET).context("Failed to load bundled ISO 3166-1 dataset")
    }

    /// Loads a dataset from a JSON array of country records.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to load dataset file: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CountryRecord> =
            serde_json::from_str(json).context("Failed to parse country records")?;
        Self::from_records(records)
    }

    /// Builds the indexes, rejecting datasets where two records share a key.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_alpha2 = HashMap::with_capacity(records.len());
        let mut by_alpha3 = HashMap::with_capacity(records.len());
        let mut by_numeric = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            for (kind, index, key) in [
                (KeyKind::Name, &mut by_name, &record.name),
                (KeyKind::Alpha2, &mut by_alpha2, &record.alpha2),
                (KeyKind::Alpha3, &mut by_alpha3, &record.alpha3),
                (KeyKind::Numeric, &mut by_numeric, &record.numeric),
            ] {
                if index.insert(key.clone(), position).is_some() {
                    bail!("Duplicate {} \"{}\" in country dataset", kind, key);
                }
            }
        }

        debug!("Indexed {} country records", records.len());
        Ok(Self {
            records,
            by_name,
            by_alpha2,
            by_alpha3,
            by_numeric,
        })
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find(
        &self,
        index: &HashMap<String, usize>,
        kind: KeyKind,
        value: &str,
    ) -> Result<CountryRecord, DataSourceError> {
        debug!("Querying dataset by {}: {}", kind, value);
        index
            .get(value)
            .map(|&position| self.records[position].clone())
            .ok_or_else(|| DataSourceError::NotFound {
                key: kind,
                value: value.to_string(),
            })
    }
}

impl CountryDataSource for MemoryDataSource {
    fn by_name(&self, name: &str) -> Result<CountryRecord, DataSourceError> {
        self.find(&self.by_name, KeyKind::Name, name)
    }

    fn by_alpha2(&self, alpha2: &str) -> Result<CountryRecord, DataSourceError> {
        self.find(&self.by_alpha2, KeyKind::Alpha2, alpha2)
    }

    fn by_alpha3(&self, alpha3: &str) -> Result<CountryRecord, DataSourceError> {
        self.find(&self.by_alpha3, KeyKind::Alpha3, alpha3)
    }

    fn by_numeric(&self, numeric: &str) -> Result<CountryRecord, DataSourceError> {
        self.find(&self.by_numeric, KeyKind::Numeric, numeric)
    }
}
