pub mod memory;

pub use memory::MemoryDataSource;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::debug;

/// Opens the dataset named by the config, or the bundled one when none is set.
pub fn open_data_source(config: &AppConfig) -> Result<MemoryDataSource> {
    match &config.data_path {
        Some(path) => {
            debug!("Loading country dataset from {}", path);
            MemoryDataSource::load_from_path(path)
        }
        None => MemoryDataSource::bundled(),
    }
}
