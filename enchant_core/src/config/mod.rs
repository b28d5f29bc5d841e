//! Cost table configuration loaded from TOML
//!
//! ```toml
//! [costs]
//! tier_1 = ["2d4_DAMAGE", "WASTE"]
//! tier_2 = ["3d6_DAMAGE"]
//! tier_3 = ["DESTRUCTION"]
//! ```
//!
//! Missing tiers keep their default costs.

use crate::cost::CostTable;
use crate::error::EnchantError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a cost table file couldn't be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read cost table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed cost table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unusable cost table: {0}")]
    Invalid(#[from] EnchantError),
}

/// Top-level enchanting configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnchantingConfig {
    #[serde(default)]
    pub costs: CostTable,
}

/// Load a cost table from a TOML file
pub fn load_cost_table(path: &Path) -> Result<CostTable, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cost_table(&content)
}

/// Load a cost table from a TOML string
pub fn parse_cost_table(content: &str) -> Result<CostTable, ConfigError> {
    let config: EnchantingConfig = toml::from_str(content)?;
    config.costs.validate()?;
    Ok(config.costs)
}
