//! Dashboard configuration loaded from TOML.
//!
//! Every field is optional; an empty document yields [`Config::default`].
//!
//! ```toml
//! access_code = "1212"
//! security_staff = "42 Active"
//! map_seed = 7
//!
//! # Replaces the built-in mock data when present.
//! [dataset.event]
//! id = "evt-001"
//! # ...
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::{DashboardState, Dataset};

pub const DEFAULT_ACCESS_CODE: &str = "1212";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Literal code the access prompt compares against.
    pub access_code: String,
    /// Value shown on the Security Staff stat card.
    pub security_staff: String,
    /// Seed for the decorative shapes on the attendee venue map.
    pub map_seed: u64,
    pub dataset: Option<Dataset>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            access_code: DEFAULT_ACCESS_CODE.to_string(),
            security_staff: "42 Active".to_string(),
            map_seed: 7,
            dataset: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            custom_dataset = config.dataset.is_some(),
            "loaded config"
        );
        Ok(config)
    }

    /// Initial dashboard state: the configured dataset, or the built-in seed.
    pub fn initial_state(&self) -> DashboardState {
        let dataset = self.dataset.clone().unwrap_or_else(Dataset::seed);
        DashboardState::from_dataset(dataset)
    }
}
