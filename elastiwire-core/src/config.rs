//! Translation configuration

use std::path::Path;

use serde::Deserialize;

use crate::json_file::{LoadError, read_json};

/// Defaults applied while translating instance groups
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateConfig {
    /// Root volume type when an instance group does not set one (default: "gp2")
    pub default_root_volume_type: String,

    /// Root volume size in GiB when an instance group does not set one (default: 128)
    pub default_root_volume_size: i32,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            default_root_volume_type: "gp2".to_string(),
            default_root_volume_size: 128,
        }
    }
}

impl TranslateConfig {
    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let config: Self = read_json(path)?;
        log::debug!("Loaded translate config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
