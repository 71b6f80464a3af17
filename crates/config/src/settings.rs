//! Settings loader
//!
//! Layers an optional TOML file under `FARM_ADVISOR__*` environment
//! overrides, e.g. `FARM_ADVISOR__THRESHOLDS__FUZZY_FLOOR=0.8`.

use crate::thresholds::MatcherThresholds;
use config::{Config, ConfigError, Environment, File};
use farm_advisor_core::Region;
use serde::{Deserialize, Serialize};

/// Host-tunable settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub thresholds: MatcherThresholds,

    /// Region assumed for users with no stored context and no override
    #[serde(default)]
    pub default_region: Region,
}

/// Load settings from an optional file plus environment variables.
///
/// A missing file is not an error; defaults apply for anything unset.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path).required(false));
    }
    builder = builder.add_source(
        Environment::with_prefix("FARM_ADVISOR")
            .separator("__")
            .try_parsing(true),
    );
    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.default_region, Region::Med);
        assert_eq!(settings.thresholds.fuzzy_floor, 0.78);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let settings = load_settings(Some("/nonexistent/farm-advisor")).unwrap();
        assert_eq!(settings.thresholds.max_buttons, 6);
    }
}
