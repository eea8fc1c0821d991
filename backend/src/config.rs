//! Loading [`TrackerConfig`] for native hosts.

use anyhow::{Context, Result};
use shared::TrackerConfig;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a JSON config file; fields it leaves out keep their defaults.
/// A missing file yields the default config.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrackerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(TrackerConfig::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = TrackerConfig::from_json_str(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    if !config.has_category(&config.default_category) {
        anyhow::bail!(
            "Default category '{}' is not in the category list",
            config.default_category
        );
    }

    info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestEnvironment;

    #[test]
    fn test_missing_file_gives_defaults() {
        let env = TestEnvironment::new().unwrap();
        let config = load_config(env.base_directory().join("tracker.json")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let env = TestEnvironment::new().unwrap();
        let path = env.base_directory().join("tracker.json");
        fs::write(&path, r#"{ "currency_symbol": "$", "notice_duration_ms": 5000 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.notice_duration_ms, 5000);
        assert_eq!(config.storage_key, "expenses");
    }

    #[test]
    fn test_invalid_files_are_errors() {
        let env = TestEnvironment::new().unwrap();
        let path = env.base_directory().join("tracker.json");

        fs::write(&path, "not json").unwrap();
        assert!(load_config(&path).is_err());

        fs::write(&path, r#"{ "default_category": "rent" }"#).unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("rent"));
    }
}
