//! Configuration loading from patlint.toml.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Main configuration structure for patlint.toml.
#[derive(Debug, Deserialize, Default)]
pub struct PatlintConfig {
    /// Class-name regexes to skip during detection.
    pub ignore: Option<Vec<String>>,
    /// Exit with a failure code when a pattern matches (default: true).
    pub fail_on_match: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from patlint.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<PatlintConfig>> {
    let path = root.join("patlint.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid patlint.toml")?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = std::env::temp_dir().join("patlint_config_test_missing");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        assert!(load_config(&dir).unwrap().is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_fields() {
        let dir = std::env::temp_dir().join("patlint_config_test_load");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("patlint.toml"),
            "ignore = [\"^Test\"]\nfail_on_match = false\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.ignore.as_deref(), Some(&["^Test".to_string()][..]));
        assert_eq!(cfg.fail_on_match, Some(false));
        assert_eq!(cfg.output.unwrap().format.as_deref(), Some("json"));

        fs::remove_dir_all(&dir).ok();
    }
}
