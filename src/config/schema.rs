//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Configuration for convention-based controller resolution.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutesConfig {
    /// Base directory for conventionally-named controller modules.
    pub controllers_path: String,

    /// Suffix appended to every controller name, exactly once.
    pub module_suffix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            controllers_path: "src/controllers".to_string(),
            module_suffix: "Controller".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoutesConfig::default();
        assert_eq!(config.controllers_path, "src/controllers");
        assert_eq!(config.module_suffix, "Controller");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RoutesConfig = toml::from_str(r#"controllers_path = "app/controllers""#).unwrap();
        assert_eq!(config.controllers_path, "app/controllers");
        assert_eq!(config.module_suffix, "Controller");
    }
}
