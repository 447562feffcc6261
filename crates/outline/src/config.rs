use serde::{Deserialize, Serialize};

/// Configuration for outline extraction and repo-map rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Maximum file size in characters; larger files are skipped entirely
    pub max_file_chars: usize,

    /// Maximum number of files a single repo map may render
    pub max_files: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_file_chars: 500_000,
            max_files: 50,
        }
    }
}

impl OutlineConfig {
    /// Create config for large repositories (more files per map)
    pub fn for_large_repos() -> Self {
        Self {
            max_files: 200,
            ..Default::default()
        }
    }

    /// Create config for tight prompt budgets (fewer, smaller files)
    pub fn for_tight_budget() -> Self {
        Self {
            max_file_chars: 100_000,
            max_files: 20,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_chars == 0 {
            return Err("max_file_chars must be > 0".to_string());
        }

        if self.max_files == 0 {
            return Err("max_files must be > 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = OutlineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_configs_valid() {
        assert!(OutlineConfig::for_large_repos().validate().is_ok());
        assert!(OutlineConfig::for_tight_budget().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = OutlineConfig::default();

        config.max_file_chars = 0;
        assert!(config.validate().is_err());

        config.max_file_chars = 500_000;
        config.max_files = 0;
        assert!(config.validate().is_err());

        config.max_files = 50;
        assert!(config.validate().is_ok());
    }
}
