use crate::domain::entities::FiltersConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        let config_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("incident-filters")
        } else {
            PathBuf::from(".")
        };

        Self::at(config_dir.join("config.json"))
    }

    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<FiltersConfig> {
        if !self.config_path.exists() {
            tracing::debug!("No config at {}, using defaults", self.config_path.display());
            return Ok(FiltersConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file {}", self.config_path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", self.config_path.display()))?;

        Ok(config)
    }

    pub fn save(&self, config: &FiltersConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(&self.config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }
}

impl Default for ConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NamedPreset, PermissionSet, PredefinedFilterSet};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repository = ConfigRepository::at(dir.path().join("absent.json"));
        assert_eq!(repository.load().expect("load"), FiltersConfig::default());
    }

    #[test]
    fn save_then_load_keeps_presets_and_permissions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repository = ConfigRepository::at(dir.path().join("nested").join("config.json"));
        let config = FiltersConfig {
            permissions: PermissionSet {
                warning_banner_enabled: true,
                ..PermissionSet::default()
            },
            presets: vec![NamedPreset::new(
                "Everything but spam",
                PredefinedFilterSet::Exclude(vec!["spam".into()]),
            )],
            ..FiltersConfig::default()
        };

        repository.save(&config).expect("save");
        assert_eq!(repository.load().expect("load"), config);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");
        let err = ConfigRepository::at(&path).load().expect_err("should fail");
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn bundled_demo_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/config.json");
        let config = ConfigRepository::at(path).load().expect("load");
        assert_eq!(config.presets.len(), 2);
        assert!(config.permissions.dlp_encryption_enabled);
    }
}
