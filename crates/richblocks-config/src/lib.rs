use richblocks_engine::LayoutMetrics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Document shown when no path is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<PathBuf>,

    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Overrides for [`LayoutMetrics`], in the host's units (terminal cells for
/// the CLI). Unset fields keep the host's defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_row_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_trailing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_padding: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_gap: Option<f32>,
}

impl LayoutConfig {
    /// `defaults` with every configured value applied on top.
    pub fn apply_to(&self, defaults: LayoutMetrics) -> LayoutMetrics {
        LayoutMetrics {
            header_height: self.header_height.unwrap_or(defaults.header_height),
            min_row_height: self.min_row_height.unwrap_or(defaults.min_row_height),
            table_trailing: self.table_trailing.unwrap_or(defaults.table_trailing),
            cell_padding: self.cell_padding.unwrap_or(defaults.cell_padding),
            block_gap: self.block_gap.unwrap_or(defaults.block_gap),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded document path
        config.document_path = config
            .document_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/richblocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/richblocks/config.toml"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.document_path.is_none());
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_layout_overrides_apply_on_top_of_defaults() {
        let config: Config = toml::from_str(
            r#"
[layout]
header_height = 1
min_row_height = 1.0
block_gap = 2
"#,
        )
        .unwrap();

        let metrics = config.layout.apply_to(LayoutMetrics::default());
        assert_eq!(
            metrics,
            LayoutMetrics {
                header_height: 1.0,
                min_row_height: 1.0,
                block_gap: 2.0,
                ..LayoutMetrics::default()
            }
        );
    }

    #[test]
    fn test_unknown_layout_key_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[layout]\nrow_height = 3\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            document_path: Some(PathBuf::from("/tmp/report.md")),
            layout: LayoutConfig {
                cell_padding: Some(0.0),
                ..LayoutConfig::default()
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.document_path, test_config.document_path);
        assert_eq!(loaded_config.layout, test_config.layout);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("RICHBLOCKS_REPORTS", "/custom/reports");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "document_path = \"$RICHBLOCKS_REPORTS/latest.md\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.document_path,
            Some(PathBuf::from("/custom/reports/latest.md"))
        );

        unsafe {
            env::remove_var("RICHBLOCKS_REPORTS");
        }
    }
}
