use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tally::codec::{DEFAULT_STUDENT_FILE, DEFAULT_TASK_FILE};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub files: FilesConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub students: PathBuf,
    pub tasks: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            students: PathBuf::from(DEFAULT_STUDENT_FILE),
            tasks: PathBuf::from(DEFAULT_TASK_FILE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places when printing averages
    pub average_precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { average_precision: 2 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            files: FilesConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.files.students, PathBuf::from("students.dat"));
        assert_eq!(config.files.tasks, PathBuf::from("tasks.txt"));
        assert_eq!(config.display.average_precision, 2);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_load_explicit_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tally.yml");
        fs::write(&path, "files:\n  tasks: /tmp/todo.txt\ndisplay:\n  average_precision: 1\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.files.tasks, PathBuf::from("/tmp/todo.txt"));
        assert_eq!(config.files.students, PathBuf::from("students.dat"));
        assert_eq!(config.display.average_precision, 1);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tally.yml");
        fs::write(&path, "display: [not, a, map]\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
