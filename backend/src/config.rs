//! # Application configuration
//!
//! Where the two CSV stores live and how values are presented. Configuration is
//! an explicit value handed to [`crate::storage::csv::CsvConnection`] at
//! construction time; nothing here is global.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/home/me/Documents/Chore Allowance"
//! task_file: "task_list.csv"
//! log_file: "task_log.csv"
//! default_allocation:
//!   spend_pct: 20
//!   save_pct: 70
//!   invest_pct: 10
//! currency_symbol: "¥"
//! output_format: text
//! ```
//!
//! Every key is optional. The default data directory is
//! `~/Documents/Chore Allowance`; a `.allowance_redirect` file in that
//! directory containing another path moves the data there.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use shared::AllocationSetting;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::allocation_service::validate_setting;
use crate::error::{AllowanceError, Result};

pub const DEFAULT_TASK_FILE: &str = "task_list.csv";
pub const DEFAULT_LOG_FILE: &str = "task_log.csv";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const REDIRECT_FILE_NAME: &str = ".allowance_redirect";
const DEFAULT_DIRECTORY_NAME: &str = "Chore Allowance";

/// How the reference terminal renderer prints the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub task_file: String,
    pub log_file: String,
    /// Starting slider positions; the chosen split itself is never persisted
    pub default_allocation: AllocationSetting,
    pub currency_symbol: String,
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            task_file: DEFAULT_TASK_FILE.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            default_allocation: AllocationSetting::default(),
            currency_symbol: "¥".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Default configuration rooted at an explicit data directory
    pub fn with_data_directory<P: AsRef<Path>>(data_directory: P) -> Self {
        Self {
            data_directory: data_directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|e| AllowanceError::io(path, e))?;
        let config_error = |reason: String| AllowanceError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let config: AppConfig =
            serde_yaml::from_str(&yaml_content).map_err(|e| config_error(e.to_string()))?;
        validate_setting(&config.default_allocation)
            .map_err(|e| config_error(format!("default_allocation: {}", e)))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Location of the config file inside the default data directory
    pub fn default_config_path() -> PathBuf {
        default_data_directory().join(CONFIG_FILE_NAME)
    }

    pub fn task_file_path(&self) -> PathBuf {
        self.data_directory.join(&self.task_file)
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.data_directory.join(&self.log_file)
    }
}

/// `~/Documents/Chore Allowance`, following a redirect file if one is present
pub fn default_data_directory() -> PathBuf {
    let documents_dir = dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."));

    resolve_redirect(&documents_dir.join(DEFAULT_DIRECTORY_NAME))
}

/// Follow a `.allowance_redirect` file in `directory`, if it names an existing path
pub fn resolve_redirect(directory: &Path) -> PathBuf {
    let redirect_file = directory.join(REDIRECT_FILE_NAME);

    if !redirect_file.exists() {
        return directory.to_path_buf();
    }

    match fs::read_to_string(&redirect_file) {
        Ok(content) => {
            let target = PathBuf::from(content.trim());
            if target.exists() {
                info!("Data directory redirected to: {}", target.display());
                target
            } else {
                warn!(
                    "Redirect file points to non-existent directory: {}. Using default.",
                    target.display()
                );
                directory.to_path_buf()
            }
        }
        Err(e) => {
            warn!("Failed to read redirect file: {}. Using default directory.", e);
            directory.to_path_buf()
        }
    }
}
