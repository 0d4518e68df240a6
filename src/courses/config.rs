//! Configuration primitives for the course tree.
//!
//! Stored in a machine-readable TOML file at `<root>/config.toml`, where
//! the root is resolved once at startup. The config maps short category
//! aliases to directory names and fixes the naming prefixes used to
//! recognize and construct course/week directories. It is loaded once and
//! passed by reference to the resolution pipeline; nothing mutates it at
//! run time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable navigation configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Category alias -> directory name under the workspace root.
    #[serde(default = "default_categories")]
    pub categories: BTreeMap<String, String>,
    /// Prefix naming course directories (`<prefix><id>`).
    #[serde(default = "default_course_prefix")]
    pub course_prefix: String,
    /// Prefix naming week directories (`<prefix><id>`).
    #[serde(default = "default_week_prefix")]
    pub week_prefix: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            course_prefix: default_course_prefix(),
            week_prefix: default_week_prefix(),
        }
    }
}

fn default_categories() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("p".to_string(), "programming_cpp".to_string()),
        ("a".to_string(), "assembly".to_string()),
    ])
}

fn default_course_prefix() -> String {
    "course".to_string()
}

fn default_week_prefix() -> String {
    "week".to_string()
}

impl NavConfig {
    /// Directory name for the category behind `alias`, if configured.
    pub fn category_dirname(&self, alias: &str) -> Option<&str> {
        self.categories.get(alias).map(String::as_str)
    }

    /// Renders the alias table for usage/error messages (`p=programming_cpp, ...`).
    pub fn alias_summary(&self) -> String {
        self.categories
            .iter()
            .map(|(alias, dirname)| format!("{alias}={dirname}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Directory name for an explicit course identifier.
    pub fn course_dir_name(&self, course_id: &str) -> String {
        format!("{}{}", self.course_prefix, course_id)
    }

    /// Directory name for an explicit week identifier.
    pub fn week_dir_name(&self, week_id: &str) -> String {
        format!("{}{}", self.week_prefix, week_id)
    }
}

/// Standard file name of the config file under the workspace root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory holding the course tree.
///
/// Order of precedence:
/// 1. `COURSENAV_HOME` environment variable.
/// 2. `<home>/Courses` via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("COURSENAV_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine the home directory")?;
    Ok(base_dirs.home_dir().join("Courses"))
}

/// Path to the config file under the given root.
pub fn config_file_path(root: &std::path::Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default(root: &std::path::Path) -> Result<NavConfig> {
    let path = config_file_path(root);
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: NavConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(NavConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(root: &std::path::Path, config: &NavConfig) -> Result<()> {
    fs::create_dir_all(root)?;
    let path = config_file_path(root);
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}
