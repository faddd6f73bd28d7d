//! Compiler configuration.
//!
//! Values come from three layers, later layers winning: an optional
//! `balance.toml`, `BALANCE_*` environment variables (after `.env` is
//! loaded), then command-line flags.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::requirements::RequirementLayout;

pub const CONFIG_FILE: &str = "balance.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Directory holding the authored content files.
    pub data_dir: PathBuf,
    /// Directory datasets are written to.
    pub out_dir: PathBuf,
    /// Progression workbook; defaults to `<data_dir>/sheets/progression.ron`.
    pub sheets: Option<PathBuf>,
    /// Reject duplicate names and malformed tables instead of warning.
    pub strict: bool,
    pub skill_requirements: RequirementLayout,
    pub weapon_requirements: RequirementLayout,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(balance_content::DATA_DIR),
            out_dir: PathBuf::from("mechanics"),
            sheets: None,
            strict: false,
            skill_requirements: RequirementLayout::skills(),
            weapon_requirements: RequirementLayout::weapons(),
        }
    }
}

impl CompilerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load `path` if given, else `balance.toml` in the working directory
    /// when present, else defaults; then apply environment overrides.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::load(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        Ok(config.with_env())
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BALANCE_DATA_DIR` - Content directory
    /// - `BALANCE_OUT_DIR` - Output directory (default: mechanics)
    /// - `BALANCE_SHEETS` - Progression workbook path
    /// - `BALANCE_STRICT` - Strict validation (default: false)
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    fn with_env(mut self) -> Self {
        if let Some(dir) = read_env::<PathBuf>("BALANCE_DATA_DIR") {
            self.data_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("BALANCE_OUT_DIR") {
            self.out_dir = dir;
        }
        if let Some(path) = read_env::<PathBuf>("BALANCE_SHEETS") {
            self.sheets = Some(path);
        }
        if let Some(strict) = read_env_bool("BALANCE_STRICT") {
            self.strict = strict;
        }
        self
    }

    pub fn sheets_path(&self) -> PathBuf {
        self.sheets
            .clone()
            .unwrap_or_else(|| self.data_dir.join("sheets").join("progression.ron"))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CompilerConfig = toml::from_str(
            r#"
            out_dir = "build/mechanics"
            strict = true

            [weapon_requirements]
            sheet_title = "Progression"
            cell_range = "J2:K12"
            first_row = 2
            end_row = 12
            level_column = 9
            min_player_level_column = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.out_dir, PathBuf::from("build/mechanics"));
        assert!(config.strict);
        assert_eq!(config.skill_requirements, RequirementLayout::skills());
        assert_eq!(config.weapon_requirements.end_row, 12);
        assert_eq!(config.data_dir, PathBuf::from(balance_content::DATA_DIR));
    }

    #[test]
    fn sheets_default_under_data_dir() {
        let config = CompilerConfig {
            data_dir: PathBuf::from("/content"),
            ..CompilerConfig::default()
        };
        assert_eq!(
            config.sheets_path(),
            PathBuf::from("/content/sheets/progression.ron")
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = CompilerConfig::load(Path::new("/nonexistent/balance.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/balance.toml"));
    }
}
