use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the notes directory
pub const NOTES_DIR_ENV: &str = "NEUROGENESIS_NOTES_DIR";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding the `*.md` notes (`~` is expanded on load)
    #[serde(default = "default_notes_directory")]
    pub notes_directory: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            notes_directory: default_notes_directory(),
        }
    }
}

fn default_notes_directory() -> PathBuf {
    PathBuf::from("~/cerebrum")
}

impl CliConfig {
    /// Load configuration with precedence: defaults < file < env < args
    ///
    /// With no explicit file, the default config file is created from the
    /// defaults the first time it is needed.
    pub fn load(config_file: Option<PathBuf>, notes_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = Self::default_config_path()?;
                if !path.exists() {
                    warn!("No config file at {}, writing defaults", path.display());
                    Self::create_default(&path)?;
                    println!("Initialized a new configuration file at {}", path.display());
                }
                Self::from_file(&path)?
            }
        };

        if let Ok(dir) = std::env::var(NOTES_DIR_ENV) {
            debug!("Notes directory from {}: {}", NOTES_DIR_ENV, dir);
            config.notes_directory = PathBuf::from(dir);
        }

        if let Some(dir) = notes_dir {
            config.notes_directory = dir;
        }

        config.notes_directory = expand_home(&config.notes_directory);
        Ok(config)
    }

    /// Get default config file path (`~/.config/neurogenesis/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("neurogenesis").join("config.json"))
    }

    /// Write the default configuration to `path`
    pub fn create_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = serde_json::to_string(&Self::default())?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Display the current configuration as JSON
    pub fn display_as_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config as JSON")
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
