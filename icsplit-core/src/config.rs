//! Global icsplit configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{SplitError, SplitResult};

/// Built-in ceiling default in MB, suited to typical CalDAV import limits.
pub const DEFAULT_MAX_SIZE_MB: f64 = 1.0;

/// Fraction of the requested size actually budgeted per file, so a part that
/// packs right up to the ceiling still clears a service's literal limit.
pub const SIZE_SAFETY_FACTOR: f64 = 0.95;

fn default_max_size_mb() -> f64 {
    DEFAULT_MAX_SIZE_MB
}

/// Global configuration at ~/.config/icsplit/config.toml
///
/// Command-line flags override these values; these override the built-in
/// defaults.
#[derive(Deserialize, Clone)]
pub struct SplitConfig {
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: f64,

    pub output_dir: Option<PathBuf>,
}

impl SplitConfig {
    pub fn config_path() -> SplitResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SplitError::Config("Could not determine config directory".into()))?
            .join("icsplit");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> SplitResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: SplitConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| SplitError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SplitError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The configured output directory with `~` expanded.
    pub fn resolved_output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| {
            PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned())
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SplitResult<()> {
        let contents = format!(
            "\
# icsplit configuration

# Maximum size of each output file in MB:
# max_size_mb = {DEFAULT_MAX_SIZE_MB}

# Where split files are written (defaults to the input file's directory):
# output_dir = \"~/calendar/split\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SplitError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SplitError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Convert a ceiling in MB to the effective byte budget per output file,
/// with the safety margin applied.
pub fn ceiling_bytes(max_size_mb: f64) -> usize {
    (max_size_mb * 1024.0 * 1024.0 * SIZE_SAFETY_FACTOR) as usize
}
