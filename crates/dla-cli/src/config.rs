//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default report format.
    pub output: OutputFormat,

    /// Directory searched for log files given by a relative path.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DLA_*)
        figment = figment.merge(Env::prefixed("DLA_"));

        figment.extract()
    }

    /// Resolves the log file to open.
    ///
    /// A relative path that does not exist from the working directory is looked up in
    /// `log_dir`. Anything else is returned unchanged so that a missing file is still
    /// reported under the name the user typed.
    pub fn resolve_log_path(&self, file: &Path) -> PathBuf {
        if file.is_relative() && !file.exists() {
            if let Some(dir) = &self.log_dir {
                let candidate = dir.join(file);
                if candidate.exists() {
                    return candidate;
                }
            }
        }
        file.to_path_buf()
    }
}

/// Returns the platform-specific config directory for dla.
///
/// On Linux: `~/.config/dla`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dla"))
}
