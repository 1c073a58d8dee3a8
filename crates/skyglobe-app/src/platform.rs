//! Per-user directories for config, logs, and flight plans.

use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "skyglobe";

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the runner keeps its files. Follows OS conventions (XDG on Linux,
/// Known Folders on Windows, Library on macOS).
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Receives the JSON log file in debug builds.
    pub log_dir: PathBuf,
    /// Where bare `--plan` names are looked up.
    pub plan_dir: PathBuf,
}

impl PlatformDirs {
    pub fn resolve() -> Result<Self, PlatformError> {
        let app_config = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);
        let data_dir = dirs::data_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| app_config.clone());

        Ok(Self {
            config_dir: app_config.clone(),
            log_dir: app_config.join("logs"),
            plan_dir: data_dir.join("plans"),
        })
    }

    /// Everything under `root`, e.g. a `--config` directory or a test dir.
    pub fn with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            log_dir: root.join("logs"),
            plan_dir: root.join("plans"),
        }
    }

    /// Resolve a `--plan` argument. Absolute paths and relative paths that
    /// exist from the working directory are used as given; anything else is
    /// looked up in `plan_dir`.
    pub fn plan_path(&self, plan: &Path) -> PathBuf {
        if plan.is_absolute() || plan.exists() {
            plan.to_path_buf()
        } else {
            self.plan_dir.join(plan)
        }
    }

    pub fn create_all(&self) -> Result<(), PlatformError> {
        for dir in [&self.config_dir, &self.log_dir, &self.plan_dir] {
            std::fs::create_dir_all(dir).map_err(|source| PlatformError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
