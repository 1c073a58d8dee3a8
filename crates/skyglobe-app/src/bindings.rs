//! The user's key map, kept as `keymap.ron` next to `config.ron`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use skyglobe_input::KeyMap;
use tracing::{debug, info};

pub const KEYMAP_FILE_NAME: &str = "keymap.ron";

#[derive(Debug, thiserror::Error)]
pub enum BindingsError {
    #[error("failed to read key map {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key map {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse key map: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("failed to serialize key map: {0}")]
    Serialize(#[source] ron::Error),
}

/// Load `keymap.ron` from `config_dir`, writing the default map there on
/// first run, then apply the single-key overrides from `config.ron`.
pub fn load_keymap(
    config_dir: &Path,
    overrides: &HashMap<String, String>,
) -> Result<KeyMap, BindingsError> {
    let path = config_dir.join(KEYMAP_FILE_NAME);

    let keymap = if path.exists() {
        let contents = std::fs::read_to_string(&path).map_err(|source| BindingsError::Read {
            path: path.clone(),
            source,
        })?;
        let keymap = KeyMap::from_ron(&contents).map_err(BindingsError::Parse)?;
        info!("Loaded key map from {}", path.display());
        keymap
    } else {
        let keymap = KeyMap::default();
        let text = keymap.to_ron().map_err(BindingsError::Serialize)?;
        std::fs::write(&path, text).map_err(|source| BindingsError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote default key map to {}", path.display());
        keymap
    };

    Ok(keymap.with_overrides(overrides))
}
