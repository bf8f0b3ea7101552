use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SmellmapConfig;
use crate::errors::{Result, SnapshotError};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".smellmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<SmellmapConfig> {
    let config = toml::from_str::<SmellmapConfig>(contents)
        .map_err(|e| SnapshotError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Every failure is an error.
pub fn load_config_from(path: &Path) -> Result<SmellmapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        SnapshotError::config(format!("cannot read config file {}: {e}", path.display()))
    })?;
    let config = parse_and_validate_config(&contents)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered config file; unreadable or invalid files fall back to
/// defaults with a warning.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SmellmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.smellmap.toml`.
pub fn discover_config(start: PathBuf) -> SmellmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SmellmapConfig::default()
        })
}

/// Load the explicit config if given, otherwise discover one from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<SmellmapConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(SmellmapConfig::default())
        }
    }
}
