//! Location and YAML storage of the user preferences file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::Result;
use serde::Serialize;

const PREFS_FILE_NAME: &str = "quarterturn";
const PREFS_FILE_EXTENSION: &str = "yaml";

/// Prefix of environment variables that override preferences, such as
/// `QUARTERTURN_TIMING__TURN_TIME_MS`.
pub const ENV_PREFIX: &str = "QUARTERTURN";

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "Quarterturn");
    static ref PREFS_FILE_PATH: Result<PathBuf, PrefsError> = match &*PROJECT_DIRS {
        Some(proj_dirs) => {
            let mut p = proj_dirs.config_dir().to_owned();
            p.push(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}"));
            Ok(p)
        }
        None => Err(PrefsError::NoPreferencesPath),
    };
}

/// Error locating the preferences file.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// No home directory, so no place for the preferences file
    #[error("unable to get preferences file path")]
    NoPreferencesPath,
}

/// Returns the default location of the user preferences file.
pub fn prefs_file() -> Result<PathBuf, PrefsError> {
    PREFS_FILE_PATH.clone()
}

/// Returns the source for user preferences.
///
/// An explicitly requested file must exist. The file at the default location
/// is optional.
pub fn user_config_source(
    path: Option<&Path>,
) -> Result<config::File<config::FileSourceFile, config::FileFormat>, PrefsError> {
    match path {
        Some(path) => Ok(config::File::from(path).required(true)),
        None => Ok(config::File::from(prefs_file()?.as_path()).required(false)),
    }
}

/// Returns the source for preferences overridden by environment variables.
pub fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Writes preferences to a YAML file, creating its parent directory if
/// needed.
pub fn save(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent()
        && !p.as_os_str().is_empty()
    {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    log::debug!("saved preferences to {}", path.display());
    Ok(())
}
