// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`GALLERY_LENS_DATA_DIR`, `GALLERY_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app name appended
//!
//! The data directory holds the gallery snapshot; the config directory holds
//! `settings.toml`.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GalleryLens";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "GALLERY_LENS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GALLERY_LENS_CONFIG_DIR";

#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

/// CLI overrides, set once at startup.
static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// # Errors
///
/// Returns [`Error::Cli`] if the overrides were already initialized.
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) -> Result<()> {
    CLI_OVERRIDES
        .set(CliOverrides {
            data_dir,
            config_dir,
        })
        .map_err(|_| Error::Cli("path overrides already initialized".to_string()))
}

fn resolve(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli_path) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory path.
///
/// - Linux: `~/.local/share/GalleryLens/`
/// - macOS: `~/Library/Application Support/GalleryLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\GalleryLens\`
///
/// Returns `None` if the data directory cannot be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_OVERRIDES.get().and_then(|o| o.data_dir.clone());
    resolve(override_path, cli, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/GalleryLens/`
/// - macOS: `~/Library/Application Support/GalleryLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\GalleryLens\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_OVERRIDES.get().and_then(|o| o.config_dir.clone());
    resolve(override_path, cli, ENV_CONFIG_DIR, dirs::config_dir())
}
