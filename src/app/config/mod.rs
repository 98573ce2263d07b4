// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gallery]` - Batch size and generator seed
//! - `[storage]` - Snapshot persistence
//! - `[diagnostics]` - Event buffer capacity
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GALLERY_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.image_count = Some(24);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Image generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Images generated per fetch.
    #[serde(default = "default_image_count", skip_serializing_if = "Option::is_none")]
    pub image_count: Option<usize>,

    /// Generator seed. Absent means a fresh random gallery on every fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_count: default_image_count(),
            seed: None,
        }
    }
}

impl GalleryConfig {
    /// Batch size with the default applied and clamped to the allowed range.
    #[must_use]
    pub fn effective_image_count(&self) -> usize {
        self.image_count
            .unwrap_or(DEFAULT_IMAGE_COUNT)
            .clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT)
    }
}

/// Snapshot storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(
        default = "default_persist_snapshot",
        skip_serializing_if = "Option::is_none"
    )]
    pub persist_snapshot: Option<bool>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist_snapshot: default_persist_snapshot(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn should_persist(&self) -> bool {
        self.persist_snapshot.unwrap_or(DEFAULT_PERSIST_SNAPSHOT)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Maximum number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_image_count() -> Option<usize> {
    Some(DEFAULT_IMAGE_COUNT)
}

fn default_persist_snapshot() -> Option<bool> {
    Some(DEFAULT_PERSIST_SNAPSHOT)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
