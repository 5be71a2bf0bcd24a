//! Configuration types for Snapzone.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Every field is optional; missing fields take their default value.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::snap::constants::{drag, picker, viewport};

/// Minimum viewport size for snapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MinViewport {
    /// Minimum viewport width in pixels (inclusive).
    pub width: f64,

    /// Minimum viewport height in pixels (inclusive).
    pub height: f64,
}

impl Default for MinViewport {
    fn default() -> Self {
        Self {
            width: viewport::MIN_SNAP_WIDTH,
            height: viewport::MIN_SNAP_HEIGHT,
        }
    }
}

/// Zone picker thumbnail geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Width of one layout thumbnail in pixels.
    pub thumbnail_width: f64,

    /// Gap between thumbnails in pixels.
    pub gap: f64,

    /// Space above the first row of thumbnails in pixels.
    pub top_padding: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: picker::THUMBNAIL_WIDTH,
            gap: picker::THUMBNAIL_GAP,
            top_padding: picker::TOP_PADDING,
        }
    }
}

/// Snap behaviour configuration.
///
/// ```jsonc
/// {
///   "enabled": true,
///   "minViewport": { "width": 800, "height": 600 },
///   "edgeTrigger": 10,
///   "overlayBand": 250,
///   "dragThreshold": 3,
///   "picker": { "thumbnailWidth": 120, "gap": 12, "topPadding": 16 }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfig {
    /// Whether snapping is enabled at all.
    pub enabled: bool,

    /// Snapping is declined on viewports smaller than this.
    pub min_viewport: MinViewport,

    /// Distance from the top edge (pixels) that reveals the zone picker.
    pub edge_trigger: f64,

    /// Height of the zone picker band (pixels); dragging below it hides the picker.
    pub overlay_band: f64,

    /// Pointer travel (pixels) before a press on a window header becomes a drag.
    pub drag_threshold: f64,

    /// Zone picker geometry.
    pub picker: PickerConfig,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_viewport: MinViewport::default(),
            edge_trigger: drag::EDGE_TRIGGER,
            overlay_band: drag::OVERLAY_BAND,
            drag_threshold: drag::DRAG_THRESHOLD,
            picker: PickerConfig::default(),
        }
    }
}

impl SnapConfig {
    /// Returns true if a viewport of this size allows snapping.
    #[must_use]
    pub fn allows_viewport(&self, width: f64, height: f64) -> bool {
        width >= self.min_viewport.width && height >= self.min_viewport.height
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/snapzone/config.jsonc \
         or config.json"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Directory name used under every config root.
const APP_DIR: &str = "snapzone";

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/snapzone/` if the variable is set
/// 2. `~/.config/snapzone/`
/// 3. The platform config directory (e.g. `~/Library/Application Support/snapzone/`)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        roots.push(PathBuf::from(xdg_config));
    }
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".config"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        roots.push(config_dir);
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for root in roots {
        let app_dir = root.join(APP_DIR);
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            // XDG_CONFIG_HOME is often ~/.config itself
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::Io` if a configuration file exists but could not be read.
/// Returns `ConfigError::Parse` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(SnapConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file could not be read.
/// Returns `ConfigError::Parse` if the file contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(SnapConfig, PathBuf), ConfigError> {
    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: SnapConfig = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), "snap: configuration loaded");
    Ok((config, path.to_path_buf()))
}
