//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Snapzone Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // Enable or disable snapping
  // "enabled": true,

  // ============================================================================
  // Drag Thresholds
  // ============================================================================
  // Pointer travel in pixels before pressing a window header becomes a drag
  // "dragThreshold": 3,
  //
  // Drag above this distance from the top edge to reveal the zone picker
  // "edgeTrigger": 10,
  //
  // Height of the zone picker band; dragging below it hides the picker
  // "overlayBand": 250,

  // ============================================================================
  // Viewport
  // ============================================================================
  // Snapping is declined when the viewport is smaller than this
  // "minViewport": {
  //   "width": 800,
  //   "height": 600
  // },

  // ============================================================================
  // Zone Picker
  // ============================================================================
  // "picker": {
  //   // Width of one layout thumbnail in pixels
  //   "thumbnailWidth": 120,
  //
  //   // Gap between thumbnails in pixels
  //   "gap": 12,
  //
  //   // Space above the first row of thumbnails in pixels
  //   "topPadding": 16
  // }
}
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_template())
}
