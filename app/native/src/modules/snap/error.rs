//! Error types for the snap system.
//!
//! # Error Categories
//!
//! - **Precondition errors**: the window is gone, cannot be moved, or the
//!   viewport is too small. Nothing is mutated when these are returned.
//! - **Lookup errors**: a zone reference no longer resolves (resize race)
//! - **Host errors**: the host refused to apply geometry or recreate a window

use thiserror::Error;

use super::state::WindowHandle;

/// Result type alias for snap operations.
pub type SnapResult<T> = Result<T, SnapError>;

/// Errors returned by host collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host refused the operation (e.g. a position setter threw).
    #[error("host rejected operation: {0}")]
    Rejected(String),

    /// A content reference did not resolve to anything.
    #[error("content not found: {0}")]
    ContentNotFound(String),

    /// The host is not able to serve the request right now.
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during snap operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SnapError {
    /// No open window has this handle.
    #[error("window {0} not found")]
    WindowNotFound(WindowHandle),

    /// The window does not support position changes.
    #[error("window {0} cannot be positioned")]
    NotPositionable(WindowHandle),

    /// The window's current geometry could not be read.
    #[error("geometry of window {0} is unavailable")]
    GeometryUnavailable(WindowHandle),

    /// The viewport is below the minimum size for snapping.
    #[error("viewport {width}x{height} is below the snap minimum")]
    ViewportTooSmall { width: f64, height: f64 },

    /// A zone reference did not resolve in the current layout set.
    #[error("zone {layout_id}/{zone_id} not found")]
    ZoneNotFound { layout_id: String, zone_id: String },

    /// Applying geometry through the host failed.
    #[error("failed to apply geometry: {0}")]
    Apply(#[from] HostError),
}

impl SnapError {
    /// Returns true if this error means the operation never started.
    #[must_use]
    pub const fn is_precondition(&self) -> bool { !matches!(self, Self::Apply(_)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_too_small_display() {
        let err = SnapError::ViewportTooSmall { width: 799.0, height: 600.0 };
        assert_eq!(err.to_string(), "viewport 799x600 is below the snap minimum");
    }

    #[test]
    fn test_zone_not_found_display() {
        let err = SnapError::ZoneNotFound {
            layout_id: "split-4".to_string(),
            zone_id: "col-4".to_string(),
        };
        assert!(err.to_string().contains("split-4/col-4"));
    }

    #[test]
    fn test_host_error_converts_to_apply() {
        let err: SnapError = HostError::Rejected("frozen".to_string()).into();
        assert!(matches!(err, SnapError::Apply(HostError::Rejected(_))));
        assert!(!err.is_precondition());
        assert!(SnapError::WindowNotFound(3).is_precondition());
    }
}
