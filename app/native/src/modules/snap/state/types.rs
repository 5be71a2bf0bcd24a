//! Core state types for the snap system.
//!
//! These types form a small relational structure:
//! - `WindowHandle` identifies a live host window (valid while it is open)
//! - `WindowIdentity` identifies the same logical window across close/reopen
//! - `SnapRecord` links an identity to its pre-snap geometry and zone

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::modules::snap::constants::zone::FULL_ID;

// ============================================================================
// Geometry Types
// ============================================================================

/// A rectangle with position and size, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a zero-sized rectangle at origin.
    #[must_use]
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }

    /// Check if this rectangle has valid dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool { self.width > 0.0 && self.height > 0.0 }

    /// Check if this rectangle contains a point (right and bottom edges exclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Check if this rectangle overlaps another with a non-zero area.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Calculate the area of this rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point { Point::new(self.x, self.y) }

    /// Check if two rectangles are approximately equal (within epsilon).
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.width - other.width).abs() < epsilon
            && (self.height - other.height).abs() < epsilon
    }
}

/// A point in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 { (self.x - other.x).hypot(self.y - other.y) }
}

/// Size of the host viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// The whole viewport as a rectangle at origin.
    #[must_use]
    pub const fn bounds(&self) -> Rect { Rect::new(0.0, 0.0, self.width, self.height) }

    /// Total viewport area.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }
}

// ============================================================================
// Identity Types
// ============================================================================

/// The host's per-window handle. Only meaningful while the window is alive.
pub type WindowHandle = u64;

/// Stable key recognizing the same logical window across close/reopen cycles.
///
/// Derived from the application-assigned id when there is one, falling back to
/// the window's type name. Computed once at snap time and stored in the record,
/// then recomputed from open windows for matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowIdentity(String);

impl WindowIdentity {
    /// Derive an identity from an application id and a type name.
    #[must_use]
    pub fn derive(app_id: Option<&str>, type_name: &str) -> Self {
        match app_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => Self(format!("app-{id}")),
            None => Self(format!("type-{type_name}")),
        }
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for WindowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Opaque reference to the content a window displays.
///
/// Only used to recreate a window that was closed while snapped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRef(String);

impl DocumentRef {
    /// Wrap a host content reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self { Self(reference.into()) }

    /// The raw reference.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ============================================================================
// Zone Reference
// ============================================================================

/// Identifies one cell of one generated layout.
///
/// Not stable across viewport resizes; only used for highlights and drops.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRef {
    pub layout_id: String,
    pub zone_id: String,
}

impl ZoneRef {
    /// Create a new zone reference.
    #[must_use]
    pub fn new(layout_id: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            layout_id: layout_id.into(),
            zone_id: zone_id.into(),
        }
    }

    /// The whole-viewport zone, resolvable without a prior layout generation.
    #[must_use]
    pub fn full() -> Self { Self::new(FULL_ID, FULL_ID) }

    /// Returns true if this is the whole-viewport zone.
    #[must_use]
    pub fn is_full(&self) -> bool { self.layout_id == FULL_ID && self.zone_id == FULL_ID }
}

impl Default for ZoneRef {
    fn default() -> Self { Self::full() }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.layout_id, self.zone_id)
    }
}

// ============================================================================
// Snap Record
// ============================================================================

/// Pre-snap state of one snapped window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapRecord {
    /// Stable identity of the snapped window.
    pub identity: WindowIdentity,

    /// Geometry before the first snap. Never overwritten by re-snaps.
    pub original_geometry: Rect,

    /// Zone of the first snap.
    pub zone: ZoneRef,

    /// Content reference used to recreate the window if it gets closed.
    pub document_ref: Option<DocumentRef>,

    /// When the window was first snapped.
    pub snapped_at: SystemTime,

    /// Whether the host currently reports the window as open.
    pub is_open: bool,
}

impl SnapRecord {
    /// Create a record for a window that is open right now.
    #[must_use]
    pub fn new(
        identity: WindowIdentity,
        original_geometry: Rect,
        zone: ZoneRef,
        document_ref: Option<DocumentRef>,
    ) -> Self {
        Self {
            identity,
            original_geometry,
            zone,
            document_ref,
            snapped_at: SystemTime::now(),
            is_open: true,
        }
    }
}

/// State of the maximize/restore button in a window header.
///
/// Always derived from the registry, never read back as truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderAffordance {
    /// Window is not snapped; the button snaps it to the full viewport.
    #[default]
    Maximize,

    /// Window is snapped; the button restores its original geometry.
    Restore,
}

impl HeaderAffordance {
    /// Returns the affordance as a static kebab-case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maximize => "maximize",
            Self::Restore => "restore",
        }
    }

    /// Affordance for a window with the given snap status.
    #[must_use]
    pub const fn for_snapped(is_snapped: bool) -> Self {
        if is_snapped { Self::Restore } else { Self::Maximize }
    }
}

// ============================================================================
// Tests
// ============================================================================
