//! Zone layouts for the snap system.
//!
//! This module provides:
//! - `generator` - which grid layouts fit a viewport and the rect of any zone
//! - `picker` - geometry of the zone-picker overlay and its hit-testing
//! - `LayoutCatalog` - the layout set generated for the current viewport

mod generator;
pub mod picker;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use generator::{columns_fit, full_layout, layouts, rows_fit, zone_rect};
pub use picker::{PickerCell, PickerThumbnail, ZonePicker};

use crate::modules::snap::state::{Rect, Viewport, ZoneRef};

/// Inline capacity for zone lists. Layouts up to 4×3 stay inline; the six
/// column grids spill to the heap.
pub const ZONE_INLINE_CAP: usize = 12;

/// Zone list type alias.
pub type ZoneList = SmallVec<[Zone; ZONE_INLINE_CAP]>;

/// One cell of a layout grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone identifier, unique within its layout.
    pub id: String,

    /// Column index (0-based).
    pub col: u32,

    /// Row index (0-based).
    pub row: u32,

    /// Number of columns spanned.
    pub col_span: u32,

    /// Number of rows spanned.
    pub row_span: u32,
}

impl Zone {
    /// Create a 1×1 zone at the given cell.
    #[must_use]
    pub fn cell(id: impl Into<String>, col: u32, row: u32) -> Self {
        Self {
            id: id.into(),
            col,
            row,
            col_span: 1,
            row_span: 1,
        }
    }
}

/// A named grid partition of the viewport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Layout identifier (e.g. `split-2`, `grid-3x2`).
    pub id: String,

    /// Human readable name.
    pub name: String,

    /// Number of grid columns.
    pub columns: u32,

    /// Number of grid rows.
    pub rows: u32,

    /// Zones in reading order.
    pub zones: ZoneList,
}

impl Layout {
    /// Create a new layout.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        columns: u32,
        rows: u32,
        zones: ZoneList,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            columns,
            rows,
            zones,
        }
    }

    /// Find a zone by id.
    #[must_use]
    pub fn zone(&self, zone_id: &str) -> Option<&Zone> { self.zones.iter().find(|z| z.id == zone_id) }

    /// Reference to one of this layout's zones.
    #[must_use]
    pub fn zone_ref(&self, zone: &Zone) -> ZoneRef { ZoneRef::new(&self.id, &zone.id) }
}

// ============================================================================
// Layout Catalog
// ============================================================================

/// The layout set generated for the current viewport.
///
/// Layouts are regenerated on every viewport change. Stored zone references
/// may therefore stop resolving after a resize; lookups then return `None`.
#[derive(Debug, Default)]
pub struct LayoutCatalog {
    viewport: Option<Viewport>,
    layouts: Vec<Layout>,
}

impl LayoutCatalog {
    /// Create an empty catalog. Only `full/full` resolves until `generate` runs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            viewport: None,
            layouts: Vec::new(),
        }
    }

    /// Regenerate the layouts for a viewport.
    pub fn generate(&mut self, viewport: Viewport) -> &[Layout] {
        if self.viewport != Some(viewport) {
            self.layouts = layouts(viewport);
            self.viewport = Some(viewport);
        }
        &self.layouts
    }

    /// Viewport the current layouts were generated for.
    #[must_use]
    pub const fn viewport(&self) -> Option<Viewport> { self.viewport }

    /// All generated layouts.
    #[must_use]
    pub fn layouts(&self) -> &[Layout] { &self.layouts }

    /// Find a generated layout by id.
    #[must_use]
    pub fn find(&self, layout_id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == layout_id)
    }

    /// Pixel rectangle for a zone.
    ///
    /// `full/full` always resolves to the whole viewport, even before any
    /// layout has been generated, so "maximize" works without a drag.
    #[must_use]
    pub fn rect(&self, zone: &ZoneRef, viewport: Viewport) -> Option<Rect> {
        if zone.is_full() {
            return Some(viewport.bounds());
        }
        self.find(&zone.layout_id)
            .and_then(|layout| zone_rect(layout, &zone.zone_id, viewport))
    }
}

// ============================================================================
// Tests
// ============================================================================
