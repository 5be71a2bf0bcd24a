//! Layout generation - which grid layouts fit a viewport.
//!
//! Layouts are regenerated from the viewport size whenever it changes. A layout
//! is only offered when each of its zones stays at least
//! [`MIN_ZONE_WIDTH`] × [`MIN_ZONE_HEIGHT`] pixels.
//!
//! # Layout Rules
//!
//! - `full` is always emitted
//! - `split-N` (N columns) needs `floor(width / 300) >= N`; four columns also
//!   need a 1920px wide viewport, six columns a 2560px wide one
//! - `rows-M` (M rows) needs `floor(height / 200) >= M`; three rows also need
//!   a 1080px tall viewport
//! - `grid-CxR` is emitted when both the column and row gates pass
//!
//! # Examples
//!
//! - 1280×720: full, split-2, split-3, rows-2, grid-2x2, grid-3x2
//! - 1920×1080: adds split-4, rows-3, grid-4x2 and the three-row grids

use smallvec::SmallVec;

use super::{Layout, Zone, ZoneList};
use crate::modules::snap::constants::zone::{
    COLUMN_COUNTS, FOUR_COLUMN_MIN_WIDTH, FULL_ID, MIN_ZONE_HEIGHT, MIN_ZONE_WIDTH, ROW_COUNTS,
    SIX_COLUMN_MIN_WIDTH, THREE_ROW_MIN_HEIGHT,
};
use crate::modules::snap::state::{Rect, Viewport};

/// Largest column count whose zones stay wide enough.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn max_columns(width: f64) -> u32 { (width / MIN_ZONE_WIDTH).floor().max(0.0) as u32 }

/// Largest row count whose zones stay tall enough.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn max_rows(height: f64) -> u32 { (height / MIN_ZONE_HEIGHT).floor().max(0.0) as u32 }

/// Returns true if an `n`-column layout is usable on this viewport.
#[must_use]
pub fn columns_fit(n: u32, viewport: Viewport) -> bool {
    if max_columns(viewport.width) < n {
        return false;
    }
    match n {
        4 => viewport.width >= FOUR_COLUMN_MIN_WIDTH,
        6 => viewport.width >= SIX_COLUMN_MIN_WIDTH,
        _ => true,
    }
}

/// Returns true if an `m`-row layout is usable on this viewport.
#[must_use]
pub fn rows_fit(m: u32, viewport: Viewport) -> bool {
    if max_rows(viewport.height) < m {
        return false;
    }
    m != 3 || viewport.height >= THREE_ROW_MIN_HEIGHT
}

/// Generate every layout that fits the viewport.
///
/// The single-cell `full` layout comes first and is always present.
#[must_use]
pub fn layouts(viewport: Viewport) -> Vec<Layout> {
    let columns: SmallVec<[u32; 4]> =
        COLUMN_COUNTS.iter().copied().filter(|&n| columns_fit(n, viewport)).collect();
    let rows: SmallVec<[u32; 2]> =
        ROW_COUNTS.iter().copied().filter(|&m| rows_fit(m, viewport)).collect();

    let mut result = Vec::with_capacity(1 + columns.len() + rows.len() * (1 + columns.len()));
    result.push(full_layout());
    result.extend(columns.iter().map(|&n| column_layout(n)));
    result.extend(rows.iter().map(|&m| row_layout(m)));
    for &m in &rows {
        result.extend(columns.iter().map(|&n| grid_layout(n, m)));
    }

    tracing::trace!(
        width = viewport.width,
        height = viewport.height,
        count = result.len(),
        "snap: generated layouts"
    );
    result
}

/// Pixel rectangle of `zone_id` inside `layout` for the given viewport.
///
/// Returns `None` if the layout has no such zone.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn zone_rect(layout: &Layout, zone_id: &str, viewport: Viewport) -> Option<Rect> {
    let zone = layout.zone(zone_id)?;
    let col_width = viewport.width / f64::from(layout.columns);
    let row_height = viewport.height / f64::from(layout.rows);

    Some(Rect::new(
        f64::from(zone.col) * col_width,
        f64::from(zone.row) * row_height,
        col_width * f64::from(zone.col_span),
        row_height * f64::from(zone.row_span),
    ))
}

// ============================================================================
// Layout Builders
// ============================================================================

/// The single-cell layout covering the whole viewport.
#[must_use]
pub fn full_layout() -> Layout {
    let mut zones = ZoneList::new();
    zones.push(Zone::cell(FULL_ID, 0, 0));
    Layout::new(FULL_ID, "Full", 1, 1, zones)
}

fn column_layout(n: u32) -> Layout {
    let zones = (0..n).map(|col| Zone::cell(column_zone_id(n, col), col, 0)).collect();
    Layout::new(format!("split-{n}"), format!("{n} Columns"), n, 1, zones)
}

fn row_layout(m: u32) -> Layout {
    let zones = (0..m).map(|row| Zone::cell(row_zone_id(m, row), 0, row)).collect();
    Layout::new(format!("rows-{m}"), format!("{m} Rows"), 1, m, zones)
}

fn grid_layout(columns: u32, rows: u32) -> Layout {
    let zones = (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |col| Zone::cell(format!("r{}c{}", row + 1, col + 1), col, row))
        })
        .collect();
    Layout::new(
        format!("grid-{columns}x{rows}"),
        format!("{columns}×{rows} Grid"),
        columns,
        rows,
        zones,
    )
}

fn column_zone_id(n: u32, col: u32) -> String {
    match (n, col) {
        (2, 0) | (3, 0) => "left".to_string(),
        (2, 1) | (3, 2) => "right".to_string(),
        (3, 1) => "center".to_string(),
        _ => format!("col-{}", col + 1),
    }
}

fn row_zone_id(m: u32, row: u32) -> String {
    match (m, row) {
        (_, 0) => "top".to_string(),
        (3, 1) => "middle".to_string(),
        _ => "bottom".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
