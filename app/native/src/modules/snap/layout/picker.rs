//! Zone picker geometry.
//!
//! The overlay shown near the top edge during a drag renders one thumbnail per
//! layout; each thumbnail is split into the layout's zones. This module
//! computes where those thumbnails and cells are on screen and answers "which
//! zone is under this point", standing in for the host's `elementFromPoint`.
//!
//! # Arrangement
//!
//! Thumbnails share one width and take the viewport's aspect ratio. They are
//! laid out left to right, centred, wrapping into further rows. Rows that
//! would extend below the overlay band are dropped.

use super::{Layout, zone_rect};
use crate::config::PickerConfig;
use crate::modules::snap::constants::picker::CELL_INSET;
use crate::modules::snap::state::{Point, Rect, Viewport, ZoneRef};

/// One selectable zone cell inside a thumbnail.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerCell {
    /// The zone this cell selects.
    pub zone: ZoneRef,

    /// On-screen bounds of the cell.
    pub bounds: Rect,
}

/// One layout thumbnail in the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerThumbnail {
    /// Layout shown by this thumbnail.
    pub layout_id: String,

    /// On-screen bounds of the thumbnail.
    pub bounds: Rect,

    /// Zone cells in reading order.
    pub cells: Vec<PickerCell>,
}

/// Geometry of the zone-picker overlay for one viewport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZonePicker {
    thumbnails: Vec<PickerThumbnail>,
}

impl ZonePicker {
    /// Lay out thumbnails for `layouts` inside the overlay band.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn build(
        viewport: Viewport,
        layouts: &[Layout],
        config: &PickerConfig,
        band_height: f64,
    ) -> Self {
        if layouts.is_empty() || !viewport.bounds().is_valid() {
            return Self::default();
        }

        let thumb_width = config.thumbnail_width.min(viewport.width);
        let thumb_height = thumb_width * viewport.height / viewport.width;
        let thumb_viewport = Viewport::new(thumb_width, thumb_height);
        let gap = config.gap;

        let available = (viewport.width - 2.0 * gap).max(thumb_width);
        let per_row = (((available + gap) / (thumb_width + gap)).floor() as usize).max(1);

        let mut thumbnails = Vec::with_capacity(layouts.len());
        for (row_index, row) in layouts.chunks(per_row).enumerate() {
            let y = (row_index as f64).mul_add(thumb_height + gap, config.top_padding);
            if y + thumb_height > band_height {
                tracing::debug!(
                    dropped = layouts.len() - thumbnails.len(),
                    "snap: picker rows exceed overlay band"
                );
                break;
            }

            let count = row.len() as f64;
            let row_width = count.mul_add(thumb_width, (count - 1.0) * gap);
            let x0 = (viewport.width - row_width) / 2.0;

            for (col_index, layout) in row.iter().enumerate() {
                let x = (col_index as f64).mul_add(thumb_width + gap, x0);
                let bounds = Rect::new(x, y, thumb_width, thumb_height);
                thumbnails.push(PickerThumbnail {
                    layout_id: layout.id.clone(),
                    bounds,
                    cells: thumbnail_cells(layout, bounds, thumb_viewport),
                });
            }
        }

        Self { thumbnails }
    }

    /// All thumbnails in display order.
    #[must_use]
    pub fn thumbnails(&self) -> &[PickerThumbnail] { &self.thumbnails }

    /// Returns true if nothing is laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.thumbnails.is_empty() }

    /// The zone under `point`, if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ZoneRef> {
        self.thumbnails
            .iter()
            .filter(|t| t.bounds.contains(point))
            .flat_map(|t| t.cells.iter())
            .find(|c| c.bounds.contains(point))
            .map(|c| c.zone.clone())
    }

    /// The picker cell for a zone, if it is shown.
    #[must_use]
    pub fn cell(&self, zone: &ZoneRef) -> Option<&PickerCell> {
        self.thumbnails
            .iter()
            .filter(|t| t.layout_id == zone.layout_id)
            .flat_map(|t| t.cells.iter())
            .find(|c| &c.zone == zone)
    }
}

/// Cells of one thumbnail, inset so neighbouring cells never touch.
fn thumbnail_cells(layout: &Layout, bounds: Rect, thumb_viewport: Viewport) -> Vec<PickerCell> {
    let half = CELL_INSET / 2.0;
    layout
        .zones
        .iter()
        .filter_map(|zone| {
            let local = zone_rect(layout, &zone.id, thumb_viewport)?;
            Some(PickerCell {
                zone: layout.zone_ref(zone),
                bounds: Rect::new(
                    bounds.x + local.x + half,
                    bounds.y + local.y + half,
                    (local.width - CELL_INSET).max(0.0),
                    (local.height - CELL_INSET).max(0.0),
                ),
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::snap::layout::layouts;

    fn picker_1080p() -> ZonePicker {
        let viewport = Viewport::new(1920.0, 1080.0);
        ZonePicker::build(viewport, &layouts(viewport), &PickerConfig::default(), 250.0)
    }

    #[test]
    fn test_single_centred_row() {
        let picker = picker_1080p();
        assert_eq!(picker.thumbnails().len(), 12);

        // 12 thumbnails * 120 + 11 gaps * 12 = 1572 wide, centred in 1920
        let first = &picker.thumbnails()[0];
        assert_eq!(first.layout_id, "full");
        assert!(first.bounds.approx_eq(&Rect::new(174.0, 16.0, 120.0, 67.5), 1e-9));
    }

    #[test]
    fn test_hit_full_zone() {
        let picker = picker_1080p();
        assert_eq!(picker.hit_test(Point::new(200.0, 40.0)), Some(ZoneRef::full()));
    }

    #[test]
    fn test_hit_split_zones() {
        let picker = picker_1080p();
        // split-2 thumbnail starts at x = 174 + 132 = 306
        assert_eq!(
            picker.hit_test(Point::new(320.0, 40.0)),
            Some(ZoneRef::new("split-2", "left"))
        );
        assert_eq!(
            picker.hit_test(Point::new(380.0, 40.0)),
            Some(ZoneRef::new("split-2", "right"))
        );
    }

    #[test]
    fn test_inset_between_cells_misses() {
        let picker = picker_1080p();
        assert_eq!(picker.hit_test(Point::new(366.0, 40.0)), None);
    }

    #[test]
    fn test_outside_thumbnails_misses() {
        let picker = picker_1080p();
        assert_eq!(picker.hit_test(Point::new(200.0, 200.0)), None);
        assert_eq!(picker.hit_test(Point::new(10.0, 40.0)), None);
    }

    #[test]
    fn test_cells_stay_inside_thumbnails() {
        for thumbnail in picker_1080p().thumbnails() {
            for cell in &thumbnail.cells {
                assert!(cell.bounds.x >= thumbnail.bounds.x);
                assert!(cell.bounds.y >= thumbnail.bounds.y);
                assert!(
                    cell.bounds.x + cell.bounds.width
                        <= thumbnail.bounds.x + thumbnail.bounds.width + 1e-9
                );
            }
        }
    }

    #[test]
    fn test_wraps_and_drops_rows_outside_band() {
        let viewport = Viewport::new(800.0, 600.0);
        let config = PickerConfig {
            thumbnail_width: 300.0,
            ..PickerConfig::default()
        };
        // Six layouts of 300×225 thumbnails: two per row, only one row fits in 250px
        let all = layouts(Viewport::new(1280.0, 720.0));
        let picker = ZonePicker::build(viewport, &all, &config, 250.0);
        assert_eq!(picker.thumbnails().len(), 2);
    }

    #[test]
    fn test_cell_lookup() {
        let picker = picker_1080p();
        let zone = ZoneRef::new("grid-2x2", "r1c2");
        let cell = picker.cell(&zone).unwrap();
        assert_eq!(cell.zone, zone);
        assert!(picker.cell(&ZoneRef::new("grid-9x9", "r1c1")).is_none());
    }

    #[test]
    fn test_empty_inputs() {
        let picker =
            ZonePicker::build(Viewport::new(0.0, 0.0), &[], &PickerConfig::default(), 250.0);
        assert!(picker.is_empty());
        assert_eq!(picker.hit_test(Point::new(1.0, 1.0)), None);
    }
}
