//! Layout CLI commands.
//!
//! Inspect the layouts generated for a viewport size and the pixel rectangle
//! of any zone, without a running host.

use colored::Colorize;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::ViewportArgs;
use crate::cli::output::{self, format_px};
use crate::config;
use crate::error::SnapzoneError;
use crate::modules::snap::{Layout, LayoutCatalog, Rect, SnapError, ZoneRef};

/// Maximum width of the zone list column.
const ZONE_COLUMN_WIDTH: usize = 48;

/// One zone with its rectangle, as printed by `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ZoneOutput<'a> {
    id: &'a str,
    rect: Rect,
}

/// One layout with resolved zone rectangles, as printed by `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOutput<'a> {
    id: &'a str,
    name: &'a str,
    columns: u32,
    rows: u32,
    zones: Vec<ZoneOutput<'a>>,
}

fn layout_output<'a>(
    catalog: &LayoutCatalog,
    layout: &'a Layout,
    args: ViewportArgs,
) -> LayoutOutput<'a> {
    let zones = layout
        .zones
        .iter()
        .filter_map(|zone| {
            let rect = catalog.rect(&layout.zone_ref(zone), args.viewport())?;
            Some(ZoneOutput { id: &zone.id, rect })
        })
        .collect();

    LayoutOutput {
        id: &layout.id,
        name: &layout.name,
        columns: layout.columns,
        rows: layout.rows,
        zones,
    }
}

/// Execute the `layouts` command.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub fn execute_layouts(
    args: ViewportArgs,
    json: bool,
    detailed: bool,
) -> Result<(), SnapzoneError> {
    #[derive(Tabled)]
    struct LayoutRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Grid")]
        grid: String,
        #[tabled(rename = "Zones")]
        zones: String,
    }

    #[derive(Tabled)]
    struct ZoneRow {
        #[tabled(rename = "Layout")]
        layout: String,
        #[tabled(rename = "Zone")]
        zone: String,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Size")]
        size: String,
    }

    let mut catalog = LayoutCatalog::new();
    catalog.generate(args.viewport());
    let layouts = catalog.layouts();

    if json {
        let data: Vec<LayoutOutput<'_>> =
            layouts.iter().map(|layout| layout_output(&catalog, layout, args)).collect();
        output::print_json(&serde_json::to_value(data)?);
        return Ok(());
    }

    let title = format!(
        "Layouts for {} ({})",
        output::format_size(args.width, args.height),
        layouts.len()
    );
    println!("{}", title.bold());

    if detailed {
        let rows: Vec<ZoneRow> = layouts
            .iter()
            .flat_map(|layout| {
                layout_output(&catalog, layout, args).zones.into_iter().map(move |zone| ZoneRow {
                    layout: layout.id.clone(),
                    zone: zone.id.to_string(),
                    position: output::format_origin(&zone.rect),
                    size: output::format_size(zone.rect.width, zone.rect.height),
                })
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..4)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    } else {
        let rows: Vec<LayoutRow> = layouts
            .iter()
            .map(|layout| LayoutRow {
                id: layout.id.clone(),
                name: layout.name.clone(),
                grid: format!("{}x{}", layout.columns, layout.rows),
                zones: output::zone_list(
                    layout.zones.iter().map(|z| z.id.as_str()),
                    ZONE_COLUMN_WIDTH,
                ),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..3)).with(Alignment::center()))
            .to_string();
        println!("{table}");
    }

    print_viewport_note(args);
    Ok(())
}

/// Execute the `rect` command.
///
/// # Errors
///
/// Returns [`SnapzoneError::SnapError`] if the layout is not offered for this
/// viewport or has no such zone.
pub fn execute_rect(
    layout_id: &str,
    zone_id: &str,
    args: ViewportArgs,
    json: bool,
) -> Result<(), SnapzoneError> {
    #[derive(Tabled)]
    struct RectRow {
        #[tabled(rename = "Zone")]
        zone: String,
        #[tabled(rename = "X")]
        x: String,
        #[tabled(rename = "Y")]
        y: String,
        #[tabled(rename = "Width")]
        width: String,
        #[tabled(rename = "Height")]
        height: String,
        #[tabled(rename = "Snappable")]
        snappable: String,
    }

    let zone = ZoneRef::new(layout_id, zone_id);
    let mut catalog = LayoutCatalog::new();
    catalog.generate(args.viewport());

    let rect = catalog.rect(&zone, args.viewport()).ok_or_else(|| SnapError::ZoneNotFound {
        layout_id: layout_id.to_string(),
        zone_id: zone_id.to_string(),
    })?;

    if json {
        output::print_json(&serde_json::to_value(rect)?);
        return Ok(());
    }

    let snappable = config::get_config().allows_viewport(args.width, args.height);
    let row = RectRow {
        zone: zone.to_string(),
        x: format_px(rect.x),
        y: format_px(rect.y),
        width: format_px(rect.width),
        height: format_px(rect.height),
        snappable: output::format_bool(snappable),
    };

    let table = Table::new([row])
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..5)).with(Alignment::right()))
        .with(Modify::new(Columns::new(5..6)).with(Alignment::center()))
        .to_string();
    println!("{table}");
    Ok(())
}

fn print_viewport_note(args: ViewportArgs) {
    let config = config::get_config();
    if !config.allows_viewport(args.width, args.height) {
        let note = format!(
            "Snapping is disabled below {}.",
            output::format_size(config.min_viewport.width, config.min_viewport.height)
        );
        println!("{}", note.dimmed());
    }
}
