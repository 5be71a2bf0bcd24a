//! Terminal formatting for the layout commands.
//!
//! Pixel values, zone rectangles and zone lists for the tables, and a colored
//! pretty-printer for `--json`.

use colored::Colorize;
use serde_json::Value;

use crate::modules::snap::Rect;

const INDENT: &str = "  ";

// ============================================================================
// Pixels and Rects
// ============================================================================

/// Formats a pixel value without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_px(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value:.2}") }
}

/// `WIDTHxHEIGHT` in pixels.
#[must_use]
pub fn format_size(width: f64, height: f64) -> String {
    format!("{}x{}", format_px(width), format_px(height))
}

/// Top-left corner of a rect as `x, y`.
#[must_use]
pub fn format_origin(rect: &Rect) -> String {
    format!("{}, {}", format_px(rect.x), format_px(rect.y))
}

/// Comma-separated zone ids, cut at the last whole id that fits in `max_width`.
#[must_use]
pub fn zone_list<'a>(ids: impl IntoIterator<Item = &'a str>, max_width: usize) -> String {
    let ids: Vec<&str> = ids.into_iter().collect();
    let mut out = String::new();

    for (shown, id) in ids.iter().enumerate() {
        let separator = if shown == 0 { "" } else { ", " };
        let rest = ids.len() - shown;
        let suffix = if rest > 1 { format!(", +{}", rest - 1) } else { String::new() };

        if out.len() + separator.len() + id.len() + suffix.len() > max_width && shown > 0 {
            out.push_str(&format!(", +{rest}"));
            return out;
        }
        out.push_str(separator);
        out.push_str(id);
    }
    out
}

/// Check mark or cross.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value { "✓".green().to_string() } else { "✗".red().to_string() }
}

// ============================================================================
// JSON
// ============================================================================

/// Prints `value` as indented, colored JSON.
pub fn print_json(value: &Value) {
    println!("{}", render_json(value));
}

/// Pretty-prints `value` with keys cyan, strings green, numbers yellow and
/// literals magenta.
#[must_use]
pub fn render_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(s) => out.push_str(&quoted(s).green().to_string()),
        Value::Array(items) => {
            write_nested(out, ('[', ']'), depth, items.iter().map(|item| (None, item)));
        }
        Value::Object(map) => {
            write_nested(out, ('{', '}'), depth, map.iter().map(|(k, v)| (Some(k.as_str()), v)));
        }
    }
}

fn write_nested<'a>(
    out: &mut String,
    (open, close): (char, char),
    depth: usize,
    entries: impl ExactSizeIterator<Item = (Option<&'a str>, &'a Value)>,
) {
    let count = entries.len();
    out.push_str(&open.to_string().bold().to_string());
    if count == 0 {
        out.push_str(&close.to_string().bold().to_string());
        return;
    }

    out.push('\n');
    for (i, (key, value)) in entries.enumerate() {
        out.push_str(&INDENT.repeat(depth + 1));
        if let Some(key) = key {
            out.push_str(&quoted(key).cyan().to_string());
            out.push_str(": ");
        }
        write_value(out, value, depth + 1);
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&close.to_string().bold().to_string());
}

fn quoted(s: &str) -> String { serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\"")) }
