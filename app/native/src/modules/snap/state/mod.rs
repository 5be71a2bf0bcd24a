//! State module for the snap system.
//!
//! This module contains:
//! - Core types (`Rect`, `Point`, `Viewport`, `WindowIdentity`, `SnapRecord`, etc.)
//! - The `SnapRegistry` holding pre-snap geometry keyed by identity

mod registry;
mod types;

pub use registry::SnapRegistry;
pub use types::{
    DocumentRef, HeaderAffordance, Point, Rect, SnapRecord, Viewport, WindowHandle,
    WindowIdentity, ZoneRef,
};
