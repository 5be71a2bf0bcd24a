//! Feature modules for Snapzone.
//!
//! - [`snap`] - Drag-to-snap zones, layout generation and restore

pub mod snap;
