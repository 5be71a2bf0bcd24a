//! Snapzone - snap-to-zone layout management for floating panel windows.
//!
//! The library holds the snap engine (layouts, registry, drag tracking and the
//! controller) behind host traits, plus the inspection CLI used by the
//! `snapzone` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod modules;
pub mod schema;

pub use modules::snap;
