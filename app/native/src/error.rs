//! Error types for Snapzone.
//!
//! This module provides the unified error type returned by the CLI. It
//! serializes as `{ "kind": ..., "message": ... }` so `--json` output can
//! carry errors too.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::modules::snap::SnapError;

/// Errors that can occur during application execution.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum SnapzoneError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Snap operation failed.
    #[error("Snap error: {0}")]
    SnapError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<serde_json::Error> for SnapzoneError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for SnapzoneError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<SnapError> for SnapzoneError {
    fn from(err: SnapError) -> Self { Self::SnapError(err.to_string()) }
}

impl From<String> for SnapzoneError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for SnapzoneError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
