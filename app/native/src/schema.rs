//! JSON Schema generation for the configuration file.

use crate::config::SnapConfig;

/// Value of the schema's `$id`.
const SCHEMA_ID: &str = "snapzone.schema.json";

/// Generates a JSON Schema for the Snapzone configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(SnapConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_ID));
    }

    schema
}

/// Returns the configuration schema as pretty-printed JSON.
#[must_use]
pub fn print_schema() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}
