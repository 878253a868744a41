//! JSON/YAML output for single-record detail views

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{MeshError, Result};

/// Serialize a value in the requested structured format
pub fn to_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| MeshError::Io(format!("Failed to encode JSON: {}", e))),
        OutputFormat::Yaml => serde_yml::to_string(value)
            .map_err(|e| MeshError::Io(format!("Failed to encode YAML: {}", e))),
    }
}

/// Print a value in the requested structured format
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let text = to_structured(value, format)?;
    println!("{}", text.trim_end());
    Ok(())
}
