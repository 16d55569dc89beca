use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::template::VariableValue;

/// Encoding of a variables file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariablesFormat {
    Json,
    Yaml,
}

impl VariablesFormat {
    /// `.json` files are read as JSON, everything else as YAML (a superset of JSON).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => VariablesFormat::Json,
            _ => VariablesFormat::Yaml,
        }
    }
}

/// Parse a mapping of variable name to value. `null` entries are left unbound.
pub fn parse_variables(
    text: &str,
    format: VariablesFormat,
) -> Result<HashMap<String, VariableValue>> {
    let raw: HashMap<String, Option<VariableValue>> = match format {
        VariablesFormat::Json => serde_json::from_str(text).context("Invalid JSON variables")?,
        VariablesFormat::Yaml => serde_yaml::from_str(text).context("Invalid YAML variables")?,
    };

    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect())
}

pub fn load_variables(path: &Path) -> Result<HashMap<String, VariableValue>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read variables file {}", path.display()))?;
    parse_variables(&text, VariablesFormat::from_path(path))
        .with_context(|| format!("Could not load variables from {}", path.display()))
}

/// Parse a `name=value` binding into a scalar variable
pub fn parse_binding(binding: &str) -> Result<(String, VariableValue)> {
    let Some((name, value)) = binding.split_once('=') else {
        bail!("Invalid binding '{}': expected NAME=VALUE", binding);
    };
    if name.is_empty() {
        bail!("Invalid binding '{}': variable name is empty", binding);
    }
    Ok((name.to_string(), VariableValue::from(value)))
}
