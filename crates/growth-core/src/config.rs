//! Config loading: flat `key=value` text files (and YAML), plus validation.
//!
//! Recognised keys are `base`, `exponent` (or `expo`), `logfile` and
//! `enable_logging`, in either format. Anything else is ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{GrowthError, Result};
use crate::models::{ConfigOverrides, GrowthConfig};

/// Exponents above this trigger a runtime advisory.
pub const LARGE_EXPONENT: i32 = 100;

/// Non-fatal findings from [`GrowthConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The session will take roughly `estimated_secs` seconds.
    LargeExponent { exponent: i32, estimated_secs: u64 },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::LargeExponent {
                exponent,
                estimated_secs,
            } => write!(
                f,
                "Large exponent ({exponent}) may take a long time! Estimated time: {estimated_secs} seconds"
            ),
        }
    }
}

impl GrowthConfig {
    /// Reject configs that cannot run and flag ones that will run slowly.
    pub fn validate(&self) -> Result<Option<Advisory>> {
        if self.exponent < 1 {
            return Err(GrowthError::ExponentTooSmall(self.exponent));
        }
        if self.exponent > LARGE_EXPONENT {
            // one paced step per index, for each of the two sequences
            return Ok(Some(Advisory::LargeExponent {
                exponent: self.exponent,
                estimated_secs: self.exponent as u64 * 2,
            }));
        }
        Ok(None)
    }
}

/// Parse `key=value` lines into overrides.
pub fn parse_overrides(text: &str) -> Result<ConfigOverrides> {
    let mut overrides = ConfigOverrides::default();

    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim_matches([' ', '\t']);
        let value = value.trim_matches([' ', '\t']);
        let line_no = idx + 1;

        apply_entry(&mut overrides, key, value, || GrowthError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            line: line_no,
        })?;
    }

    Ok(overrides)
}

/// Parse a YAML mapping into overrides, entry by entry in document order,
/// with the same key handling as the `key=value` format.
pub fn parse_yaml_overrides(text: &str) -> Result<ConfigOverrides> {
    let mut overrides = ConfigOverrides::default();
    // An empty document deserializes to null; treat it as "no overrides".
    if text.trim().is_empty() {
        return Ok(overrides);
    }

    let mapping: Mapping = serde_yaml::from_str(text)?;
    for (key, value) in &mapping {
        let Some(key) = key.as_str() else {
            debug!(?key, "Ignoring non-string config key");
            continue;
        };
        let value = match value {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            other => serde_yaml::to_string(other)?.trim_end().to_string(),
        };

        apply_entry(&mut overrides, key, &value, || GrowthError::InvalidEntry {
            key: key.to_string(),
            value: value.clone(),
        })?;
    }

    Ok(overrides)
}

/// Apply one `key`/`value` pair; later keys overwrite earlier ones.
fn apply_entry(
    overrides: &mut ConfigOverrides,
    key: &str,
    value: &str,
    invalid: impl Fn() -> GrowthError,
) -> Result<()> {
    match key {
        "base" => overrides.base = Some(value.parse().map_err(|_| invalid())?),
        "exponent" | "expo" => overrides.exponent = Some(value.parse().map_err(|_| invalid())?),
        "logfile" => overrides.logfile = Some(PathBuf::from(value)),
        "enable_logging" => overrides.enable_logging = Some(value == "true" || value == "1"),
        other => debug!(key = other, "Ignoring unknown config key"),
    }
    Ok(())
}

/// Parse `key=value` text on top of `defaults`.
pub fn parse_config_str(text: &str, defaults: GrowthConfig) -> Result<GrowthConfig> {
    let mut config = defaults;
    config.apply(parse_overrides(text)?);
    Ok(config)
}

/// Load a config file on top of `defaults`.
///
/// `.yaml` / `.yml` files are read as a YAML mapping with the same keys;
/// everything else goes through the `key=value` parser.
pub fn load_config_file(path: &Path, defaults: GrowthConfig) -> Result<GrowthConfig> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        // The file opened fine but is not text: a broken config, not a missing one.
        ErrorKind::InvalidData => GrowthError::Io(source),
        _ => GrowthError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let overrides = if is_yaml {
        parse_yaml_overrides(&content)?
    } else {
        parse_overrides(&content)?
    };

    let mut config = defaults;
    config.apply(overrides);
    Ok(config)
}
