//! Configuration for the parameter store.
//!
//! Maps to a `vdyp-params.toml` file. Every key is optional.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamsConfig {
    /// How numeric text typed into the form is accepted.
    #[serde(default)]
    pub input: InputConfig,
    /// Initial values for fields that do not start blank.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ParamsConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ParamError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::ParamError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Policy for numeric text entered into percent fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Store any text; non-numeric text counts as zero in totals.
    #[default]
    Lenient,
    /// Reject text that is not a finite number.
    Strict,
}

/// Input handling settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Numeric text policy.
    #[serde(default)]
    pub numeric_policy: NumericPolicy,
}

/// Initial field values applied on creation and on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Starting percent stockable area; `None` starts the field blank.
    #[serde(default = "default_percent_stockable_area")]
    pub percent_stockable_area: Option<f64>,
    /// Starting state of the "include secondary height" switch.
    #[serde(default)]
    pub inc_secondary_height: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            percent_stockable_area: default_percent_stockable_area(),
            inc_secondary_height: false,
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Compact,
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_percent_stockable_area() -> Option<f64> {
    Some(0.0)
}

fn default_log_level() -> String {
    "info".to_string()
}
