//! Form-level configuration.
//!
//! Extends the core `ParamsConfig` with a `[form]` table. Both live in the
//! same TOML file:
//!
//! ```toml
//! [form]
//! auto_regroup = true
//!
//! [input]
//! numeric_policy = "lenient"
//! ```

use serde::{Deserialize, Serialize};
use vdyp_params_core::ParamsConfig;

use crate::error::{FormError, Result};

/// Settings for how form events drive the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    /// Rebuild species groups after every species row edit.
    #[serde(default = "default_true")]
    pub auto_regroup: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self { auto_regroup: true }
    }
}

/// Combined form and store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    /// Form layer settings.
    #[serde(default)]
    pub form: FormSettings,
    /// Store settings.
    #[serde(flatten)]
    pub params: ParamsConfig,
}

impl FormConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `FormError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FormError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }
}

fn default_true() -> bool {
    true
}
