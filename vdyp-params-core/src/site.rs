//! Site information and stand density panels.
//!
//! These are independent optional scalars. Nothing here is cross-checked
//! and nothing here feeds species grouping.

use serde::{Deserialize, Serialize};

use crate::config::DefaultsConfig;
use crate::types::{AgeType, SiteSpeciesValues};

/// Fields of the site information panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInformation {
    /// BEC zone alias, e.g. `"IDF"`.
    pub bec_zone: Option<String>,
    /// Ecological zone.
    pub eco_zone: Option<String>,
    /// Whether secondary species height is included.
    pub inc_secondary_height: bool,
    /// Site index curve selector.
    pub site_index_curve: Option<String>,
    /// Whether site values are computed or supplied.
    pub site_species_values: Option<SiteSpeciesValues>,
    /// Reference point for `age`.
    pub age_type: Option<AgeType>,
    /// Stand age in years.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub age: Option<f64>,
    /// Dominant height in metres.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub height: Option<f64>,
    /// Site index at breast-height age 50.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub bha50_site_index: Option<f64>,
}

impl SiteInformation {
    /// Blank panel with configured initial values.
    #[must_use]
    pub fn with_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            inc_secondary_height: defaults.inc_secondary_height,
            ..Self::default()
        }
    }
}

/// Fields of the stand density panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandDensity {
    /// Percent of the polygon that is stockable.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub percent_stockable_area: Option<f64>,
    /// Basal area in m²/ha.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub basal_area: Option<f64>,
    /// Trees per hectare.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub trees_per_hectare: Option<f64>,
    /// Minimum DBH limit in cm.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub minimum_dbh_limit: Option<f64>,
    /// Percent crown closure.
    #[serde(default, with = "crate::types::non_finite::option")]
    pub percent_crown_closure: Option<f64>,
}

impl StandDensity {
    /// Blank panel with configured initial values.
    #[must_use]
    pub fn with_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            percent_stockable_area: defaults.percent_stockable_area,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_stockable_area_only() {
        let density = StandDensity::with_defaults(&DefaultsConfig::default());
        assert_eq!(density.percent_stockable_area, Some(0.0));
        assert_eq!(density.basal_area, None);
        assert_eq!(density.percent_crown_closure, None);
    }

    #[test]
    fn site_defaults_respect_secondary_height_switch() {
        let defaults = DefaultsConfig {
            inc_secondary_height: true,
            ..DefaultsConfig::default()
        };
        let site = SiteInformation::with_defaults(&defaults);
        assert!(site.inc_secondary_height);
        assert_eq!(site.bec_zone, None);
    }
}
