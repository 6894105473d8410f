//! Point-in-time copy of the store for view and run-request builders.
//!
//! A snapshot carries both the raw fields and the derived aggregates so
//! consumers never need to recompute anything. It is an in-process value;
//! nothing here writes to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ParamError, Result};
use crate::site::{SiteInformation, StandDensity};
use crate::species::{SpeciesGroup, SpeciesList};
use crate::store::ModelParameterStore;
use crate::types::DerivedBy;

/// Serializable copy of every store field plus derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSnapshot {
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
    /// How the species percentages were derived.
    pub derived_by: Option<DerivedBy>,
    /// The six species rows as entered.
    pub species_list: SpeciesList,
    /// Groups as of the last recompute.
    pub species_groups: Vec<SpeciesGroup>,
    /// Top group code as of the last recompute.
    pub highest_percent_species: Option<String>,
    /// Species used for site curves.
    pub selected_site_species: Option<String>,
    /// Floored sum of all row percents.
    #[serde(with = "crate::types::non_finite")]
    pub total_species_percent: f64,
    /// Plain sum of group percents.
    #[serde(with = "crate::types::non_finite")]
    pub total_species_group_percent: f64,
    /// Whether the species total exceeds 100.
    pub is_over_total_percent: bool,
    /// Whether rows changed after the groups were built.
    pub groups_are_stale: bool,
    /// Site information panel.
    pub site: SiteInformation,
    /// Stand density panel.
    pub density: StandDensity,
}

impl ParameterSnapshot {
    /// Render as pretty-printed JSON.
    ///
    /// Non-finite numbers are written as `"NaN"`, `"Infinity"` or
    /// `"-Infinity"` so the output always parses back.
    ///
    /// # Errors
    /// Returns `ParamError::Serialization` if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ParamError::Serialization(e.to_string()))
    }

    /// Parse a snapshot previously rendered with [`Self::to_json`].
    ///
    /// # Errors
    /// Returns `ParamError::Serialization` on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParamError::Serialization(e.to_string()))
    }
}

impl ModelParameterStore {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            captured_at: Utc::now(),
            derived_by: self.derived_by(),
            species_list: self.species_list().clone(),
            species_groups: self.species_groups().to_vec(),
            highest_percent_species: self.highest_percent_species().map(str::to_string),
            selected_site_species: self.selected_site_species().map(str::to_string),
            total_species_percent: self.total_species_percent(),
            total_species_group_percent: self.total_species_group_percent(),
            is_over_total_percent: self.is_over_total_percent(),
            groups_are_stale: self.groups_are_stale(),
            site: self.site().clone(),
            density: self.density().clone(),
        }
    }
}
