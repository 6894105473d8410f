//! Species grouping and percent totals.
//!
//! Grouping merges rows that share a species code and orders the groups
//! by descending summed percent. Ties keep the order in which each code
//! first appeared in the table. A group whose percent is `NaN` (from
//! adding `Infinity` and `-Infinity` rows) sorts after every other group.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::SpeciesList;
use crate::types::coerce_lenient;

/// Aggregated percent for one species code across all rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesGroup {
    /// Group label (the species code).
    pub group: String,
    /// Summed percent of every row with this code.
    #[serde(with = "crate::types::non_finite")]
    pub percent: f64,
    /// Representative species used for site curves.
    pub site_species: String,
}

impl SpeciesGroup {
    /// Create a group whose representative species is its own code.
    #[must_use]
    pub fn new(code: impl Into<String>, percent: f64) -> Self {
        let code = code.into();
        Self {
            site_species: code.clone(),
            group: code,
            percent,
        }
    }
}

/// Build the sorted group list from the valid rows of `list`.
///
/// Rows with an empty/absent code or absent percent are skipped. Percent
/// values that are not numeric count as zero.
#[must_use]
pub fn group_species(list: &SpeciesList) -> Vec<SpeciesGroup> {
    let mut groups: Vec<SpeciesGroup> = Vec::new();

    for entry in list.valid_entries() {
        let Some(code) = entry.code() else { continue };
        let percent = coerce_lenient(entry.percent.as_ref());
        match groups.iter_mut().find(|g| g.group == code) {
            Some(group) => group.percent += percent,
            None => groups.push(SpeciesGroup::new(code, percent)),
        }
    }

    // Stable: equal percents stay in first-appearance order.
    groups.sort_by_key(|g| (g.percent.is_nan(), Reverse(OrderedFloat(g.percent))));
    groups
}

/// Sum of every row's percent, floored to one decimal place.
///
/// Unlike grouping, rows without a species code still count here.
#[must_use]
pub fn total_percent(list: &SpeciesList) -> f64 {
    let total: f64 = list
        .iter()
        .map(|entry| coerce_lenient(entry.percent.as_ref()))
        .sum();
    (total * 10.0).floor() / 10.0
}
