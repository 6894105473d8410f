//! The model parameter store: the single owner of all entry-screen state.
//!
//! View code reads fields through accessors and writes through setters.
//! Species groups are only rebuilt by an explicit call to
//! [`ModelParameterStore::recompute_species_groups`]; editing a species row
//! marks the groups stale but leaves them untouched.

use tracing::{debug, trace};

use crate::catalog::{self, BecRegion};
use crate::config::{NumericPolicy, ParamsConfig};
use crate::error::Result;
use crate::site::{SiteInformation, StandDensity};
use crate::species::{self, SpeciesEntry, SpeciesGroup, SpeciesList};
use crate::types::{DerivedBy, NumericInput, parse_strict};

/// Percent total above which the composition is flagged as over-allocated.
pub const MAX_TOTAL_PERCENT: f64 = 100.0;

/// All input state of the model parameter entry screen.
#[derive(Debug, Clone)]
pub struct ModelParameterStore {
    config: ParamsConfig,

    derived_by: Option<DerivedBy>,
    species_list: SpeciesList,
    species_groups: Vec<SpeciesGroup>,
    highest_percent_species: Option<String>,
    // Auto-populated from the top group, then free for the user to change.
    selected_site_species: Option<String>,

    site: SiteInformation,
    density: StandDensity,

    species_revision: u64,
    groups_revision: u64,
}

impl ModelParameterStore {
    /// Create a store with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ParamsConfig::default())
    }

    /// Create a store whose initial values and input policy come from `config`.
    #[must_use]
    pub fn with_config(config: ParamsConfig) -> Self {
        Self {
            site: SiteInformation::with_defaults(&config.defaults),
            density: StandDensity::with_defaults(&config.defaults),
            config,
            derived_by: None,
            species_list: SpeciesList::new(),
            species_groups: Vec::new(),
            highest_percent_species: None,
            selected_site_species: None,
            species_revision: 0,
            groups_revision: 0,
        }
    }

    /// The configuration this store was built with.
    #[must_use]
    pub fn config(&self) -> &ParamsConfig {
        &self.config
    }

    /// Return every field to its configured initial value.
    pub fn reset(&mut self) {
        debug!("Resetting model parameters");
        let config = std::mem::take(&mut self.config);
        *self = Self::with_config(config);
    }

    // -----------------------------------------------------------------------
    // Species panel
    // -----------------------------------------------------------------------

    /// How the species percentages were derived.
    #[must_use]
    pub fn derived_by(&self) -> Option<DerivedBy> {
        self.derived_by
    }

    /// Set how the species percentages were derived.
    pub fn set_derived_by(&mut self, derived_by: Option<DerivedBy>) {
        self.derived_by = derived_by;
    }

    /// The six species rows.
    #[must_use]
    pub fn species_list(&self) -> &SpeciesList {
        &self.species_list
    }

    /// Replace all six species rows at once.
    pub fn set_species_list(&mut self, list: SpeciesList) {
        self.species_list = list;
        self.species_revision += 1;
    }

    /// Replace the row in `slot`.
    ///
    /// # Errors
    /// Returns `ParamError::SlotOutOfRange` for an invalid slot.
    pub fn set_species_entry(&mut self, slot: usize, entry: SpeciesEntry) -> Result<()> {
        *self.species_list.get_mut(slot)? = entry;
        self.species_revision += 1;
        Ok(())
    }

    /// Set the species code of the row in `slot`.
    ///
    /// # Errors
    /// Returns `ParamError::SlotOutOfRange` for an invalid slot.
    pub fn set_species_code(&mut self, slot: usize, code: Option<String>) -> Result<()> {
        trace!(slot, code = ?code, "Species code edited");
        self.species_list.get_mut(slot)?.species = code;
        self.species_revision += 1;
        Ok(())
    }

    /// Set the percent of the row in `slot` to an already-typed value.
    ///
    /// # Errors
    /// Returns `ParamError::SlotOutOfRange` for an invalid slot.
    pub fn set_species_percent(&mut self, slot: usize, percent: Option<NumericInput>) -> Result<()> {
        trace!(slot, percent = ?percent, "Species percent edited");
        self.species_list.get_mut(slot)?.percent = percent;
        self.species_revision += 1;
        Ok(())
    }

    /// Set the percent of the row in `slot` from raw text.
    ///
    /// Under [`NumericPolicy::Lenient`] the text is stored as typed. Under
    /// [`NumericPolicy::Strict`] it must be a finite number and is stored
    /// as that number.
    ///
    /// # Errors
    /// Returns `ParamError::SlotOutOfRange` for an invalid slot, or
    /// `ParamError::InvalidNumber` when strict parsing fails. The row is
    /// unchanged on error.
    pub fn set_species_percent_text(&mut self, slot: usize, text: &str) -> Result<()> {
        self.species_list.get(slot)?;
        let value = match self.config.input.numeric_policy {
            NumericPolicy::Lenient => NumericInput::Text(text.to_string()),
            NumericPolicy::Strict => {
                NumericInput::Number(parse_strict(&format!("species[{slot}].percent"), text)?)
            }
        };
        self.set_species_percent(slot, Some(value))
    }

    /// Current derived groups, highest percent first.
    #[must_use]
    pub fn species_groups(&self) -> &[SpeciesGroup] {
        &self.species_groups
    }

    /// Code of the top group as of the last recompute.
    #[must_use]
    pub fn highest_percent_species(&self) -> Option<&str> {
        self.highest_percent_species.as_deref()
    }

    /// Species used for site curves.
    #[must_use]
    pub fn selected_site_species(&self) -> Option<&str> {
        self.selected_site_species.as_deref()
    }

    /// Override the site species. Stays as set until the next recompute.
    pub fn set_selected_site_species(&mut self, species: Option<String>) {
        self.selected_site_species = species;
    }

    /// Rebuild the species groups from the current rows.
    ///
    /// Sets both the highest-percent species and the selected site species
    /// to the top group's code, or clears both when no row is valid. Raw
    /// rows and the site/density panels are not touched.
    pub fn recompute_species_groups(&mut self) {
        self.species_groups = species::group_species(&self.species_list);

        let top = self.species_groups.first().map(|g| g.site_species.clone());
        self.highest_percent_species.clone_from(&top);
        self.selected_site_species = top;
        self.groups_revision = self.species_revision;

        debug!(
            groups = self.species_groups.len(),
            highest = ?self.highest_percent_species,
            "Recomputed species groups"
        );
    }

    /// Whether species rows were edited since the last recompute.
    #[must_use]
    pub fn groups_are_stale(&self) -> bool {
        self.groups_revision != self.species_revision
    }

    /// Sum of all six row percents, floored to one decimal.
    #[must_use]
    pub fn total_species_percent(&self) -> f64 {
        species::total_percent(&self.species_list)
    }

    /// Plain sum of the current group percents.
    #[must_use]
    pub fn total_species_group_percent(&self) -> f64 {
        self.species_groups.iter().map(|g| g.percent).sum()
    }

    /// Whether the species total exceeds 100 percent.
    #[must_use]
    pub fn is_over_total_percent(&self) -> bool {
        self.total_species_percent() > MAX_TOTAL_PERCENT
    }

    // -----------------------------------------------------------------------
    // Site and density panels
    // -----------------------------------------------------------------------

    /// Site information panel.
    #[must_use]
    pub fn site(&self) -> &SiteInformation {
        &self.site
    }

    /// Mutable site information panel.
    pub fn site_mut(&mut self) -> &mut SiteInformation {
        &mut self.site
    }

    /// Stand density panel.
    #[must_use]
    pub fn density(&self) -> &StandDensity {
        &self.density
    }

    /// Mutable stand density panel.
    pub fn density_mut(&mut self) -> &mut StandDensity {
        &mut self.density
    }

    /// Region of the selected BEC zone, if it is a known zone.
    #[must_use]
    pub fn bec_region(&self) -> Option<BecRegion> {
        self.site
            .bec_zone
            .as_deref()
            .and_then(catalog::bec_zone)
            .map(|zone| zone.region)
    }
}

impl Default for ModelParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamError;

    fn store_with(rows: &[(&str, f64)]) -> ModelParameterStore {
        let mut store = ModelParameterStore::new();
        for (slot, (code, percent)) in rows.iter().enumerate() {
            store
                .set_species_entry(slot, SpeciesEntry::new(*code, *percent))
                .expect("slot");
        }
        store
    }

    #[test]
    fn recompute_picks_top_group() {
        let mut store = store_with(&[("A", 30.0), ("B", 20.0), ("A", 25.0)]);
        store.recompute_species_groups();

        assert_eq!(
            store.species_groups(),
            [SpeciesGroup::new("A", 55.0), SpeciesGroup::new("B", 20.0)]
        );
        assert_eq!(store.highest_percent_species(), Some("A"));
        assert_eq!(store.selected_site_species(), Some("A"));
    }

    #[test]
    fn recompute_on_empty_list_clears_selection() {
        let mut store = store_with(&[("PL", 70.0)]);
        store.recompute_species_groups();
        store.set_species_list(SpeciesList::new());
        store.recompute_species_groups();

        assert!(store.species_groups().is_empty());
        assert_eq!(store.highest_percent_species(), None);
        assert_eq!(store.selected_site_species(), None);
    }

    #[test]
    fn manual_site_species_survives_until_recompute() {
        let mut store = store_with(&[("A", 60.0), ("B", 40.0)]);
        store.recompute_species_groups();
        store.set_selected_site_species(Some("B".to_string()));

        store.site_mut().age = Some(60.0);
        store.density_mut().basal_area = Some(25.5);
        store.set_derived_by(Some(DerivedBy::Volume));
        assert_eq!(store.selected_site_species(), Some("B"));
        assert_eq!(store.highest_percent_species(), Some("A"));

        store.recompute_species_groups();
        assert_eq!(store.selected_site_species(), Some("A"));
    }

    #[test]
    fn row_edits_do_not_regroup() {
        let mut store = store_with(&[("A", 60.0)]);
        store.recompute_species_groups();
        assert!(!store.groups_are_stale());

        store.set_species_code(1, Some("B".to_string())).expect("slot");
        store.set_species_percent(1, Some(80.0.into())).expect("slot");
        assert!(store.groups_are_stale());
        assert_eq!(store.highest_percent_species(), Some("A"));

        store.recompute_species_groups();
        assert!(!store.groups_are_stale());
        assert_eq!(store.highest_percent_species(), Some("B"));
    }

    #[test]
    fn overflow_boundary() {
        let store = store_with(&[("A", 50.0), ("B", 50.0)]);
        assert!((store.total_species_percent() - 100.0).abs() < 1e-9);
        assert!(!store.is_over_total_percent());

        let store = store_with(&[("A", 60.0), ("B", 41.0)]);
        assert!(store.is_over_total_percent());
    }

    #[test]
    fn group_total_is_not_truncated() {
        let mut store = store_with(&[("A", 10.25), ("B", 10.25)]);
        store.recompute_species_groups();
        assert!((store.total_species_group_percent() - 20.5).abs() < 1e-9);
        assert!((store.total_species_percent() - 20.5).abs() < 1e-9);

        let mut store = store_with(&[("A", 10.26), ("B", 10.01)]);
        store.recompute_species_groups();
        assert!((store.total_species_group_percent() - 20.27).abs() < 1e-9);
        assert!((store.total_species_percent() - 20.2).abs() < 1e-9);
    }

    #[test]
    fn lenient_text_is_stored_and_counts_as_zero() {
        let mut store = ModelParameterStore::new();
        store.set_species_code(0, Some("F".to_string())).expect("slot");
        store.set_species_percent_text(0, "abc").expect("lenient accepts");
        store.recompute_species_groups();

        assert_eq!(
            store.species_list().get(0).expect("slot").percent,
            Some(NumericInput::from("abc"))
        );
        assert_eq!(store.species_groups(), [SpeciesGroup::new("F", 0.0)]);
        assert_eq!(store.total_species_percent(), 0.0);
    }

    #[test]
    fn strict_text_rejects_garbage_and_keeps_slot() {
        let mut config = ParamsConfig::default();
        config.input.numeric_policy = NumericPolicy::Strict;
        let mut store = ModelParameterStore::with_config(config);

        store.set_species_percent_text(0, "45").expect("valid number");
        let err = store
            .set_species_percent_text(0, "abc")
            .expect_err("strict rejects");
        assert!(matches!(err, ParamError::InvalidNumber { .. }));
        assert_eq!(
            store.species_list().get(0).expect("slot").percent,
            Some(NumericInput::Number(45.0))
        );
    }

    #[test]
    fn invalid_slot_is_reported() {
        let mut store = ModelParameterStore::new();
        assert!(matches!(
            store.set_species_code(6, Some("S".to_string())),
            Err(ParamError::SlotOutOfRange { slot: 6, .. })
        ));
        assert!(store.set_species_percent_text(9, "10").is_err());
        assert!(!store.groups_are_stale());
    }

    #[test]
    fn reset_restores_configured_defaults() {
        let mut config = ParamsConfig::default();
        config.defaults.percent_stockable_area = Some(90.0);
        let mut store = ModelParameterStore::with_config(config);

        store.set_species_entry(0, SpeciesEntry::new("S", 100.0)).expect("slot");
        store.recompute_species_groups();
        store.density_mut().percent_stockable_area = Some(40.0);
        store.site_mut().bec_zone = Some("SBS".to_string());
        store.reset();

        assert!(store.species_list().iter().all(SpeciesEntry::is_blank));
        assert!(store.species_groups().is_empty());
        assert_eq!(store.selected_site_species(), None);
        assert_eq!(store.density().percent_stockable_area, Some(90.0));
        assert_eq!(store.site().bec_zone, None);
        assert_eq!(store.config().defaults.percent_stockable_area, Some(90.0));
    }

    #[test]
    fn bec_region_follows_zone() {
        let mut store = ModelParameterStore::new();
        assert_eq!(store.bec_region(), None);
        store.site_mut().bec_zone = Some("CWH".to_string());
        assert_eq!(store.bec_region(), Some(BecRegion::Coast));
        store.site_mut().bec_zone = Some("XYZ".to_string());
        assert_eq!(store.bec_region(), None);
    }
}
