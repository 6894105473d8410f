//! Apply form events to the parameter store.
//!
//! This is the only place form input reaches the store. Species row
//! edits are followed by a regroup when `auto_regroup` is on, which keeps
//! the site species in step with the table the way the entry screen
//! expects. No other edit touches the groups or the site species.

use tracing::{debug, trace};
use vdyp_params_core::ModelParameterStore;

use crate::config::FormSettings;
use crate::error::Result;
use crate::events::{FormEvent, FormSection, NumericField, TextField};

/// Outcome of a successfully applied event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Panel that was edited.
    pub section: FormSection,
    /// Whether species groups were rebuilt as part of the event.
    pub regrouped: bool,
}

/// Apply one event to `store`.
///
/// # Errors
/// Returns the store's error for an invalid slot or for percent text the
/// strict input policy rejects. The store is unchanged on error.
pub fn apply_event(
    store: &mut ModelParameterStore,
    event: FormEvent,
    settings: &FormSettings,
) -> Result<Applied> {
    let section = event.section();
    let regroup_after = settings.auto_regroup && event.touches_species_list();
    let name = event.name();

    match event {
        FormEvent::DerivedByChanged(derived_by) => store.set_derived_by(derived_by),
        FormEvent::SpeciesCodeChanged { slot, code } => store.set_species_code(slot, code)?,
        FormEvent::SpeciesPercentChanged { slot, value } => {
            store.set_species_percent(slot, value)?;
        }
        FormEvent::SpeciesPercentTyped { slot, text } => {
            store.set_species_percent_text(slot, &text)?;
        }
        FormEvent::SiteSpeciesSelected(species) => store.set_selected_site_species(species),
        FormEvent::TextFieldChanged { field, value } => set_text_field(store, field, value),
        FormEvent::NumericFieldChanged { field, value } => {
            set_numeric_field(store, field, value);
        }
        FormEvent::SecondaryHeightToggled(on) => store.site_mut().inc_secondary_height = on,
        FormEvent::SiteSpeciesValuesChanged(values) => {
            store.site_mut().site_species_values = values;
        }
        FormEvent::AgeTypeChanged(age_type) => store.site_mut().age_type = age_type,
        FormEvent::RecomputeRequested => {
            store.recompute_species_groups();
            return Ok(Applied {
                section,
                regrouped: true,
            });
        }
        FormEvent::Reset => store.reset(),
    }

    trace!(event = name, ?section, "Applied form event");

    if regroup_after {
        store.recompute_species_groups();
        debug!(
            event = name,
            site_species = ?store.selected_site_species(),
            over_total = store.is_over_total_percent(),
            "Regrouped after species edit"
        );
    }

    Ok(Applied {
        section,
        regrouped: regroup_after,
    })
}

fn set_text_field(store: &mut ModelParameterStore, field: TextField, value: Option<String>) {
    let site = store.site_mut();
    match field {
        TextField::BecZone => site.bec_zone = value,
        TextField::EcoZone => site.eco_zone = value,
        TextField::SiteIndexCurve => site.site_index_curve = value,
    }
}

fn set_numeric_field(store: &mut ModelParameterStore, field: NumericField, value: Option<f64>) {
    match field {
        NumericField::Age => store.site_mut().age = value,
        NumericField::Height => store.site_mut().height = value,
        NumericField::Bha50SiteIndex => store.site_mut().bha50_site_index = value,
        NumericField::PercentStockableArea => store.density_mut().percent_stockable_area = value,
        NumericField::BasalArea => store.density_mut().basal_area = value,
        NumericField::TreesPerHectare => store.density_mut().trees_per_hectare = value,
        NumericField::MinimumDbhLimit => store.density_mut().minimum_dbh_limit = value,
        NumericField::PercentCrownClosure => store.density_mut().percent_crown_closure = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks;
    use vdyp_params_core::types::DerivedBy;

    fn auto() -> FormSettings {
        FormSettings::default()
    }

    #[test]
    fn species_edits_regroup_when_enabled() {
        let mut store = ModelParameterStore::new();
        apply_event(&mut store, hooks::on_species_code_input(0, "PL"), &auto()).expect("apply");
        let applied =
            apply_event(&mut store, hooks::on_species_percent_input(0, "60"), &auto()).expect("apply");

        assert!(applied.regrouped);
        assert_eq!(applied.section, FormSection::Species);
        assert_eq!(store.selected_site_species(), Some("PL"));
        assert!(!store.groups_are_stale());
    }

    #[test]
    fn species_edits_wait_for_recompute_when_disabled() {
        let manual = FormSettings {
            auto_regroup: false,
        };
        let mut store = ModelParameterStore::new();
        apply_event(&mut store, hooks::on_species_code_input(0, "S"), &manual).expect("apply");
        apply_event(&mut store, hooks::on_species_percent_value(0, Some(100.0)), &manual)
            .expect("apply");
        assert!(store.groups_are_stale());
        assert_eq!(store.selected_site_species(), None);

        let applied = apply_event(&mut store, FormEvent::RecomputeRequested, &manual).expect("apply");
        assert!(applied.regrouped);
        assert_eq!(store.selected_site_species(), Some("S"));
    }

    #[test]
    fn site_and_density_edits_leave_site_species_alone() {
        let mut store = ModelParameterStore::new();
        apply_event(&mut store, hooks::on_species_code_input(0, "F"), &auto()).expect("apply");
        apply_event(&mut store, hooks::on_species_percent_input(0, "70"), &auto()).expect("apply");
        apply_event(&mut store, hooks::on_site_species_selected("C"), &auto()).expect("apply");

        for event in [
            hooks::on_text_input(TextField::BecZone, "CWH"),
            hooks::on_numeric_input(NumericField::Age, "80"),
            hooks::on_numeric_input(NumericField::PercentCrownClosure, "55"),
            FormEvent::SecondaryHeightToggled(true),
            FormEvent::DerivedByChanged(Some(DerivedBy::BasalArea)),
        ] {
            let applied = apply_event(&mut store, event, &auto()).expect("apply");
            assert!(!applied.regrouped);
        }

        assert_eq!(store.selected_site_species(), Some("C"));
        assert_eq!(store.site().bec_zone.as_deref(), Some("CWH"));
        assert_eq!(store.site().age, Some(80.0));
        assert_eq!(store.density().percent_crown_closure, Some(55.0));
        assert!(store.site().inc_secondary_height);
    }

    #[test]
    fn invalid_slot_is_an_error() {
        let mut store = ModelParameterStore::new();
        let err = apply_event(&mut store, hooks::on_species_code_input(6, "H"), &auto())
            .expect_err("slot 6");
        assert!(err.to_string().contains("slot"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = ModelParameterStore::new();
        apply_event(&mut store, hooks::on_species_code_input(0, "PL"), &auto()).expect("apply");
        apply_event(&mut store, hooks::on_species_percent_input(0, "50"), &auto()).expect("apply");
        let applied = apply_event(&mut store, FormEvent::Reset, &auto()).expect("apply");

        assert_eq!(applied.section, FormSection::Whole);
        assert!(store.species_groups().is_empty());
        assert_eq!(store.total_species_percent(), 0.0);
    }
}
