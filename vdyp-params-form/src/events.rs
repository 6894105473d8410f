//! Form events emitted by the entry screen.
//!
//! Every editable field has exactly one way to be changed. Events are
//! applied to the store by [`crate::dispatch::apply_event`].

use vdyp_params_core::types::{AgeType, DerivedBy, NumericInput, SiteSpeciesValues};

/// Panel of the entry screen an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSection {
    /// Species composition panel.
    Species,
    /// Site information panel.
    Site,
    /// Stand density panel.
    Density,
    /// Affects the whole form.
    Whole,
}

/// Free-text site fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    BecZone,
    EcoZone,
    SiteIndexCurve,
}

/// Numeric site and density fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Height,
    Bha50SiteIndex,
    PercentStockableArea,
    BasalArea,
    TreesPerHectare,
    MinimumDbhLimit,
    PercentCrownClosure,
}

impl NumericField {
    /// Panel the field is shown on.
    #[must_use]
    pub fn section(self) -> FormSection {
        match self {
            Self::Age | Self::Height | Self::Bha50SiteIndex => FormSection::Site,
            Self::PercentStockableArea
            | Self::BasalArea
            | Self::TreesPerHectare
            | Self::MinimumDbhLimit
            | Self::PercentCrownClosure => FormSection::Density,
        }
    }
}

/// A single edit made on the entry screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// "Derived by" selector changed.
    DerivedByChanged(Option<DerivedBy>),

    /// Species code of a row changed.
    SpeciesCodeChanged { slot: usize, code: Option<String> },

    /// Percent of a row changed to an already-typed value.
    SpeciesPercentChanged {
        slot: usize,
        value: Option<NumericInput>,
    },

    /// Raw text typed into a row's percent field; subject to the input policy.
    SpeciesPercentTyped { slot: usize, text: String },

    /// User picked a site species.
    SiteSpeciesSelected(Option<String>),

    /// A free-text site field changed.
    TextFieldChanged {
        field: TextField,
        value: Option<String>,
    },

    /// A numeric site or density field changed.
    NumericFieldChanged {
        field: NumericField,
        value: Option<f64>,
    },

    /// "Include secondary height" switch toggled.
    SecondaryHeightToggled(bool),

    /// Site species values selector changed.
    SiteSpeciesValuesChanged(Option<SiteSpeciesValues>),

    /// Age type selector changed.
    AgeTypeChanged(Option<AgeType>),

    /// Explicit request to rebuild species groups.
    RecomputeRequested,

    /// Clear the whole form.
    Reset,
}

impl FormEvent {
    /// Panel this event edits.
    #[must_use]
    pub fn section(&self) -> FormSection {
        match self {
            Self::DerivedByChanged(_)
            | Self::SpeciesCodeChanged { .. }
            | Self::SpeciesPercentChanged { .. }
            | Self::SpeciesPercentTyped { .. }
            | Self::RecomputeRequested => FormSection::Species,
            Self::SiteSpeciesSelected(_)
            | Self::TextFieldChanged { .. }
            | Self::SecondaryHeightToggled(_)
            | Self::SiteSpeciesValuesChanged(_)
            | Self::AgeTypeChanged(_) => FormSection::Site,
            Self::NumericFieldChanged { field, .. } => field.section(),
            Self::Reset => FormSection::Whole,
        }
    }

    /// Whether the event edits a raw species row.
    #[must_use]
    pub fn touches_species_list(&self) -> bool {
        matches!(
            self,
            Self::SpeciesCodeChanged { .. }
                | Self::SpeciesPercentChanged { .. }
                | Self::SpeciesPercentTyped { .. }
        )
    }

    /// Short name for log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DerivedByChanged(_) => "derived_by",
            Self::SpeciesCodeChanged { .. } => "species_code",
            Self::SpeciesPercentChanged { .. } => "species_percent",
            Self::SpeciesPercentTyped { .. } => "species_percent_text",
            Self::SiteSpeciesSelected(_) => "site_species",
            Self::TextFieldChanged { .. } => "site_text",
            Self::NumericFieldChanged { .. } => "numeric",
            Self::SecondaryHeightToggled(_) => "secondary_height",
            Self::SiteSpeciesValuesChanged(_) => "site_species_values",
            Self::AgeTypeChanged(_) => "age_type",
            Self::RecomputeRequested => "recompute",
            Self::Reset => "reset",
        }
    }
}
