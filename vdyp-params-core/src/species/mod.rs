//! Species composition rows and the fixed six-slot list.
//!
//! The entry screen always shows exactly [`SPECIES_SLOTS`] rows. A row
//! contributes to the stand only when it has both a code and a percent;
//! see [`group`] for how rows are aggregated.

pub mod group;

pub use group::{SpeciesGroup, group_species, total_percent};

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, Result};
use crate::types::NumericInput;

/// Number of species rows on the entry screen.
pub const SPECIES_SLOTS: usize = 6;

/// One row of the species composition table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesEntry {
    /// Species code, e.g. `"PL"`. `None` or empty means the row is unused.
    pub species: Option<String>,
    /// Percent of the stand, 0–100 by convention but never validated.
    pub percent: Option<NumericInput>,
}

impl SpeciesEntry {
    /// Create a row with both a code and a numeric percent.
    #[must_use]
    pub fn new(species: impl Into<String>, percent: f64) -> Self {
        Self {
            species: Some(species.into()),
            percent: Some(NumericInput::Number(percent)),
        }
    }

    /// The species code, treating an empty string as absent.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.species.as_deref().filter(|code| !code.is_empty())
    }

    /// Whether the row takes part in grouping: non-empty code and some percent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.code().is_some() && self.percent.is_some()
    }

    /// Whether the row has neither a code nor a percent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.species.is_none() && self.percent.is_none()
    }
}

/// The fixed-size ordered species table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesList {
    entries: [SpeciesEntry; SPECIES_SLOTS],
}

impl SpeciesList {
    /// Create a list with every slot blank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from up to [`SPECIES_SLOTS`] rows; remaining slots stay blank.
    ///
    /// # Errors
    /// Returns [`ParamError::SlotOutOfRange`] if more rows than slots are given.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SpeciesEntry>,
    {
        let mut list = Self::new();
        for (slot, entry) in entries.into_iter().enumerate() {
            *list.get_mut(slot)? = entry;
        }
        Ok(list)
    }

    /// Borrow the row in `slot`.
    ///
    /// # Errors
    /// Returns [`ParamError::SlotOutOfRange`] for `slot >= SPECIES_SLOTS`.
    pub fn get(&self, slot: usize) -> Result<&SpeciesEntry> {
        self.entries.get(slot).ok_or(ParamError::SlotOutOfRange {
            slot,
            slots: SPECIES_SLOTS,
        })
    }

    /// Mutably borrow the row in `slot`.
    ///
    /// # Errors
    /// Returns [`ParamError::SlotOutOfRange`] for `slot >= SPECIES_SLOTS`.
    pub fn get_mut(&mut self, slot: usize) -> Result<&mut SpeciesEntry> {
        self.entries.get_mut(slot).ok_or(ParamError::SlotOutOfRange {
            slot,
            slots: SPECIES_SLOTS,
        })
    }

    /// Iterate over all six rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SpeciesEntry> {
        self.entries.iter()
    }

    /// Rows that take part in grouping.
    pub fn valid_entries(&self) -> impl Iterator<Item = &SpeciesEntry> {
        self.entries.iter().filter(|entry| entry.is_valid())
    }

    /// Reset every row to blank.
    pub fn clear(&mut self) {
        self.entries = Default::default();
    }
}

impl<'a> IntoIterator for &'a SpeciesList {
    type Item = &'a SpeciesEntry;
    type IntoIter = std::slice::Iter<'a, SpeciesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
