//! # VDYP Parameter Store
//!
//! UI-agnostic state container for the VDYP model parameter entry screen.
//!
//! A [`ModelParameterStore`] holds everything the user types into the
//! three input panels:
//!
//! - **Species**: up to six `(species code, percent)` rows, the groups
//!   derived from them and the site species picked from the top group
//! - **Site**: BEC/eco zone, site index curve, age, height, site index
//! - **Stand density**: stockable area, basal area, trees per hectare,
//!   DBH limit, crown closure
//!
//! Derived values (total percent, group total, overflow flag) are plain
//! accessor methods computed on every call. The only mutating derivation
//! is [`ModelParameterStore::recompute_species_groups`].
//!
//! The store never performs yield calculations and never persists data.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod site;
pub mod snapshot;
pub mod species;
pub mod store;
pub mod types;

pub use config::ParamsConfig;
pub use error::ParamError;
pub use snapshot::ParameterSnapshot;
pub use species::{SPECIES_SLOTS, SpeciesEntry, SpeciesGroup, SpeciesList};
pub use store::ModelParameterStore;
pub use types::*;
