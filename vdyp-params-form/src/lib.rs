//! # vdyp-params-form: Form Integration for the Parameter Store
//!
//! This crate sits between the entry screen's input widgets and the
//! UI-agnostic `vdyp-params-core` store.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           Entry screen widgets          │
//! │  ┌───────────────────────────────────┐  │
//! │  │       vdyp-params-form            │  │
//! │  │  ┌─────────────┐ ┌─────────────┐  │  │
//! │  │  │    Hooks    │ │   Session   │  │  │
//! │  │  └──────┬──────┘ └──────┬──────┘  │  │
//! │  │         │  FormEvent    │         │  │
//! │  │         ▼               ▼         │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │   dispatch::apply_event │    │  │
//! │  │    └────────────┬────────────┘    │  │
//! │  │                 ▼                 │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │    vdyp-params-core     │    │  │
//! │  │    └─────────────────────────┘    │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events`: Typed form events, one per editable field
//! - `hooks`: Turn raw widget text into events
//! - `dispatch`: Apply events to the store, regrouping after species edits
//! - `session`: Owns the store and counts applied events
//! - `config`: Form-level settings on top of the core config
//! - `logging`: `tracing-subscriber` setup

pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod hooks;
pub mod logging;
pub mod session;

pub use config::FormConfig;
pub use error::FormError;
pub use events::{FormEvent, FormSection, NumericField, TextField};
pub use session::FormSession;
