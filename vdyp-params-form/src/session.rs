//! A form session: one open entry screen and the store behind it.

use tracing::warn;
use vdyp_params_core::{ModelParameterStore, ParameterSnapshot};

use crate::config::FormConfig;
use crate::dispatch::{self, Applied};
use crate::error::Result;
use crate::events::FormEvent;

/// Counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Events applied successfully.
    pub applied: u64,
    /// Events the store rejected.
    pub rejected: u64,
    /// Regroups triggered by events.
    pub regroups: u64,
}

/// Owns the parameter store for the lifetime of an open form.
#[derive(Debug)]
pub struct FormSession {
    store: ModelParameterStore,
    config: FormConfig,
    stats: SessionStats,
}

impl FormSession {
    /// Open a session with a blank store built from `config`.
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            store: ModelParameterStore::with_config(config.params.clone()),
            config,
            stats: SessionStats::default(),
        }
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &ModelParameterStore {
        &self.store
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Session counters.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Apply one event.
    ///
    /// # Errors
    /// Propagates the store's rejection; the rejection is also counted.
    pub fn handle(&mut self, event: FormEvent) -> Result<Applied> {
        match dispatch::apply_event(&mut self.store, event, &self.config.form) {
            Ok(applied) => {
                self.stats.applied += 1;
                if applied.regrouped {
                    self.stats.regroups += 1;
                }
                Ok(applied)
            }
            Err(e) => {
                self.stats.rejected += 1;
                warn!(error = %e, "Form event rejected");
                Err(e)
            }
        }
    }

    /// Apply a batch of events in order, continuing past rejected ones.
    ///
    /// Returns the number of rejected events.
    pub fn handle_all<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = FormEvent>,
    {
        let mut rejected = 0;
        for event in events {
            if self.handle(event).is_err() {
                rejected += 1;
            }
        }
        rejected
    }

    /// Capture the current store state.
    #[must_use]
    pub fn snapshot(&self) -> ParameterSnapshot {
        self.store.snapshot()
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
