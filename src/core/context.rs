// src/core/context.rs — Immutable dashboard context
//
// Built once at startup and shared read-only with every channel handler.

use std::sync::Arc;

use serde::Serialize;

use crate::data::tally::{unique_winners, unique_years, TallyEntry, WinTally};
use crate::data::RecordSet;
use crate::infra::config::DataConfig;
use crate::infra::errors::{DashError, DashResult};

#[derive(Debug, Clone)]
pub struct DashboardContext {
    records: RecordSet,
    tally: WinTally,
    winners: Vec<String>,
    years: Vec<i32>,
}

/// Derived figures for exports and the summary endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub records: usize,
    pub dropped_rows: usize,
    pub tally: Vec<TallyEntry>,
    pub winners: Vec<String>,
    pub years: Vec<i32>,
}

impl DashboardContext {
    pub fn new(records: RecordSet) -> Self {
        let tally = WinTally::from_records(records.records());
        let winners = unique_winners(records.records());
        let years = unique_years(records.records());
        tracing::debug!(
            "Context built: {} records, {} winners, {} years",
            records.len(),
            winners.len(),
            years.len()
        );
        Self {
            records,
            tally,
            winners,
            years,
        }
    }

    /// Load the dataset and build the shared context.
    pub fn load(data: &DataConfig) -> DashResult<Arc<Self>> {
        let records = crate::data::load_records(data)?;
        Ok(Arc::new(Self::new(records)))
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn tally(&self) -> &WinTally {
        &self.tally
    }

    /// Distinct winners, first-occurrence order.
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// Distinct years, first-occurrence order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn default_winner(&self) -> Option<&str> {
        self.winners.first().map(String::as_str)
    }

    pub fn default_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            records: self.records.len(),
            dropped_rows: self.records.dropped(),
            tally: self.tally.ranked(),
            winners: self.winners.clone(),
            years: self.years.clone(),
        }
    }

    /// Fails on an empty record set: every channel needs a default input.
    pub fn ensure_populated(&self) -> DashResult<()> {
        if self.records.is_empty() {
            return Err(DashError::EmptyDataset {
                path: String::new(),
                dropped: self.records.dropped(),
            });
        }
        Ok(())
    }
}
