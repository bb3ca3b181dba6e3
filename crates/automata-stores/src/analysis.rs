//! The behavior analysis log: analyses submitted against automata.
//!
//! Submission always succeeds and stamps the record with the current UTC
//! time. Updates are restricted to the original analyzer -- unlike the
//! registry, the owner principal has no override here. A successful
//! update replaces the description and metrics wholesale and refreshes
//! the timestamp, so repeating the same update is observable.
//!
//! The `automata_id` on each record is stored as given and never checked
//! against the registry.

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use automata_types::{AnalysisId, AutomataId, BehaviorAnalysis, Principal};

use crate::StoreError;

/// Log of submitted behavior analyses.
///
/// Owns its id cursor and record map; constructed fresh per session.
#[derive(Debug, Clone)]
pub struct BehaviorAnalysisLog {
    /// The id the next successful submission will receive.
    next_id: AnalysisId,
    /// All submitted analyses, keyed by id.
    analyses: BTreeMap<AnalysisId, BehaviorAnalysis>,
}

impl BehaviorAnalysisLog {
    /// Create an empty analysis log.
    pub const fn new() -> Self {
        Self {
            next_id: AnalysisId::FIRST,
            analyses: BTreeMap::new(),
        }
    }

    /// Submit a new analysis and return its assigned id.
    ///
    /// The record is stamped with the current UTC time. No authorization
    /// is required to submit, and `automata_id` is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the id counter would
    /// overflow.
    pub fn submit(
        &mut self,
        automata_id: AutomataId,
        description: impl Into<String>,
        metrics: Vec<Decimal>,
        analyzer: Principal,
    ) -> Result<AnalysisId, StoreError> {
        let id = self.next_id;
        self.next_id = id.checked_next().ok_or(StoreError::IdSpaceExhausted)?;

        debug!(id = %id, automata_id = %automata_id, analyzer = %analyzer, "submitted analysis");
        self.analyses.insert(
            id,
            BehaviorAnalysis {
                automata_id,
                analyzer,
                description: description.into(),
                metrics,
                recorded_at: Utc::now(),
            },
        );
        Ok(id)
    }

    /// Replace the description and metrics of a submitted analysis.
    ///
    /// On success the record's timestamp is refreshed to the current UTC
    /// time -- two identical updates still produce two timestamp writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AnalysisNotFound`] if the id was never
    /// assigned, or [`StoreError::Unauthorized`] if `updater` is not the
    /// original analyzer. The record is left unmodified on error.
    pub fn update(
        &mut self,
        id: AnalysisId,
        description: impl Into<String>,
        metrics: Vec<Decimal>,
        updater: &Principal,
    ) -> Result<(), StoreError> {
        let analysis = self
            .analyses
            .get_mut(&id)
            .ok_or(StoreError::AnalysisNotFound(id))?;

        if *updater != analysis.analyzer {
            return Err(StoreError::Unauthorized {
                principal: updater.clone(),
            });
        }

        analysis.description = description.into();
        analysis.metrics = metrics;
        analysis.recorded_at = Utc::now();
        debug!(id = %id, updater = %updater, "updated analysis");
        Ok(())
    }

    /// Look up a submitted analysis by id.
    pub fn get(&self, id: AnalysisId) -> Option<&BehaviorAnalysis> {
        self.analyses.get(&id)
    }

    /// Return the number of submitted analyses.
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    /// Return whether the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Clear all records and restart id assignment at 1.
    pub fn reset(&mut self) {
        self.analyses.clear();
        self.next_id = AnalysisId::FIRST;
    }
}

impl Default for BehaviorAnalysisLog {
    fn default() -> Self {
        Self::new()
    }
}
