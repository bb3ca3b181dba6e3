//! Session orchestration: one instance of each store, constructed fresh.
//!
//! A [`Session`] is the external entry point to the three stores. It is
//! built from a [`LabConfig`] (which supplies the owner principal), tags
//! every log event with a session UUID, and exposes `reset` to restore
//! the initial state between independent scenarios. There are no
//! process-wide singletons: dropping a session drops all of its state.

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use automata_stores::{
    AutomataRegistry, AutomatonSpec, BehaviorAnalysisLog, EvolutionParameterStore,
    EvolutionTuning, StoreError,
};
use automata_types::{AnalysisId, AutomataId, ParameterSetId, Principal};

use crate::config::LabConfig;

/// A self-contained instance of the three Automata Lab stores.
#[derive(Debug)]
pub struct Session {
    /// Session identifier, tagged onto every log event.
    id: Uuid,
    /// Cellular automaton definitions.
    registry: AutomataRegistry,
    /// Submitted behavior analyses.
    analyses: BehaviorAnalysisLog,
    /// Evolution parameter sets.
    parameters: EvolutionParameterStore,
}

impl Session {
    /// Create a session with empty stores, taking the owner principal
    /// from the given configuration.
    pub fn new(config: &LabConfig) -> Self {
        Self::with_owner(config.registry.owner_principal())
    }

    /// Create a session with empty stores and an explicit owner principal.
    pub fn with_owner(owner: Principal) -> Self {
        let id = Uuid::now_v7();
        info!(session = %id, owner = %owner, "session started");
        Self {
            id,
            registry: AutomataRegistry::new(owner.clone()),
            analyses: BehaviorAnalysisLog::new(),
            parameters: EvolutionParameterStore::new(owner),
        }
    }

    /// Return the session identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    // -----------------------------------------------------------------------
    // Automata registry
    // -----------------------------------------------------------------------

    /// Register a new automaton. See [`AutomataRegistry::create`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the id counter would
    /// overflow.
    pub fn register_automaton(
        &mut self,
        spec: AutomatonSpec,
        creator: Principal,
    ) -> Result<AutomataId, StoreError> {
        let id = self.registry.create(spec, creator)?;
        info!(session = %self.id, automata_id = %id, "automaton registered");
        Ok(id)
    }

    /// Update an automaton's status. See [`AutomataRegistry::update_status`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AutomataNotFound`] or
    /// [`StoreError::Unauthorized`]; the record is unmodified on error.
    pub fn update_automaton_status(
        &mut self,
        id: AutomataId,
        new_status: impl Into<String>,
        updater: &Principal,
    ) -> Result<(), StoreError> {
        let result = self.registry.update_status(id, new_status, updater);
        if let Err(StoreError::Unauthorized { principal }) = &result {
            warn!(session = %self.id, automata_id = %id, principal = %principal, "automaton status update rejected");
        }
        result
    }

    /// Read access to the automata registry.
    pub const fn registry(&self) -> &AutomataRegistry {
        &self.registry
    }

    // -----------------------------------------------------------------------
    // Behavior analysis log
    // -----------------------------------------------------------------------

    /// Submit a behavior analysis. See [`BehaviorAnalysisLog::submit`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the id counter would
    /// overflow.
    pub fn submit_analysis(
        &mut self,
        automata_id: AutomataId,
        description: impl Into<String>,
        metrics: Vec<Decimal>,
        analyzer: Principal,
    ) -> Result<AnalysisId, StoreError> {
        let id = self.analyses.submit(automata_id, description, metrics, analyzer)?;
        info!(session = %self.id, analysis_id = %id, automata_id = %automata_id, "analysis submitted");
        Ok(id)
    }

    /// Update a behavior analysis. See [`BehaviorAnalysisLog::update`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AnalysisNotFound`] or
    /// [`StoreError::Unauthorized`]; the record is unmodified on error.
    pub fn update_analysis(
        &mut self,
        id: AnalysisId,
        description: impl Into<String>,
        metrics: Vec<Decimal>,
        updater: &Principal,
    ) -> Result<(), StoreError> {
        let result = self.analyses.update(id, description, metrics, updater);
        if let Err(StoreError::Unauthorized { principal }) = &result {
            warn!(session = %self.id, analysis_id = %id, principal = %principal, "analysis update rejected");
        }
        result
    }

    /// Read access to the behavior analysis log.
    pub const fn analyses(&self) -> &BehaviorAnalysisLog {
        &self.analyses
    }

    // -----------------------------------------------------------------------
    // Evolution parameter store
    // -----------------------------------------------------------------------

    /// Store evolution parameters. See [`EvolutionParameterStore::set`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the id counter would
    /// overflow.
    pub fn set_evolution_parameters(
        &mut self,
        automata_id: AutomataId,
        tuning: EvolutionTuning,
    ) -> Result<ParameterSetId, StoreError> {
        let id = self.parameters.set(automata_id, tuning)?;
        info!(session = %self.id, parameter_id = %id, automata_id = %automata_id, "evolution parameters stored");
        Ok(id)
    }

    /// Update evolution parameters. See [`EvolutionParameterStore::update`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] (checked before existence) or
    /// [`StoreError::ParametersNotFound`]; the record is unmodified on
    /// error.
    pub fn update_evolution_parameters(
        &mut self,
        id: ParameterSetId,
        tuning: EvolutionTuning,
        updater: &Principal,
    ) -> Result<(), StoreError> {
        let result = self.parameters.update(id, tuning, updater);
        if let Err(StoreError::Unauthorized { principal }) = &result {
            warn!(session = %self.id, parameter_id = %id, principal = %principal, "evolution parameter update rejected");
        }
        result
    }

    /// Read access to the evolution parameter store.
    pub const fn parameters(&self) -> &EvolutionParameterStore {
        &self.parameters
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Reset all three stores to their initial state.
    ///
    /// Counters restart at 1 and all records are dropped. This is the
    /// only way records are ever destroyed.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.analyses.reset();
        self.parameters.reset();
        info!(session = %self.id, "session reset");
    }
}
