//! The evolution parameter store: tuning parameters keyed by id.
//!
//! Setting parameters requires no authorization at all. Updates are the
//! strictest in the workspace: only the configured owner principal may
//! update, regardless of who created the record, and the authorization
//! check runs before the existence check -- a non-owner updating a
//! missing id sees `Unauthorized`, not `NotFound`.
//!
//! No numeric range validation is performed: negative generation counts
//! and rates outside [0, 1] are stored as given.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use automata_types::{AutomataId, EvolutionParameters, ParameterSetId, Principal};

use crate::StoreError;

/// The tunable payload of a parameter set.
///
/// Packs the five tuning arguments shared by [`set`] and [`update`] into
/// a single struct for call-site readability. The `automata_id` is fixed
/// at [`set`] time and is not part of the tuning payload.
///
/// [`set`]: EvolutionParameterStore::set
/// [`update`]: EvolutionParameterStore::update
#[derive(Debug, Clone)]
pub struct EvolutionTuning {
    /// Number of generations to evolve.
    pub generations: i64,
    /// Per-gene mutation probability. Not range-checked.
    pub mutation_rate: Decimal,
    /// Crossover probability. Not range-checked.
    pub crossover_rate: Decimal,
    /// Individuals per generation.
    pub population_size: i64,
    /// Free-form fitness expression (e.g. `"max(alive_cells)"`).
    pub fitness_function: String,
}

/// Store of evolution parameter sets.
///
/// Owns its id cursor and record map; constructed fresh per session with
/// the owner principal injected rather than hardcoded.
#[derive(Debug, Clone)]
pub struct EvolutionParameterStore {
    /// The only principal allowed to update stored parameter sets.
    owner: Principal,
    /// The id the next successful set will receive.
    next_id: ParameterSetId,
    /// All stored parameter sets, keyed by id.
    parameters: BTreeMap<ParameterSetId, EvolutionParameters>,
}

impl EvolutionParameterStore {
    /// Create an empty parameter store with the given owner principal.
    pub const fn new(owner: Principal) -> Self {
        Self {
            owner,
            next_id: ParameterSetId::FIRST,
            parameters: BTreeMap::new(),
        }
    }

    /// Store a new parameter set and return its assigned id.
    ///
    /// No authorization is required, and `automata_id` is not validated
    /// against the registry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the id counter would
    /// overflow.
    pub fn set(
        &mut self,
        automata_id: AutomataId,
        tuning: EvolutionTuning,
    ) -> Result<ParameterSetId, StoreError> {
        let id = self.next_id;
        self.next_id = id.checked_next().ok_or(StoreError::IdSpaceExhausted)?;

        debug!(id = %id, automata_id = %automata_id, "stored evolution parameters");
        self.parameters.insert(
            id,
            EvolutionParameters {
                automata_id,
                generations: tuning.generations,
                mutation_rate: tuning.mutation_rate,
                crossover_rate: tuning.crossover_rate,
                population_size: tuning.population_size,
                fitness_function: tuning.fitness_function,
            },
        );
        Ok(id)
    }

    /// Replace the tuning payload of a stored parameter set.
    ///
    /// The record's `automata_id` is not part of the payload and is left
    /// as set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] if `updater` is not the owner
    /// principal -- checked before existence, so a non-owner never learns
    /// whether an id exists. Returns [`StoreError::ParametersNotFound`]
    /// if the id was never assigned. The record is left unmodified on
    /// error.
    pub fn update(
        &mut self,
        id: ParameterSetId,
        tuning: EvolutionTuning,
        updater: &Principal,
    ) -> Result<(), StoreError> {
        if *updater != self.owner {
            return Err(StoreError::Unauthorized {
                principal: updater.clone(),
            });
        }

        let params = self
            .parameters
            .get_mut(&id)
            .ok_or(StoreError::ParametersNotFound(id))?;

        params.generations = tuning.generations;
        params.mutation_rate = tuning.mutation_rate;
        params.crossover_rate = tuning.crossover_rate;
        params.population_size = tuning.population_size;
        params.fitness_function = tuning.fitness_function;
        debug!(id = %id, updater = %updater, "updated evolution parameters");
        Ok(())
    }

    /// Look up a stored parameter set by id.
    pub fn get(&self, id: ParameterSetId) -> Option<&EvolutionParameters> {
        self.parameters.get(&id)
    }

    /// Return the number of stored parameter sets.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Return whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Clear all records and restart id assignment at 1.
    pub fn reset(&mut self) {
        self.parameters.clear();
        self.next_id = ParameterSetId::FIRST;
    }
}
