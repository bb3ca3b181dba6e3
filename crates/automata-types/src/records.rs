//! Record structs stored by the three Automata Lab stores.
//!
//! Every record is a plain data shape keyed by a sequential id in its
//! owning store. Payload fields are replaced wholesale on update -- there
//! is no partial patch. Numeric payload fields carry no range validation:
//! negative generations or rates outside [0, 1] are stored as given,
//! matching the contract behavior this workspace simulates.
//!
//! Rates and metrics use [`Decimal`] -- no floating point in stored state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::AutomataId;
use crate::principal::Principal;

/// Status assigned to every automaton at registration time.
///
/// Status is otherwise a free-form, uninterpreted string; values such as
/// `"inactive"` or `"archived"` carry no enforced semantics.
pub const INITIAL_STATUS: &str = "active";

/// A registered cellular automaton definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellularAutomaton {
    /// The principal that registered the automaton. May update its status.
    pub creator: Principal,
    /// Human-readable name (e.g. "Game of Life").
    pub name: String,
    /// Longer description of the automaton.
    pub description: String,
    /// Rule table as a sequence of small integers.
    pub rules: Vec<u8>,
    /// Number of grid dimensions.
    pub dimensions: u32,
    /// Grid size per dimension.
    pub size: u32,
    /// Free-form status string. Starts as [`INITIAL_STATUS`].
    pub status: String,
}

/// A behavior analysis submitted against an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorAnalysis {
    /// The automaton the analysis refers to. Stored as given -- never
    /// checked against the registry.
    pub automata_id: AutomataId,
    /// The principal that submitted the analysis. Sole updater.
    pub analyzer: Principal,
    /// Description of the observed behavior.
    pub description: String,
    /// Measured values, in submission order.
    pub metrics: Vec<Decimal>,
    /// When the analysis was submitted or last updated.
    pub recorded_at: DateTime<Utc>,
}

/// Evolutionary tuning parameters for an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionParameters {
    /// The automaton the parameters apply to. Stored as given -- never
    /// checked against the registry.
    pub automata_id: AutomataId,
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
