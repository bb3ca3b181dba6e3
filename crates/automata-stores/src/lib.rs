//! Authorized in-memory record stores for the Automata Lab contracts.
//!
//! Three independent stores simulate the state-transition logic of three
//! record-keeping contracts. Each store owns a monotonic id cursor and a
//! map from id to record; mutation is gated by a principal check.
//!
//! # Architecture
//!
//! - [`registry`] -- [`AutomataRegistry`]: cellular automaton definitions.
//! - [`analysis`] -- [`BehaviorAnalysisLog`]: analyses submitted against
//!   automata.
//! - [`evolution`] -- [`EvolutionParameterStore`]: evolutionary tuning
//!   parameters.
//!
//! # Authorization
//!
//! Who may run the update operation differs per store:
//!
//! | Store | Create | Update |
//! |-------|--------|--------|
//! | `AutomataRegistry` | anyone | owner or record creator |
//! | `BehaviorAnalysisLog` | anyone | original analyzer only |
//! | `EvolutionParameterStore` | anyone | owner only |
//!
//! The owner principal is injected at store construction -- there is no
//! hardcoded sentinel and no process-wide singleton. Each store is
//! constructed fresh per session and reset wholesale between scenarios.
//!
//! # Invariants
//!
//! 1. Ids are 1-based, strictly monotonic, and never reused until reset.
//! 2. Records are never deleted individually; only [`reset`] clears state.
//! 3. On any error the targeted record is left unmodified.
//!
//! [`reset`]: registry::AutomataRegistry::reset

pub mod analysis;
pub mod evolution;
pub mod registry;

// Re-export primary types at crate root.
pub use analysis::BehaviorAnalysisLog;
pub use evolution::{EvolutionParameterStore, EvolutionTuning};
pub use registry::{AutomataRegistry, AutomatonSpec};

use automata_types::{AnalysisId, AutomataId, ParameterSetId, Principal};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during store operations.
///
/// Every error propagates immediately to the caller with no retry and no
/// partial effect.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An update targeted an automaton id that was never assigned.
    #[error("automaton not found: {0}")]
    AutomataNotFound(AutomataId),

    /// An update targeted an analysis id that was never assigned.
    #[error("analysis not found: {0}")]
    AnalysisNotFound(AnalysisId),

    /// An update targeted a parameter-set id that was never assigned.
    #[error("evolution parameters not found: {0}")]
    ParametersNotFound(ParameterSetId),

    /// The calling principal failed the store's authorization rule.
    #[error("principal {principal} is not authorized for this update")]
    Unauthorized {
        /// The principal that failed the check.
        principal: Principal,
    },

    /// The id counter would overflow `u64`.
    ///
    /// Unreachable in any realistic run; ids are allocated with checked
    /// arithmetic rather than silently wrapping.
    #[error("id space exhausted: cannot allocate beyond u64::MAX")]
    IdSpaceExhausted,
}
