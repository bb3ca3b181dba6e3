//! Shared type definitions for the Automata Lab record stores.
//!
//! This crate is the single source of truth for the types used across the
//! workspace: sequential record identifiers, the opaque caller identity,
//! and the three record shapes held by the stores.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe sequential id wrappers for each record kind
//! - [`principal`] -- Opaque caller identity ([`Principal`])
//! - [`records`] -- The record structs stored by each store

pub mod ids;
pub mod principal;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use ids::{AnalysisId, AutomataId, ParameterSetId};
pub use principal::Principal;
pub use records::{BehaviorAnalysis, CellularAutomaton, EvolutionParameters, INITIAL_STATUS};
