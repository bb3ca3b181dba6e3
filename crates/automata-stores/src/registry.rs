//! The automata registry: cellular automaton definitions keyed by id.
//!
//! Registration always succeeds and assigns the next sequential id with
//! status [`INITIAL_STATUS`]. Status updates are restricted to the
//! configured owner principal or the record's creator. The new status is
//! an uninterpreted free-form string -- values like `"inactive"` carry no
//! enforced semantics.

use std::collections::BTreeMap;

use tracing::debug;

use automata_types::{AutomataId, CellularAutomaton, INITIAL_STATUS, Principal};

use crate::StoreError;

/// Caller-supplied definition of an automaton to register.
///
/// Packs the payload arguments of [`AutomataRegistry::create`] into a
/// single struct for call-site readability.
#[derive(Debug, Clone)]
pub struct AutomatonSpec {
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
}

/// Registry of cellular automaton definitions.
///
/// Owns its id cursor and record map; constructed fresh per session with
/// the owner principal injected rather than hardcoded.
#[derive(Debug, Clone)]
pub struct AutomataRegistry {
    /// The privileged principal allowed to update any record's status.
    owner: Principal,
    /// The id the next successful registration will receive.
    next_id: AutomataId,
    /// All registered automata, keyed by id.
    automata: BTreeMap<AutomataId, CellularAutomaton>,
}

impl AutomataRegistry {
    /// Create an empty registry with the given owner principal.
    pub const fn new(owner: Principal) -> Self {
        Self {
            owner,
            next_id: AutomataId::FIRST,
            automata: BTreeMap::new(),
        }
    }

    /// Register a new automaton and return its assigned id.
    ///
    /// The record starts with status [`INITIAL_STATUS`]. No authorization
    /// is required to register.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the id counter would
    /// overflow.
    pub fn create(
        &mut self,
        spec: AutomatonSpec,
        creator: Principal,
    ) -> Result<AutomataId, StoreError> {
        let id = self.next_id;
        self.next_id = id.checked_next().ok_or(StoreError::IdSpaceExhausted)?;

        debug!(id = %id, creator = %creator, name = %spec.name, "registered automaton");
        self.automata.insert(
            id,
            CellularAutomaton {
                creator,
                name: spec.name,
                description: spec.description,
                rules: spec.rules,
                dimensions: spec.dimensions,
                size: spec.size,
                status: INITIAL_STATUS.to_owned(),
            },
        );
        Ok(id)
    }

    /// Replace the status of a registered automaton.
    ///
    /// Any string is accepted as the new status; no value validation is
    /// performed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AutomataNotFound`] if the id was never
    /// assigned, or [`StoreError::Unauthorized`] if `updater` is neither
    /// the owner principal nor the record's creator. The record is left
    /// unmodified on error.
    pub fn update_status(
        &mut self,
        id: AutomataId,
        new_status: impl Into<String>,
        updater: &Principal,
    ) -> Result<(), StoreError> {
        let automaton = self
            .automata
            .get_mut(&id)
            .ok_or(StoreError::AutomataNotFound(id))?;

        if *updater != self.owner && *updater != automaton.creator {
            return Err(StoreError::Unauthorized {
                principal: updater.clone(),
            });
        }

        automaton.status = new_status.into();
        debug!(id = %id, updater = %updater, status = %automaton.status, "updated automaton status");
        Ok(())
    }

    /// Look up a registered automaton by id.
    pub fn get(&self, id: AutomataId) -> Option<&CellularAutomaton> {
        self.automata.get(&id)
    }

    /// Return the number of registered automata.
    pub fn len(&self) -> usize {
        self.automata.len()
    }

    /// Return whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.automata.is_empty()
    }

    /// Clear all records and restart id assignment at 1.
    ///
    /// Used between independent scenarios; there is no per-record delete.
    pub fn reset(&mut self) {
        self.automata.clear();
        self.next_id = AutomataId::FIRST;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// The owner principal used throughout the tests.
    fn owner() -> Principal {
        Principal::from("CONTRACT_OWNER")
    }

    /// Helper to build a spec with the given name and rule table.
    fn spec(name: &str, rules: Vec<u8>) -> AutomatonSpec {
        AutomatonSpec {
            name: name.to_owned(),
            description: format!("{name} cellular automaton"),
            rules,
            dimensions: 2,
            size: 100,
        }
    }

    #[test]
    fn create_assigns_first_id_and_active_status() {
        let mut registry = AutomataRegistry::new(owner());
        let id = registry
            .create(spec("Game of Life", vec![0, 1, 0, 1, 1, 1, 0, 0]), Principal::from("user1"))
            .unwrap();

        assert_eq!(id, AutomataId(1));
        assert_eq!(registry.len(), 1);

        let automaton = registry.get(id).unwrap();
        assert_eq!(automaton.name, "Game of Life");
        assert_eq!(automaton.status, "active");
    }

    #[test]
    fn ids_are_sequential_without_gaps() {
        let mut registry = AutomataRegistry::new(owner());
        for k in 1..=5 {
            let id = registry
                .create(spec("Rule 30", vec![0, 1, 1, 1, 1, 0, 0, 0]), Principal::from("user2"))
                .unwrap();
            assert_eq!(id.into_inner(), k);
        }
    }

    #[test]
    fn owner_can_update_status() {
        let mut registry = AutomataRegistry::new(owner());
        let id = registry
            .create(spec("Rule 30", vec![0, 1, 1, 1, 1, 0, 0, 0]), Principal::from("user2"))
            .unwrap();

        let result = registry.update_status(id, "inactive", &owner());
        assert!(result.is_ok());
        assert_eq!(registry.get(id).unwrap().status, "inactive");
    }

    #[test]
    fn creator_can_update_status() {
        let mut registry = AutomataRegistry::new(owner());
        let creator = Principal::from("user4");
        let id = registry
            .create(spec("Brian's Brain", vec![1, 1, 0, 0, 1, 0, 1, 1]), creator.clone())
            .unwrap();

        let result = registry.update_status(id, "archived", &creator);
        assert!(result.is_ok());
        assert_eq!(registry.get(id).unwrap().status, "archived");
    }

    #[test]
    fn unauthorized_update_is_rejected_and_leaves_record_unchanged() {
        let mut registry = AutomataRegistry::new(owner());
        let id = registry
            .create(spec("Langton's Ant", vec![1, 0, 1, 0]), Principal::from("user3"))
            .unwrap();

        let result = registry.update_status(id, "inactive", &Principal::from("unauthorized_user"));
        assert!(matches!(result, Err(StoreError::Unauthorized { .. })));
        assert_eq!(registry.get(id).unwrap().status, "active");
    }

    #[test]
    fn update_of_missing_id_is_not_found() {
        let mut registry = AutomataRegistry::new(owner());
        let result = registry.update_status(AutomataId(99), "inactive", &owner());
        assert!(matches!(result, Err(StoreError::AutomataNotFound(id)) if id == AutomataId(99)));
    }

    #[test]
    fn status_accepts_any_string() {
        let mut registry = AutomataRegistry::new(owner());
        let id = registry
            .create(spec("Game of Life", vec![0, 1]), Principal::from("user1"))
            .unwrap();

        registry.update_status(id, "definitely not a status", &owner()).unwrap();
        assert_eq!(registry.get(id).unwrap().status, "definitely not a status");
    }

    #[test]
    fn reset_clears_records_and_restarts_ids() {
        let mut registry = AutomataRegistry::new(owner());
        let _ = registry.create(spec("Game of Life", vec![0, 1]), Principal::from("user1"));
        let _ = registry.create(spec("Rule 30", vec![1, 0]), Principal::from("user2"));
        assert_eq!(registry.len(), 2);

        registry.reset();
        assert!(registry.is_empty());

        let id = registry
            .create(spec("Game of Life", vec![0, 1]), Principal::from("user1"))
            .unwrap();
        assert_eq!(id, AutomataId(1));
    }
}
