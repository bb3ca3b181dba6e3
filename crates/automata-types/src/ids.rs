//! Type-safe sequential identifier wrappers.
//!
//! Every record kind has a strongly-typed id to prevent accidental mixing
//! of identifiers at compile time. Ids are assigned by the owning store,
//! 1-based and strictly monotonic within a store lifetime -- an id is
//! never reused until the store is reset as a whole.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives and
/// sequential-assignment helpers.
macro_rules! define_seq_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// The first id a freshly constructed store hands out.
            pub const FIRST: Self = Self(1);

            /// Return the id that follows this one, or `None` if the id
            /// space is exhausted.
            pub const fn checked_next(self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(next) => Some(Self(next)),
                    None => None,
                }
            }

            /// Return the inner `u64` value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_seq_id! {
    /// Unique identifier for a registered cellular automaton.
    AutomataId
}

define_seq_id! {
    /// Unique identifier for a submitted behavior analysis.
    AnalysisId
}

define_seq_id! {
    /// Unique identifier for an evolution parameter set.
    ParameterSetId
}
