//! Opaque caller identity.
//!
//! A [`Principal`] names the caller of a store operation -- a creator, an
//! analyzer, or the configured owner. It is a pre-authenticated opaque
//! string: no cryptographic verification happens in this layer, and two
//! principals are the same caller exactly when the strings are equal.

use serde::{Deserialize, Serialize};

/// An opaque string identifying the caller of a store operation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the principal as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Principal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}
