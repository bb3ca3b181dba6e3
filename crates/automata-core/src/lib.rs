//! Configuration and session orchestration for the Automata Lab stores.
//!
//! This crate ties the three record stores together behind a single
//! [`Session`] entry point and supplies the configuration layer that
//! injects the owner principal.
//!
//! # Modules
//!
//! - [`config`] -- [`LabConfig`] and YAML loading
//! - [`session`] -- [`Session`]: one fresh instance of each store
//!
//! # Usage
//!
//! ```
//! use automata_core::{LabConfig, Session};
//! use automata_stores::AutomatonSpec;
//! use automata_types::Principal;
//!
//! let config = LabConfig::default();
//! let mut session = Session::new(&config);
//!
//! let id = session
//!     .register_automaton(
//!         AutomatonSpec {
//!             name: "Game of Life".to_owned(),
//!             description: "Conway's Game of Life".to_owned(),
//!             rules: vec![0, 1, 0, 1, 1, 1, 0, 0],
//!             dimensions: 2,
//!             size: 100,
//!         },
//!         Principal::from("user1"),
//!     )
//!     .ok();
//! assert!(id.is_some());
//! ```

pub mod config;
pub mod session;

// Re-export primary types at crate root.
pub use config::{ConfigError, LabConfig, LoggingConfig, RegistryConfig};
pub use session::Session;
