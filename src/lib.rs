//! wnj - Read-only access to the Japanese WordNet database
//!
//! wnj opens the SQLite distribution of the Japanese WordNet and exposes its
//! words, senses, synsets, definitions, and typed synset links as Rust
//! entities that resolve lazily and traverse the concept graph.
//!
//! # Architecture
//!
//! - [`store`] - The repository: connection, statement cache, all queries
//! - [`core`] - Codes, identities, row records, entities, configuration
//! - [`cli`] - Command-line consumer of the public query API
//! - [`ui`] - Output formatting for the CLI
//!
//! # Invariants
//!
//! 1. The database is never written
//! 2. Entities never outlive the store they resolve through
//! 3. A lazy entity queries its row at most once after a successful lookup
//! 4. Identity (word id, synset id) decides equality, not resolution state

pub mod cli;
pub mod core;
pub mod store;
pub mod ui;

pub use crate::core::types::{Lang, LinkType, Pos, SynsetId, WordId};
pub use crate::store::{ErrorPolicy, StoreError, StoreOptions, WordNet};
