//! core
//!
//! Domain types and entities of the lexicon.
//!
//! # Modules
//!
//! - [`types`] - Codes and identities: Pos, Lang, LinkType, WordId, SynsetId
//! - [`schema`] - Plain row records and their JSON form
//! - [`word`] / [`synset`] - Entities that may resolve lazily
//! - [`sense`], [`synlink`], [`definition`] - Immutable value entities
//! - [`config`] - Configuration schema and loading
//!
//! Entities borrow the [`WordNet`](crate::store::WordNet) they came from and
//! never outlive it.

pub mod config;
pub mod definition;
mod lazy;
pub mod schema;
pub mod sense;
pub mod synlink;
pub mod synset;
pub mod types;
pub mod word;
