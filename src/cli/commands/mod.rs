//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each lookup handler:
//! 1. Opens the store through [`with_store`](super::with_store)
//! 2. Runs its queries through the public store API
//! 3. Renders text or JSON through [`crate::ui::output`]
//!
//! An empty result is not an error: handlers print a warning and succeed.

mod completion;
mod config_cmd;
mod define;
mod links;
mod related;
mod senses;
mod synsets;
mod vocab;
mod words;

pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, path as config_path, set as config_set};
pub use define::define;
pub use links::links;
pub use related::related;
pub use senses::senses;
pub use synsets::synsets;
pub use vocab::vocab;
pub use words::words;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::schema::SynsetRecord;
use crate::core::synset::Synset;
use crate::store::StoreError;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Words { lemma, pos } => words::words(ctx, &lemma, pos),
        Command::Synsets { name, pos, define } => synsets::synsets(ctx, &name, pos, define),
        Command::Senses { synset, lang } => senses::senses(ctx, &synset, lang),
        Command::Links { synset, link } => links::links(ctx, &synset, link),
        Command::Related { name, pos, link } => related::related(ctx, &name, pos, link),
        Command::Define { synset } => define::define(ctx, &synset),
        Command::Vocab { lang } => vocab::vocab(ctx, lang),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// The row behind `synset`, or `None` when the synset has no row.
///
/// Link targets may be missing from `SYNSET`; listings show them by id
/// instead of failing.
fn synset_details(synset: &Synset<'_>) -> Result<Option<SynsetRecord>, StoreError> {
    match synset.to_record() {
        Err(StoreError::SynsetNotFound(_)) => Ok(None),
        other => other,
    }
}
