//! define command - Print the definition of a synset

use anyhow::{Context as _, Result};

use crate::cli::{with_store, Context};
use crate::core::types::SynsetId;
use crate::ui::output;

/// Print the first definition of `synset`.
pub fn define(ctx: &Context, synset: &SynsetId) -> Result<()> {
    let record = with_store(ctx, |wn| {
        let definition = wn
            .definition_by_synset(synset)
            .with_context(|| format!("Failed to look up the definition of {synset}"))?;
        Ok(definition.map(|d| d.to_record()))
    })?;

    if ctx.json {
        output::json(&record)?;
        return Ok(());
    }

    match record {
        Some(record) => output::print(record.def, ctx.verbosity()),
        None => output::warn(format!("no definition for {synset}"), ctx.verbosity()),
    }
    Ok(())
}
