//! vocab command - Show stored part-of-speech and link-type descriptions

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::{with_store, Context};
use crate::core::schema::{LinkDefRecord, PosDefRecord};
use crate::core::types::Lang;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct Vocabulary {
    pos: Vec<PosDefRecord>,
    link: Vec<LinkDefRecord>,
}

/// Print the `POS_DEF` and `LINK_DEF` descriptions in `lang`.
pub fn vocab(ctx: &Context, lang: Lang) -> Result<()> {
    let vocabulary = with_store(ctx, |wn| {
        Ok(Vocabulary {
            pos: wn
                .pos_descriptions(lang)
                .context("Failed to read part-of-speech descriptions")?,
            link: wn
                .link_descriptions(lang)
                .context("Failed to read link-type descriptions")?,
        })
    })?;

    if ctx.json {
        output::json(&vocabulary)?;
        return Ok(());
    }

    let verbosity = ctx.verbosity();
    let pos_rows: Vec<Vec<String>> = vocabulary
        .pos
        .iter()
        .map(|d| vec![d.pos.to_string(), d.def.clone()])
        .collect();
    let link_rows: Vec<Vec<String>> = vocabulary
        .link
        .iter()
        .map(|d| vec![d.link.to_string(), d.def.clone()])
        .collect();

    output::print("# Parts of speech", verbosity);
    output::print(output::format_table(&pos_rows), verbosity);
    output::print("", verbosity);
    output::print("# Link types", verbosity);
    output::print(output::format_table(&link_rows), verbosity);
    Ok(())
}
