//! related command - Follow one link type from every synset with a name
//!
//! Each reached synset is printed as its JSON row, one per line. Targets
//! with no `SYNSET` row print as `{"synset":"<id>"}`.

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::synset_details;
use crate::cli::{with_store, Context};
use crate::core::schema::SynsetRecord;
use crate::core::types::{LinkType, Pos, SynsetId};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct RelatedView {
    from: SynsetId,
    to: SynsetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<SynsetRecord>,
}

/// Print every synset reached by `link` from the synsets named `name`.
pub fn related(ctx: &Context, name: &str, pos: Pos, link: LinkType) -> Result<()> {
    let (lines, views) = with_store(ctx, |wn| {
        let sources = wn
            .synsets_by_name(name, pos)
            .with_context(|| format!("Failed to look up synsets named '{name}'"))?;

        let mut lines = Vec::new();
        let mut views = Vec::new();
        for source in &sources {
            for target in source.connected_synsets(link)? {
                let details = synset_details(&target)?;
                lines.push(match &details {
                    Some(record) => record.to_string(),
                    None => target.to_string(),
                });
                views.push(RelatedView {
                    from: source.id().clone(),
                    to: target.id().clone(),
                    target: details,
                });
            }
        }
        Ok((lines, views))
    })?;

    if ctx.json {
        output::json(&views)?;
        return Ok(());
    }

    if lines.is_empty() {
        output::warn(
            format!("nothing reached from '{name}' by {}", link.description()),
            ctx.verbosity(),
        );
        return Ok(());
    }

    output::print(lines.join("\n"), ctx.verbosity());
    Ok(())
}
